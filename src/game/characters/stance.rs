// Crouch and crawl

use super::config::ControllerConfig;
use super::state::CharacterState;
use crate::core::math::AXIS_EPSILON;
use crate::engine::input::FrameInput;

/// Derive crouch/crawl from the crouch button and grounding
///
/// Crawling is crouching plus horizontal input. Both are off while sliding.
pub fn update_stance(state: &mut CharacterState, config: &ControllerConfig, input: &FrameInput) {
    if state.is_grounded && input.crouch_held && !state.is_sliding {
        state.is_crouching = true;
        state.is_crawling = config.crawl_enabled && input.horizontal.abs() > AXIS_EPSILON;
    } else {
        state.is_crouching = false;
        state.is_crawling = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crouch(horizontal: f32) -> FrameInput {
        FrameInput {
            crouch_held: true,
            horizontal,
            ..Default::default()
        }
    }

    fn grounded(config: &ControllerConfig) -> CharacterState {
        let mut state = CharacterState::new(config);
        state.is_grounded = true;
        state
    }

    #[test]
    fn test_crouch_without_movement() {
        let config = ControllerConfig::default();
        let mut state = grounded(&config);

        update_stance(&mut state, &config, &crouch(0.0));
        assert!(state.is_crouching);
        assert!(!state.is_crawling);
    }

    #[test]
    fn test_crawl_requires_movement() {
        let config = ControllerConfig::default();
        let mut state = grounded(&config);

        update_stance(&mut state, &config, &crouch(-0.6));
        assert!(state.is_crouching);
        assert!(state.is_crawling);
    }

    #[test]
    fn test_crawl_disabled() {
        let config = ControllerConfig {
            crawl_enabled: false,
            ..Default::default()
        };
        let mut state = grounded(&config);

        update_stance(&mut state, &config, &crouch(1.0));
        assert!(state.is_crouching);
        assert!(!state.is_crawling);
    }

    #[test]
    fn test_no_crouch_in_air() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);

        update_stance(&mut state, &config, &crouch(1.0));
        assert!(!state.is_crouching);
        assert!(!state.is_crawling);
    }

    #[test]
    fn test_release_stands_up() {
        let config = ControllerConfig::default();
        let mut state = grounded(&config);
        update_stance(&mut state, &config, &crouch(1.0));

        update_stance(&mut state, &config, &FrameInput::default());
        assert!(!state.is_crouching);
        assert!(!state.is_crawling);
    }

    #[test]
    fn test_sliding_suppresses_stance() {
        let config = ControllerConfig::default();
        let mut state = grounded(&config);
        state.is_sliding = true;

        update_stance(&mut state, &config, &crouch(1.0));
        assert!(!state.is_crouching);
    }
}
