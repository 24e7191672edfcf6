// Slide: a short timed dash out of a crouch

use log::debug;

use super::config::ControllerConfig;
use super::state::CharacterState;
use crate::core::math::countdown;
use crate::engine::input::FrameInput;

/// Start, sustain or end the slide
///
/// Returns true while the slide owns the tick; walk, jump and attack starts
/// all bail out in that case.
pub fn update_slide(
    state: &mut CharacterState,
    config: &ControllerConfig,
    input: &FrameInput,
    dt: f32,
) -> bool {
    if state.is_sliding {
        state.slide_timer = countdown(state.slide_timer, dt);

        if state.slide_timer <= 0.0 || !state.is_grounded {
            state.is_sliding = false;
            state.slide_timer = 0.0;
            state.velocity.x = 0.0;
            debug!("Slide ended (grounded: {})", state.is_grounded);
            return false;
        }

        state.velocity.x = state.facing_sign() * config.slide_force;
        return true;
    }

    let wants_slide = input.crouch_held && input.jump_pressed;
    if config.slide_enabled && wants_slide && state.is_grounded && !state.attack.is_active() {
        state.is_sliding = true;
        state.slide_timer = config.slide_duration;
        state.is_crouching = false;
        state.is_crawling = false;
        state.velocity.x = state.facing_sign() * config.slide_force;
        debug!("Slide started, facing right: {}", state.facing_right);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::state::AttackState;

    const DT: f32 = 0.1;

    fn slide_input() -> FrameInput {
        FrameInput {
            crouch_held: true,
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        }
    }

    fn config() -> ControllerConfig {
        ControllerConfig {
            slide_duration: 0.25,
            slide_force: 20.0,
            ..Default::default()
        }
    }

    fn grounded(config: &ControllerConfig) -> CharacterState {
        let mut state = CharacterState::new(config);
        state.is_grounded = true;
        state
    }

    #[test]
    fn test_slide_starts_in_facing_direction() {
        let config = config();
        let mut state = grounded(&config);
        state.facing_right = false;

        assert!(update_slide(&mut state, &config, &slide_input(), DT));
        assert!(state.is_sliding);
        assert_eq!(state.slide_timer, 0.25);
        assert_eq!(state.velocity.x, -20.0);
    }

    #[test]
    fn test_slide_requires_ground_and_no_attack() {
        let config = config();

        let mut airborne = CharacterState::new(&config);
        assert!(!update_slide(&mut airborne, &config, &slide_input(), DT));

        let mut attacking = grounded(&config);
        attacking.attack = AttackState::Crouch;
        assert!(!update_slide(&mut attacking, &config, &slide_input(), DT));
        assert!(!attacking.is_sliding);
    }

    #[test]
    fn test_slide_disabled() {
        let config = ControllerConfig {
            slide_enabled: false,
            ..config()
        };
        let mut state = grounded(&config);
        assert!(!update_slide(&mut state, &config, &slide_input(), DT));
    }

    #[test]
    fn test_slide_lasts_its_duration() {
        let config = config();
        let mut state = grounded(&config);
        update_slide(&mut state, &config, &slide_input(), DT);

        // 0.25 -> 0.15 -> 0.05 -> 0
        assert!(update_slide(&mut state, &config, &FrameInput::default(), DT));
        assert!(update_slide(&mut state, &config, &FrameInput::default(), DT));
        assert_eq!(state.velocity.x, 20.0);
        assert!(!update_slide(&mut state, &config, &FrameInput::default(), DT));
        assert!(!state.is_sliding);
        assert_eq!(state.velocity.x, 0.0);
    }

    #[test]
    fn test_slide_ends_when_leaving_ground() {
        let config = config();
        let mut state = grounded(&config);
        update_slide(&mut state, &config, &slide_input(), DT);
        state.velocity.y = -4.0;

        state.is_grounded = false;
        assert!(!update_slide(&mut state, &config, &FrameInput::default(), DT));
        assert!(!state.is_sliding);
        assert_eq!(state.velocity.x, 0.0);
        assert_eq!(state.velocity.y, -4.0);
    }
}
