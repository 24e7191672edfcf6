// Jumping, walking and jump-feel gravity

use glam::Vec2;
use log::debug;

use super::config::ControllerConfig;
use super::state::{AttackState, CharacterState};
use crate::engine::input::FrameInput;

/// What the jump stage did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Jump processing was skipped (sliding or diving)
    Suppressed,
    /// No jump started
    None,
    /// Jump from the ground or within the coyote window
    Grounded,
    /// Jump spent from the air budget
    Air,
}

/// Jump start, short-hop cut-off and asymmetric gravity
///
/// `gravity` is the integrator's acceleration. The integrator applies it once
/// on its own, so only the extra `(multiplier - 1)` share is added here.
pub fn update_jump(
    state: &mut CharacterState,
    config: &ControllerConfig,
    input: &FrameInput,
    gravity: Vec2,
    dt: f32,
) -> JumpOutcome {
    if state.is_sliding || state.attack == AttackState::AirDown {
        return JumpOutcome::Suppressed;
    }

    let mut outcome = JumpOutcome::None;

    if input.jump_pressed {
        if state.is_grounded || state.coyote_open {
            state.available_jumps = config.air_jumps();
            state.coyote_timer = 0.0;
            state.coyote_open = false;
            state.velocity.y = config.jump_force;
            if state.attack.is_ground_attack() {
                debug!("Jump interrupted {:?}", state.attack);
                state.attack = AttackState::None;
            }
            outcome = JumpOutcome::Grounded;
        } else if state.available_jumps > 0 {
            state.available_jumps -= 1;
            state.velocity.y = config.jump_force;
            outcome = JumpOutcome::Air;
        }

        if outcome != JumpOutcome::None {
            debug!("{:?} jump, {} air jumps left", outcome, state.available_jumps);
        }
    }

    if input.jump_released && state.velocity.y > 0.0 {
        state.velocity.y *= 0.5;
    }

    if state.velocity.y < 0.0 {
        state.velocity.y += gravity.y * (config.fall_multiplier - 1.0) * dt;
    } else if state.velocity.y > 0.0 && !input.jump_held {
        state.velocity.y += gravity.y * (config.low_jump_multiplier - 1.0) * dt;
    }

    outcome
}

/// Horizontal input after attack and slide locks
pub fn effective_horizontal(
    state: &CharacterState,
    config: &ControllerConfig,
    input: &FrameInput,
) -> f32 {
    if state.is_sliding {
        return 0.0;
    }

    let frozen = match state.attack.kind() {
        Some(kind) => {
            state.attack.is_ground_attack() || config.attacks.get(kind).freezes_movement()
        }
        None => false,
    };

    if frozen {
        0.0
    } else {
        input.horizontal
    }
}

/// Current walk speed for the stance and run button
pub fn walk_speed(state: &CharacterState, config: &ControllerConfig, input: &FrameInput) -> f32 {
    if state.is_crawling {
        config.crawl_speed
    } else if input.run_held && !state.is_crouching {
        config.move_speed * config.run_speed_modifier
    } else {
        config.move_speed
    }
}

/// Set horizontal velocity from input; the slide owns velocity while active
pub fn update_walk(state: &mut CharacterState, config: &ControllerConfig, input: &FrameInput) {
    if state.is_sliding {
        return;
    }

    let horizontal = effective_horizontal(state, config, input);
    state.velocity.x = horizontal * walk_speed(state, config, input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::config::AirMovement;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;
    const GRAVITY: Vec2 = Vec2::new(0.0, -10.0);

    fn grounded_state(config: &ControllerConfig) -> CharacterState {
        let mut state = CharacterState::new(config);
        state.is_grounded = true;
        state.coyote_timer = config.coyote_time;
        state
    }

    fn press_jump() -> FrameInput {
        FrameInput {
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_grounded_jump() {
        let config = ControllerConfig::default();
        let mut state = grounded_state(&config);

        let outcome = update_jump(&mut state, &config, &press_jump(), GRAVITY, DT);
        assert_eq!(outcome, JumpOutcome::Grounded);
        assert_eq!(state.velocity.y, config.jump_force);
        assert_eq!(state.available_jumps, config.total_jumps - 1);
        assert_eq!(state.coyote_timer, 0.0);
    }

    #[test]
    fn test_coyote_jump_counts_as_grounded() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.coyote_timer = 0.05;
        state.coyote_open = true;
        state.available_jumps = config.total_jumps;

        let outcome = update_jump(&mut state, &config, &press_jump(), GRAVITY, DT);
        assert_eq!(outcome, JumpOutcome::Grounded);
        assert_eq!(state.available_jumps, config.air_jumps());
    }

    #[test]
    fn test_air_jump_spends_budget() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.available_jumps = 1;

        assert_eq!(
            update_jump(&mut state, &config, &press_jump(), GRAVITY, DT),
            JumpOutcome::Air
        );
        assert_eq!(state.available_jumps, 0);

        state.velocity.y = -2.0;
        assert_eq!(
            update_jump(&mut state, &config, &press_jump(), Vec2::ZERO, DT),
            JumpOutcome::None
        );
        assert_eq!(state.velocity.y, -2.0);
    }

    #[test]
    fn test_release_halves_rising_velocity() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.velocity.y = 10.0;
        let release = FrameInput {
            jump_released: true,
            ..Default::default()
        };

        update_jump(&mut state, &config, &release, Vec2::ZERO, DT);
        assert_eq!(state.velocity.y, 5.0);
    }

    #[test]
    fn test_fall_gravity_is_scaled() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.velocity.y = -1.0;

        update_jump(&mut state, &config, &FrameInput::default(), GRAVITY, DT);
        let expected = -1.0 + GRAVITY.y * (config.fall_multiplier - 1.0) * DT;
        assert_relative_eq!(state.velocity.y, expected);
    }

    #[test]
    fn test_low_jump_gravity_only_when_released() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.velocity.y = 8.0;

        let held = FrameInput {
            jump_held: true,
            ..Default::default()
        };
        update_jump(&mut state, &config, &held, GRAVITY, DT);
        assert_eq!(state.velocity.y, 8.0);

        update_jump(&mut state, &config, &FrameInput::default(), GRAVITY, DT);
        let expected = 8.0 + GRAVITY.y * (config.low_jump_multiplier - 1.0) * DT;
        assert_relative_eq!(state.velocity.y, expected);
    }

    #[test]
    fn test_grounded_jump_interrupts_ground_attack() {
        let config = ControllerConfig::default();
        for attack in [AttackState::Idle, AttackState::Crouch, AttackState::Up] {
            let mut state = grounded_state(&config);
            state.attack = attack;
            update_jump(&mut state, &config, &press_jump(), GRAVITY, DT);
            assert_eq!(state.attack, AttackState::None);
            assert_eq!(state.velocity.y, config.jump_force);
        }
    }

    #[test]
    fn test_air_jump_keeps_jump_attack() {
        let config = ControllerConfig::default();
        let mut state = CharacterState::new(&config);
        state.attack = AttackState::AirUp;
        state.available_jumps = 1;

        update_jump(&mut state, &config, &press_jump(), GRAVITY, DT);
        assert_eq!(state.attack, AttackState::AirUp);
        assert_eq!(state.available_jumps, 0);
    }

    #[test]
    fn test_dive_and_slide_suppress_jump() {
        let config = ControllerConfig::default();

        let mut diving = CharacterState::new(&config);
        diving.attack = AttackState::AirDown;
        diving.velocity.y = config.jump_down_speed;
        assert_eq!(
            update_jump(&mut diving, &config, &press_jump(), GRAVITY, DT),
            JumpOutcome::Suppressed
        );
        assert_eq!(diving.velocity.y, config.jump_down_speed);

        let mut sliding = grounded_state(&config);
        sliding.is_sliding = true;
        assert_eq!(
            update_jump(&mut sliding, &config, &press_jump(), GRAVITY, DT),
            JumpOutcome::Suppressed
        );
        assert_eq!(sliding.velocity.y, 0.0);
    }

    #[test]
    fn test_walk_speeds() {
        let config = ControllerConfig::default();
        let mut state = grounded_state(&config);
        let right = FrameInput {
            horizontal: 1.0,
            ..Default::default()
        };

        update_walk(&mut state, &config, &right);
        assert_eq!(state.velocity.x, config.move_speed);

        let running = FrameInput {
            run_held: true,
            ..right
        };
        update_walk(&mut state, &config, &running);
        assert_relative_eq!(state.velocity.x, config.move_speed * config.run_speed_modifier);

        state.is_crouching = true;
        state.is_crawling = true;
        update_walk(&mut state, &config, &running);
        assert_eq!(state.velocity.x, config.crawl_speed);
    }

    #[test]
    fn test_walk_frozen_by_ground_attacks() {
        let config = ControllerConfig::default();
        let input = FrameInput {
            horizontal: -1.0,
            ..Default::default()
        };

        for attack in [AttackState::Idle, AttackState::Crouch, AttackState::Up] {
            let mut state = grounded_state(&config);
            state.attack = attack;
            state.velocity.x = 3.0;
            update_walk(&mut state, &config, &input);
            assert_eq!(state.velocity.x, 0.0);
        }
    }

    #[test]
    fn test_air_attack_movement_policy() {
        let mut config = ControllerConfig::default();
        let input = FrameInput {
            horizontal: 1.0,
            ..Default::default()
        };

        let mut state = CharacterState::new(&config);
        state.attack = AttackState::AirUp;
        config.attacks.air_up.movement = AirMovement::Free;
        update_walk(&mut state, &config, &input);
        assert_eq!(state.velocity.x, config.move_speed);

        config.attacks.air_up.movement = AirMovement::Freeze;
        update_walk(&mut state, &config, &input);
        assert_eq!(state.velocity.x, 0.0);

        state.attack = AttackState::AirDown;
        config.attacks.air_down.movement = AirMovement::Free;
        update_walk(&mut state, &config, &input);
        assert_eq!(state.velocity.x, config.move_speed);
    }

    #[test]
    fn test_walk_skipped_while_sliding() {
        let config = ControllerConfig::default();
        let mut state = grounded_state(&config);
        state.is_sliding = true;
        state.velocity.x = config.slide_force;

        let input = FrameInput {
            horizontal: -1.0,
            ..Default::default()
        };
        update_walk(&mut state, &config, &input);
        assert_eq!(state.velocity.x, config.slide_force);
    }
}
