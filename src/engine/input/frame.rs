// Per-tick input snapshot consumed by the character controller

use super::action::{Action, Axis};
use super::player::PlayerInput;

/// Everything the controller reads from the input layer in one tick
///
/// Edge fields (`*_pressed`, `*_released`) are true only on the tick the
/// transition happened; `*_held` fields mirror the button level.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Vertical axis in [-1, 1], positive is up
    pub vertical: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub jump_held: bool,
    pub attack_pressed: bool,
    pub crouch_held: bool,
    pub run_held: bool,
}

impl FrameInput {
    /// Sample a player's input state
    pub fn from_player(input: &PlayerInput) -> Self {
        Self {
            horizontal: input.axis(Axis::MoveHorizontal),
            vertical: input.axis(Axis::MoveVertical),
            jump_pressed: input.just_pressed(Action::Jump),
            jump_released: input.just_released(Action::Jump),
            jump_held: input.is_pressed(Action::Jump),
            attack_pressed: input.just_pressed(Action::Attack),
            crouch_held: input.is_pressed(Action::Crouch),
            run_held: input.is_pressed(Action::Run),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let frame = FrameInput::default();
        assert_eq!(frame.horizontal, 0.0);
        assert!(!frame.jump_pressed);
        assert!(!frame.crouch_held);
    }

    #[test]
    fn test_sample_edges_and_levels() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::Crouch);
        input.set_axis(Axis::MoveHorizontal, -0.5);

        let frame = FrameInput::from_player(&input);
        assert!(frame.jump_pressed);
        assert!(frame.jump_held);
        assert!(frame.crouch_held);
        assert!(!frame.attack_pressed);
        assert_eq!(frame.horizontal, -0.5);

        input.update();
        input.release(Action::Jump);
        let frame = FrameInput::from_player(&input);
        assert!(!frame.jump_pressed);
        assert!(frame.jump_released);
        assert!(!frame.jump_held);
    }
}
