// Per-player input state management

use super::action::{Action, Axis};
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,

    /// Analog axis values, indexed by `Axis::index`
    axes: [f32; 2],
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            axes: [0.0; 2],
        }
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Current value of an analog axis
    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes[axis.index()]
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Set an analog axis, clamped to [-1, 1]
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        self.axes[axis.index()] = value.clamp(-1.0, 1.0);
    }

    /// Roll the edges over; call once per tick after the controller has read the input
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_input_creation() {
        let input = PlayerInput::new();
        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input.axis(Axis::MoveHorizontal), 0.0);
    }

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        assert!(input.just_pressed(Action::Attack));

        input.update();
        assert!(input.is_pressed(Action::Attack));
        assert!(!input.just_pressed(Action::Attack));
    }

    #[test]
    fn test_axis_is_clamped() {
        let mut input = PlayerInput::new();
        input.set_axis(Axis::MoveHorizontal, 3.0);
        input.set_axis(Axis::MoveVertical, -2.0);
        assert_eq!(input.axis(Axis::MoveHorizontal), 1.0);
        assert_eq!(input.axis(Axis::MoveVertical), -1.0);
    }

    #[test]
    fn test_multiple_presses_same_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump); // Press again while still down

        assert!(!input.just_pressed(Action::Jump), "Should not re-trigger the edge");
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump); // Release without pressing

        assert!(!input.just_released(Action::Jump));
    }
}
