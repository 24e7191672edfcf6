// Input handling system
//
// This module is the input-abstraction layer between raw device events and the
// character controller: named digital buttons with edge detection, plus two
// analog movement axes.
//
// ## Architecture
//
// - `action`: Defines the buttons and axes the controller understands
// - `player`: Per-player input state (levels, edges, axes)
// - `frame`: The immutable per-tick snapshot handed to the controller
//
// ## Usage Example
//
// ```rust
// use rusted_platformer::engine::input::{Action, Axis, FrameInput, PlayerInput};
//
// let mut input = PlayerInput::new();
// input.press(Action::Jump);
// input.set_axis(Axis::MoveHorizontal, 1.0);
//
// let frame = FrameInput::from_player(&input);
// assert!(frame.jump_pressed);
//
// // After the controller tick, roll the edges over
// input.update();
// ```

pub mod action;
pub mod frame;
pub mod player;

// Re-export commonly used types
pub use action::{Action, Axis};
pub use frame::FrameInput;
pub use player::PlayerInput;
