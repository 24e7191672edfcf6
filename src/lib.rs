// Platformer character controller on rapier2d
//
// - `core`: small numeric helpers
// - `engine`: input, physics world, fixed-step scheduling
// - `game`: the character controller and its entity wiring

pub mod core;
pub mod engine;
pub mod game;
