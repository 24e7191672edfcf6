// Engine modules: input, physics, fixed-step scheduling

pub mod game_loop;
pub mod input;
pub mod physics;
