// Game-specific code built on top of the engine

pub mod characters;
