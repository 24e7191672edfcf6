// Shared helpers used by engine and game code

pub mod math;
