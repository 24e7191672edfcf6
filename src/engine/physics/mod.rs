// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{presets, BodyBuilder, ColliderBuilder2D};
pub use collision::CollisionGroups;
pub use world::{ColliderHandle, PhysicsWorld, RigidBodyHandle};

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::Vector;
