// Character system
//
// This module contains the platformer character controller:
// - Tunable configuration (RON-loadable)
// - Per-tick state and the stage functions that advance it
//   (ground sensor, slide, jump/walk, stance, attack arbitration, facing)
// - Presentation: animator parameters and hitbox selection
// - Animation playback and the physics-backed character entity

pub mod animation;
pub mod attack;
pub mod character;
pub mod config;
pub mod controller;
pub mod locomotion;
pub mod presentation;
pub mod sensor;
pub mod slide;
pub mod stance;
pub mod state;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer};
pub use character::{BodyProxy, Character, CharacterBuilder, HitboxColliders};
pub use config::{AttackKind, AttackPolicy, ConfigError, ControllerConfig};
pub use controller::{AnimationEvent, AnimationProgress, CharacterController, CharacterPhysics};
pub use presentation::{AnimatorParams, AnimatorSink, AnimatorValue, Hitbox, Presentation};
pub use state::{AttackState, CharacterState};

/// Errors raised while wiring a character to its collaborators
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A required collaborator was never provided
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("Rigid body not found in physics world")]
    UnknownBody,

    #[error("Hitbox collider not found in physics world")]
    UnknownCollider,
}
