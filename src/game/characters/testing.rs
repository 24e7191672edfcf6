// Test doubles for the controller's collaborators

use glam::Vec2;

use super::controller::{AnimationProgress, CharacterPhysics};
use crate::engine::physics::CollisionGroups;

/// Flat floor whose top surface sits at `ground_top`, starting at `ground_min_x`
pub struct FakePhysics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity: Vec2,
    pub ground_top: Option<f32>,
    pub ground_min_x: f32,
}

impl FakePhysics {
    /// Body at the origin with its feet (y = -1) on the floor
    pub fn grounded() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gravity: Vec2::new(0.0, -9.81),
            ground_top: Some(-1.0),
            ground_min_x: f32::NEG_INFINITY,
        }
    }

    pub fn airborne() -> Self {
        Self {
            ground_top: None,
            ..Self::grounded()
        }
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.ground_top = if grounded { Some(-1.0) } else { None };
    }
}

impl CharacterPhysics for FakePhysics {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, layer_mask: u32) -> bool {
        if layer_mask & CollisionGroups::Ground.bits() == 0 {
            return false;
        }
        self.ground_top.map_or(false, |top| {
            center.y - radius <= top && center.x + radius > self.ground_min_x
        })
    }
}

/// Reports progress for a single playing clip, or nothing at all
#[derive(Default)]
pub struct FakeAnimation {
    pub playing: Option<(String, f32)>,
}

impl FakeAnimation {
    pub fn playing(clip: &str, progress: f32) -> Self {
        Self {
            playing: Some((clip.to_string(), progress)),
        }
    }
}

impl AnimationProgress for FakeAnimation {
    fn progress(&self, clip: &str) -> Option<f32> {
        match &self.playing {
            Some((name, progress)) if name == clip => Some(*progress),
            _ => None,
        }
    }
}
