// Character controller: runs the per-tick stage pipeline

use glam::Vec2;
use log::debug;

use super::attack::update_attacks;
use super::config::{AttackKind, ControllerConfig};
use super::locomotion::{update_jump, update_walk};
use super::presentation::{present, update_facing, Presentation};
use super::sensor::{sense_ground, GroundTransition};
use super::slide::update_slide;
use super::stance::update_stance;
use super::state::{AttackState, CharacterState};
use crate::engine::input::FrameInput;

/// Physics capabilities the controller needs from the character's body
pub trait CharacterPhysics {
    fn position(&self) -> Vec2;
    fn linear_velocity(&self) -> Vec2;
    fn set_linear_velocity(&mut self, velocity: Vec2);
    /// Gravitational acceleration the integrator applies
    fn gravity(&self) -> Vec2;
    /// True if a circle overlaps anything in `layer_mask`, ignoring the character itself
    fn overlap_circle(&self, center: Vec2, radius: f32, layer_mask: u32) -> bool;
}

/// Read access to animation playback
pub trait AnimationProgress {
    /// Normalized progress of `clip`, or `None` if it is not the clip playing
    fn progress(&self, clip: &str) -> Option<f32>;
}

/// Events fired by attack clips when they reach their end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationEvent {
    FinishAttackIdle,
    FinishAttackCrouch,
    FinishAttackUp,
    FinishAttackJump,
    FinishAttackJumpDown,
    /// Ends whichever air attack is running
    FinishAllJumpAttacks,
}

impl AnimationEvent {
    /// Parse an event name as authored on a clip
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FinishAttackIdle" => Some(Self::FinishAttackIdle),
            "FinishAttackCrouch" => Some(Self::FinishAttackCrouch),
            "FinishAttackUp" => Some(Self::FinishAttackUp),
            "FinishAttackJump" => Some(Self::FinishAttackJump),
            "FinishAttackJumpDown" => Some(Self::FinishAttackJumpDown),
            "FinishAllJumpAttacks" => Some(Self::FinishAllJumpAttacks),
            _ => None,
        }
    }

    /// Event fired at the end of an attack kind's clip
    pub fn finishing(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Idle => Self::FinishAttackIdle,
            AttackKind::Crouch => Self::FinishAttackCrouch,
            AttackKind::Up => Self::FinishAttackUp,
            AttackKind::AirUp => Self::FinishAttackJump,
            AttackKind::AirDown => Self::FinishAttackJumpDown,
        }
    }

    fn ends(&self, attack: AttackState) -> bool {
        match self {
            Self::FinishAllJumpAttacks => attack.is_air_attack(),
            _ => attack.kind().map(Self::finishing) == Some(*self),
        }
    }
}

/// Owns the character's state and advances it once per tick
#[derive(Debug)]
pub struct CharacterController {
    config: ControllerConfig,
    state: CharacterState,
    /// When false, ticks leave the state untouched
    can_move: bool,
}

impl CharacterController {
    pub fn new(config: ControllerConfig) -> Self {
        let state = CharacterState::new(&config);
        Self {
            config,
            state,
            can_move: true,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Freeze or release the controller (cutscenes, menus)
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    /// Run one simulation step
    ///
    /// Stage order: ground sensor, slide, jump, walk, stance, attacks, facing.
    /// The body's velocity is read before the first stage and written back
    /// after the last.
    pub fn tick(
        &mut self,
        input: &FrameInput,
        physics: &mut dyn CharacterPhysics,
        animation: &dyn AnimationProgress,
        dt: f32,
    ) -> Presentation {
        if !self.can_move {
            return present(&self.state);
        }

        let state = &mut self.state;
        let config = &self.config;
        state.velocity = physics.linear_velocity();

        match sense_ground(state, config, &*physics, dt) {
            GroundTransition::Landed => debug!("Landed, jumps reset to {}", state.available_jumps),
            GroundTransition::LeftGround => debug!("Left ground"),
            GroundTransition::Unchanged => {}
        }

        update_slide(state, config, input, dt);
        update_jump(state, config, input, physics.gravity(), dt);
        update_walk(state, config, input);
        update_stance(state, config, input);
        update_attacks(state, config, input, animation);
        update_facing(state);

        physics.set_linear_velocity(state.velocity);
        present(state)
    }

    /// End the running attack if `event` belongs to it
    ///
    /// Returns true if an attack was ended.
    pub fn handle_animation_event(&mut self, event: AnimationEvent) -> bool {
        if event.ends(self.state.attack) {
            debug!("{:?} ended {:?}", event, self.state.attack);
            self.state.attack = AttackState::None;
            true
        } else {
            false
        }
    }
}
