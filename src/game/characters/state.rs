// Character state record shared by the controller stages

use glam::Vec2;

use super::config::{AttackKind, ControllerConfig};

/// Which attack, if any, is in progress
///
/// A single variant makes "at most one attack at a time" hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackState {
    #[default]
    None,
    Idle,
    Crouch,
    Up,
    AirUp,
    AirDown,
}

impl AttackState {
    pub fn kind(&self) -> Option<AttackKind> {
        match self {
            Self::None => None,
            Self::Idle => Some(AttackKind::Idle),
            Self::Crouch => Some(AttackKind::Crouch),
            Self::Up => Some(AttackKind::Up),
            Self::AirUp => Some(AttackKind::AirUp),
            Self::AirDown => Some(AttackKind::AirDown),
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Self::None
    }

    /// Idle, crouch or up attack
    pub fn is_ground_attack(&self) -> bool {
        matches!(self, Self::Idle | Self::Crouch | Self::Up)
    }

    pub fn is_air_attack(&self) -> bool {
        matches!(self, Self::AirUp | Self::AirDown)
    }
}

impl From<AttackKind> for AttackState {
    fn from(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Idle => Self::Idle,
            AttackKind::Crouch => Self::Crouch,
            AttackKind::Up => Self::Up,
            AttackKind::AirUp => Self::AirUp,
            AttackKind::AirDown => Self::AirDown,
        }
    }
}

/// Mutable per-character record, advanced once per tick by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    /// Authoritative linear velocity, written back to the body after each tick
    pub velocity: Vec2,

    // Grounding
    pub is_grounded: bool,
    /// Grace window after leaving the ground, counts down to zero
    pub coyote_timer: f32,
    /// Whether a grounded jump is allowed this tick: grounded, or the coyote
    /// window was still open when the tick began
    pub coyote_open: bool,
    /// Extra jumps left before landing again
    pub available_jumps: u32,

    // Stance
    pub is_crouching: bool,
    /// Implies `is_crouching`
    pub is_crawling: bool,

    // Slide
    pub is_sliding: bool,
    pub slide_timer: f32,

    pub attack: AttackState,

    /// Sticky while horizontal velocity is exactly zero
    pub facing_right: bool,
}

impl CharacterState {
    /// Initial state for a freshly spawned character
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            velocity: Vec2::ZERO,
            is_grounded: false,
            coyote_timer: 0.0,
            coyote_open: false,
            available_jumps: config.total_jumps,
            is_crouching: false,
            is_crawling: false,
            is_sliding: false,
            slide_timer: 0.0,
            attack: AttackState::None,
            facing_right: true,
        }
    }

    /// Per-kind view of the attack state
    pub fn is_attacking(&self, kind: AttackKind) -> bool {
        self.attack.kind() == Some(kind)
    }

    /// +1 when facing right, -1 when facing left
    pub fn facing_sign(&self) -> f32 {
        if self.facing_right {
            1.0
        } else {
            -1.0
        }
    }
}
