// Presentation: facing, animator parameters and hitbox selection
//
// Everything here is derived from `CharacterState`; nothing is stored.

use super::state::{AttackState, CharacterState};

/// Which of the three character hitboxes is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hitbox {
    Stand,
    Crouch,
    Crawl,
}

impl Hitbox {
    pub const ALL: [Hitbox; 3] = [Hitbox::Stand, Hitbox::Crouch, Hitbox::Crawl];
}

/// A named animator parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorValue {
    Float(f32),
    Bool(bool),
}

/// Receives animator parameters by name
pub trait AnimatorSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Flat snapshot of the values the animator state machine reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorParams {
    pub speed: f32,
    pub vertical_velocity: f32,
    pub is_grounded: bool,
    pub is_crouching: bool,
    pub is_crawling: bool,
    pub is_sliding: bool,
    pub is_attacking_idle: bool,
    pub is_attacking_crouch: bool,
    pub is_attacking_up: bool,
    pub is_attacking_jump: bool,
    pub is_attacking_jump_down: bool,
}

impl AnimatorParams {
    pub fn from_state(state: &CharacterState) -> Self {
        Self {
            speed: state.velocity.x.abs(),
            vertical_velocity: state.velocity.y,
            is_grounded: state.is_grounded,
            is_crouching: state.is_crouching,
            is_crawling: state.is_crawling,
            is_sliding: state.is_sliding,
            is_attacking_idle: state.attack == AttackState::Idle,
            is_attacking_crouch: state.attack == AttackState::Crouch,
            is_attacking_up: state.attack == AttackState::Up,
            is_attacking_jump: state.attack == AttackState::AirUp,
            is_attacking_jump_down: state.attack == AttackState::AirDown,
        }
    }

    /// Parameters in the order the animator declares them
    pub fn entries(&self) -> [(&'static str, AnimatorValue); 11] {
        use AnimatorValue::{Bool, Float};
        [
            ("Speed", Float(self.speed)),
            ("VerticalVelocity", Float(self.vertical_velocity)),
            ("IsGrounded", Bool(self.is_grounded)),
            ("IsCrouching", Bool(self.is_crouching)),
            ("IsCrawling", Bool(self.is_crawling)),
            ("IsSliding", Bool(self.is_sliding)),
            ("IsAttackingIdle", Bool(self.is_attacking_idle)),
            ("IsAttackingCrouch", Bool(self.is_attacking_crouch)),
            ("IsAttackingUp", Bool(self.is_attacking_up)),
            ("IsAttackingJump", Bool(self.is_attacking_jump)),
            ("IsAttackingJumpDown", Bool(self.is_attacking_jump_down)),
        ]
    }

    /// Push every parameter to an animator
    pub fn apply(&self, sink: &mut dyn AnimatorSink) {
        for (name, value) in self.entries() {
            match value {
                AnimatorValue::Float(v) => sink.set_float(name, v),
                AnimatorValue::Bool(v) => sink.set_bool(name, v),
            }
        }
    }
}

/// Everything the rendering side needs after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub facing_right: bool,
    pub params: AnimatorParams,
    pub hitbox: Hitbox,
}

/// Face the direction of travel; zero velocity keeps the last facing
pub fn update_facing(state: &mut CharacterState) {
    if state.velocity.x > 0.0 {
        state.facing_right = true;
    } else if state.velocity.x < 0.0 {
        state.facing_right = false;
    }
}

/// Attack overrides first, then stance
pub fn select_hitbox(state: &CharacterState) -> Hitbox {
    match state.attack {
        AttackState::Idle | AttackState::Up => Hitbox::Stand,
        AttackState::Crouch => Hitbox::Crouch,
        _ if state.is_crawling => Hitbox::Crawl,
        _ if state.is_crouching => Hitbox::Crouch,
        _ => Hitbox::Stand,
    }
}

pub fn present(state: &CharacterState) -> Presentation {
    Presentation {
        facing_right: state.facing_right,
        params: AnimatorParams::from_state(state),
        hitbox: select_hitbox(state),
    }
}
