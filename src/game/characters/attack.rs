// Attack arbiter
//
// Picks at most one attack start per tick, in priority order:
//
//   airborne: AirDown > AirUp
//   grounded: Crouch > Up > Idle
//
// and ends the running attack once its animation clip reports completion.
// Interrupts (landing, grounded jump) are applied by the sensor and jump
// stages before the arbiter runs.

use log::{debug, trace};

use super::config::{AttackKind, ControllerConfig};
use super::controller::AnimationProgress;
use super::state::{AttackState, CharacterState};
use crate::engine::input::FrameInput;

/// The slice of character state the arbiter decides on
#[derive(Debug, Clone, Copy)]
pub struct ArbiterContext<'a> {
    pub input: &'a FrameInput,
    pub is_grounded: bool,
    pub is_crouching: bool,
    pub is_sliding: bool,
    pub vertical_velocity: f32,
}

impl<'a> ArbiterContext<'a> {
    pub fn new(state: &CharacterState, input: &'a FrameInput) -> Self {
        Self {
            input,
            is_grounded: state.is_grounded,
            is_crouching: state.is_crouching,
            is_sliding: state.is_sliding,
            vertical_velocity: state.velocity.y,
        }
    }
}

/// True once the attack's clip is playing and has reached the end
///
/// A clip that is not playing, or a collaborator that reports nothing,
/// counts as unfinished.
pub fn attack_finished(
    kind: AttackKind,
    config: &ControllerConfig,
    animation: &dyn AnimationProgress,
) -> bool {
    let clip = &config.attacks.get(kind).clip;
    matches!(animation.progress(clip), Some(progress) if progress >= 1.0)
}

/// Transition function for the attack state
pub fn arbitrate(
    current: AttackState,
    ctx: &ArbiterContext<'_>,
    config: &ControllerConfig,
) -> AttackState {
    if current.is_active() || ctx.is_sliding {
        return current;
    }

    // A jump press owns the tick
    if ctx.input.jump_pressed || !ctx.input.attack_pressed {
        return AttackState::None;
    }

    let allowed = |kind: AttackKind| {
        let policy = config.attacks.get(kind);
        policy.enabled && (!kind.is_airborne() || policy.direction.allows(ctx.vertical_velocity))
    };

    let chosen = if !ctx.is_grounded {
        if ctx.input.crouch_held && allowed(AttackKind::AirDown) {
            Some(AttackKind::AirDown)
        } else if allowed(AttackKind::AirUp) {
            Some(AttackKind::AirUp)
        } else {
            None
        }
    } else if ctx.is_crouching {
        allowed(AttackKind::Crouch).then_some(AttackKind::Crouch)
    } else if ctx.input.vertical > config.up_attack_threshold && allowed(AttackKind::Up) {
        Some(AttackKind::Up)
    } else {
        allowed(AttackKind::Idle).then_some(AttackKind::Idle)
    };

    chosen.map_or(AttackState::None, AttackState::from)
}

/// Velocity changes applied on the tick an attack starts
fn enter_attack(state: &mut CharacterState, config: &ControllerConfig, kind: AttackKind) {
    match kind {
        AttackKind::Idle | AttackKind::Crouch | AttackKind::Up => state.velocity.x = 0.0,
        AttackKind::AirUp => {
            if config.attacks.air_up.freezes_movement() {
                state.velocity.x = 0.0;
            }
        }
        AttackKind::AirDown => {
            state.velocity.y = config.jump_down_speed;
            if config.attacks.air_down.freezes_movement() {
                state.velocity.x = 0.0;
            }
        }
    }
}

/// Close out a finished attack, then try to start a new one
pub fn update_attacks(
    state: &mut CharacterState,
    config: &ControllerConfig,
    input: &FrameInput,
    animation: &dyn AnimationProgress,
) {
    if let Some(kind) = state.attack.kind() {
        if attack_finished(kind, config, animation) {
            debug!("{:?} attack finished", kind);
            state.attack = AttackState::None;
        } else {
            trace!("{:?} attack running", kind);
            return;
        }
    }

    let ctx = ArbiterContext::new(state, input);
    let next = arbitrate(state.attack, &ctx, config);
    if let Some(kind) = next.kind() {
        debug!("{:?} attack started", kind);
        enter_attack(state, config, kind);
    }
    state.attack = next;
}
