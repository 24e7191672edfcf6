// Ground sensor: overlap probes under the character's feet

use glam::Vec2;
use log::debug;

use super::config::{ControllerConfig, GroundProbes};
use super::controller::CharacterPhysics;
use super::state::{AttackState, CharacterState};
use crate::core::math::countdown;

/// Grounding change detected this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
    Unchanged,
}

/// Probe centres in world space for a body at `position`
pub fn probe_points(config: &ControllerConfig, position: Vec2) -> Vec<Vec2> {
    let center = position + Vec2::new(0.0, config.ground_probe_offset());
    let edge = Vec2::new(config.ground_check.half_width, 0.0);

    match config.ground_check.probes {
        GroundProbes::Center => vec![center],
        GroundProbes::Edges => vec![center - edge, center + edge],
        GroundProbes::All => vec![center, center - edge, center + edge],
    }
}

/// Refresh `is_grounded` and the coyote window
///
/// Landing refills the jump budget and cancels any air attack. While airborne
/// the coyote timer runs down and an active dive keeps its fixed fall speed.
/// The window counts as open for a tick if time remained when the tick began,
/// so a jump exactly `coyote_time` after leaving the ground still counts; on
/// the first tick after that the ground jump is lost.
pub fn sense_ground(
    state: &mut CharacterState,
    config: &ControllerConfig,
    physics: &dyn CharacterPhysics,
    dt: f32,
) -> GroundTransition {
    let check = &config.ground_check;
    let grounded = probe_points(config, physics.position())
        .into_iter()
        .any(|point| physics.overlap_circle(point, check.radius, check.layer_mask));

    let was_grounded = state.is_grounded;
    state.is_grounded = grounded;

    if grounded {
        state.coyote_open = true;
        if was_grounded {
            return GroundTransition::Unchanged;
        }

        state.available_jumps = config.total_jumps;
        state.coyote_timer = config.coyote_time;
        if state.attack.is_air_attack() {
            debug!("Landing cancelled {:?}", state.attack);
            state.attack = AttackState::None;
        }
        return GroundTransition::Landed;
    }

    state.coyote_open = state.coyote_timer > 0.0;
    state.coyote_timer = countdown(state.coyote_timer, dt);
    if !state.coyote_open {
        // The ground jump is forfeit once the grace window closes
        state.available_jumps = state.available_jumps.min(config.air_jumps());
    }
    if state.attack == AttackState::AirDown {
        state.velocity.y = config.jump_down_speed;
    }

    if was_grounded {
        GroundTransition::LeftGround
    } else {
        GroundTransition::Unchanged
    }
}
