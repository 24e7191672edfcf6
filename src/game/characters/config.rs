// Character tuning - set once at spawn, immutable afterwards
//
// Values are not range-checked. Negative durations or a zero probe radius are
// the integrator's responsibility.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::physics::CollisionGroups;

/// The attack variants a character can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    /// Grounded, standing still
    Idle,
    /// Grounded, crouching
    Crouch,
    /// Grounded, aiming up
    Up,
    /// Airborne jump attack
    AirUp,
    /// Airborne diving attack
    AirDown,
}

impl AttackKind {
    pub const ALL: [AttackKind; 5] = [
        AttackKind::Idle,
        AttackKind::Crouch,
        AttackKind::Up,
        AttackKind::AirUp,
        AttackKind::AirDown,
    ];

    /// Air attacks end on landing; ground attacks end on a grounded jump
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::AirUp | Self::AirDown)
    }
}

/// Vertical velocity an air attack may start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionPolicy {
    /// Only while rising
    Up,
    /// Only while falling or at the apex
    Down,
    /// Any time
    Both,
}

impl DirectionPolicy {
    pub fn allows(&self, vertical_velocity: f32) -> bool {
        match self {
            Self::Up => vertical_velocity > 0.0,
            Self::Down => vertical_velocity <= 0.0,
            Self::Both => true,
        }
    }
}

/// Whether an attack locks horizontal movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirMovement {
    Freeze,
    Free,
}

/// How one attack variant behaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPolicy {
    pub enabled: bool,
    /// Animation clip whose completion ends the attack
    pub clip: String,
    pub direction: DirectionPolicy,
    pub movement: AirMovement,
}

impl AttackPolicy {
    fn new(clip: &str, direction: DirectionPolicy, movement: AirMovement) -> Self {
        Self {
            enabled: true,
            clip: clip.to_string(),
            direction,
            movement,
        }
    }

    /// True if horizontal input is ignored while this attack runs
    pub fn freezes_movement(&self) -> bool {
        self.movement == AirMovement::Freeze
    }
}

/// Policy lookup table, one record per attack kind
///
/// When read from a config file, each field an entry leaves out keeps that
/// attack kind's own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AttackTableOverrides")]
pub struct AttackTable {
    pub idle: AttackPolicy,
    pub crouch: AttackPolicy,
    pub up: AttackPolicy,
    pub air_up: AttackPolicy,
    pub air_down: AttackPolicy,
}

impl Default for AttackTable {
    fn default() -> Self {
        // Ground attacks always lock the character in place
        Self {
            idle: AttackPolicy::new("IdleAttack", DirectionPolicy::Both, AirMovement::Freeze),
            crouch: AttackPolicy::new("CrouchAttack", DirectionPolicy::Both, AirMovement::Freeze),
            up: AttackPolicy::new("UpAttack", DirectionPolicy::Both, AirMovement::Freeze),
            air_up: AttackPolicy::new("JumpAttack", DirectionPolicy::Both, AirMovement::Free),
            air_down: AttackPolicy::new("JumpDownAttack", DirectionPolicy::Both, AirMovement::Freeze),
        }
    }
}

impl AttackTable {
    pub fn get(&self, kind: AttackKind) -> &AttackPolicy {
        match kind {
            AttackKind::Idle => &self.idle,
            AttackKind::Crouch => &self.crouch,
            AttackKind::Up => &self.up,
            AttackKind::AirUp => &self.air_up,
            AttackKind::AirDown => &self.air_down,
        }
    }
}

/// Attack policy fields as written in a config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttackPolicyOverride {
    enabled: Option<bool>,
    clip: Option<String>,
    direction: Option<DirectionPolicy>,
    movement: Option<AirMovement>,
}

impl AttackPolicyOverride {
    fn apply(self, policy: &mut AttackPolicy) {
        if let Some(enabled) = self.enabled {
            policy.enabled = enabled;
        }
        if let Some(clip) = self.clip {
            policy.clip = clip;
        }
        if let Some(direction) = self.direction {
            policy.direction = direction;
        }
        if let Some(movement) = self.movement {
            policy.movement = movement;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttackTableOverrides {
    idle: AttackPolicyOverride,
    crouch: AttackPolicyOverride,
    up: AttackPolicyOverride,
    air_up: AttackPolicyOverride,
    air_down: AttackPolicyOverride,
}

impl From<AttackTableOverrides> for AttackTable {
    fn from(overrides: AttackTableOverrides) -> Self {
        let mut table = AttackTable::default();
        overrides.idle.apply(&mut table.idle);
        overrides.crouch.apply(&mut table.crouch);
        overrides.up.apply(&mut table.up);
        overrides.air_up.apply(&mut table.air_up);
        overrides.air_down.apply(&mut table.air_down);
        table
    }
}

/// Which ground probes to cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundProbes {
    /// One probe under the centre
    Center,
    /// One probe under each edge of the footprint
    Edges,
    /// Centre plus both edges
    All,
}

/// Ground sensor placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundCheckConfig {
    /// Vertical offset of the probes from the body origin. `None` puts them
    /// at the bottom of the standing hitbox.
    pub offset_y: Option<f32>,
    /// Lateral distance of the edge probes from the centre
    pub half_width: f32,
    pub radius: f32,
    pub probes: GroundProbes,
    /// Collision layer mask that counts as ground
    pub layer_mask: u32,
}

impl Default for GroundCheckConfig {
    fn default() -> Self {
        Self {
            offset_y: None,
            half_width: 0.4,
            radius: 0.2,
            probes: GroundProbes::All,
            layer_mask: CollisionGroups::Ground.bits(),
        }
    }
}

/// Hitbox dimensions in world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    pub width: f32,
    pub stand_height: f32,
    pub crouch_height: f32,
    pub crawl_width: f32,
    pub crawl_height: f32,
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            stand_height: 2.0,
            crouch_height: 1.2,
            crawl_width: 1.6,
            crawl_height: 0.8,
        }
    }
}

/// Complete tuning for one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // Movement
    /// Base horizontal speed (units/second)
    pub move_speed: f32,
    /// Speed multiplier while Run is held
    pub run_speed_modifier: f32,
    pub crawl_enabled: bool,
    pub crawl_speed: f32,

    // Jumping
    /// Vertical velocity set by a jump
    pub jump_force: f32,
    /// Jumps available from the ground, including the first
    pub total_jumps: u32,
    /// Effective gravity multiplier while falling
    pub fall_multiplier: f32,
    /// Effective gravity multiplier while rising with Jump released
    pub low_jump_multiplier: f32,
    /// Seconds after leaving ground during which a grounded jump is still allowed
    pub coyote_time: f32,

    // Sliding
    pub slide_enabled: bool,
    pub slide_force: f32,
    pub slide_duration: f32,

    // Attacks
    /// Vertical velocity held during the diving air attack
    pub jump_down_speed: f32,
    /// Vertical axis value above which a ground attack becomes an up attack
    pub up_attack_threshold: f32,
    pub attacks: AttackTable,

    pub ground_check: GroundCheckConfig,
    pub hitboxes: HitboxConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 12.0,
            run_speed_modifier: 1.5,
            crawl_enabled: true,
            crawl_speed: 4.0,

            jump_force: 15.0,
            total_jumps: 2,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            coyote_time: 0.1,

            slide_enabled: true,
            slide_force: 18.0,
            slide_duration: 0.35,

            jump_down_speed: -25.0,
            up_attack_threshold: 0.5,
            attacks: AttackTable::default(),

            ground_check: GroundCheckConfig::default(),
            hitboxes: HitboxConfig::default(),
        }
    }
}

/// Errors raised while loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl ControllerConfig {
    /// Parse a RON document; omitted fields keep their defaults
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    /// Load a RON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Vertical offset of the ground probes from the body origin
    pub fn ground_probe_offset(&self) -> f32 {
        self.ground_check
            .offset_y
            .unwrap_or(-self.hitboxes.stand_height / 2.0)
    }

    /// Jumps left in the air after a jump from the ground
    pub fn air_jumps(&self) -> u32 {
        self.total_jumps.saturating_sub(1)
    }
}
