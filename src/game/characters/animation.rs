// Character animation playback
//
// Plays one clip at a time, reports normalized progress to the controller,
// receives animator parameters from it and picks the clip those parameters
// call for. One-shot attack clips fire a finish event when they end.

use std::collections::HashMap;

use log::warn;

use super::config::{AttackKind, AttackTable};
use super::controller::{AnimationEvent, AnimationProgress};
use super::presentation::{AnimatorSink, AnimatorValue};

/// Horizontal speed below which the character counts as standing still
const MOVING_SPEED: f32 = 0.1;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "Idle", "Run", "CrouchAttack")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
    /// Event fired when a one-shot clip reaches its last frame
    pub end_event: Option<AnimationEvent>,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
            end_event: None,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Fire `event` when the clip finishes
    pub fn with_end_event(mut self, event: AnimationEvent) -> Self {
        self.end_event = Some(event);
        self
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for a character
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Time into the current clip
    elapsed: f32,
    /// Whether the animation is playing
    playing: bool,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
    /// Last parameter values pushed by the controller
    parameters: HashMap<String, AnimatorValue>,
    /// Clip to play for each attack kind
    attack_clips: HashMap<AttackKind, String>,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            elapsed: 0.0,
            playing: false,
            flip_horizontal: false,
            parameters: HashMap::new(),
            attack_clips: HashMap::new(),
        }
    }

    /// Create a player with the standard locomotion clips and one attack clip
    /// per entry of `attacks`
    pub fn with_character_clips(attacks: &AttackTable) -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("Idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("Run", 8, 12.0));
        player.add_animation(AnimationClip::looping("Jump", 4, 10.0));
        player.add_animation(AnimationClip::looping("Fall", 4, 10.0));
        player.add_animation(AnimationClip::looping("Crouch", 4, 8.0));
        player.add_animation(AnimationClip::looping("Crawl", 6, 10.0));
        player.add_animation(AnimationClip::looping("Slide", 4, 12.0));

        for kind in AttackKind::ALL {
            let clip = &attacks.get(kind).clip;
            player.add_animation(
                AnimationClip::one_shot(clip, 6, 18.0)
                    .with_end_event(AnimationEvent::finishing(kind)),
            );
            player.attack_clips.insert(kind, clip.clone());
        }

        player.play("Idle");
        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name
    ///
    /// Asking for the clip that is already running keeps its place. A one-shot
    /// clip that has already finished starts over.
    pub fn play(&mut self, name: &str) {
        if self.current_animation == name && self.playing {
            return;
        }
        if !self.animations.contains_key(name) {
            warn!("Playing unknown animation clip '{}'", name);
        }
        self.current_animation = name.to_string();
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance playback, returning any events fired this update
    pub fn update(&mut self, dt: f32) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        if !self.playing {
            return events;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return events;
        };

        self.elapsed += dt;
        let duration = clip.total_duration();

        if self.elapsed >= duration {
            if clip.looping && duration > 0.0 {
                self.elapsed %= duration;
            } else {
                // Hold the last frame
                self.elapsed = duration;
                self.playing = false;
                events.extend(clip.end_event);
            }
        }

        events
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Normalized time into the current clip, 1.0 when a one-shot clip is done
    pub fn normalized_time(&self) -> f32 {
        match self.animations.get(&self.current_animation) {
            Some(clip) if clip.total_duration() > 0.0 => {
                (self.elapsed / clip.total_duration()).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn flag(&self, name: &str) -> bool {
        matches!(self.parameters.get(name), Some(AnimatorValue::Bool(true)))
    }

    fn float(&self, name: &str) -> f32 {
        match self.parameters.get(name) {
            Some(AnimatorValue::Float(value)) => *value,
            _ => 0.0,
        }
    }

    /// Clip the current parameters call for
    pub fn target_clip(&self) -> String {
        let attack = [
            ("IsAttackingIdle", AttackKind::Idle),
            ("IsAttackingCrouch", AttackKind::Crouch),
            ("IsAttackingUp", AttackKind::Up),
            ("IsAttackingJump", AttackKind::AirUp),
            ("IsAttackingJumpDown", AttackKind::AirDown),
        ]
        .into_iter()
        .find(|(param, _)| self.flag(param))
        .and_then(|(_, kind)| self.attack_clips.get(&kind));

        if let Some(clip) = attack {
            return clip.clone();
        }

        let name = if self.flag("IsSliding") {
            "Slide"
        } else if !self.flag("IsGrounded") {
            if self.float("VerticalVelocity") > 0.0 {
                "Jump"
            } else {
                "Fall"
            }
        } else if self.flag("IsCrawling") {
            "Crawl"
        } else if self.flag("IsCrouching") {
            "Crouch"
        } else if self.float("Speed") > MOVING_SPEED {
            "Run"
        } else {
            "Idle"
        };
        name.to_string()
    }

    /// Switch to the clip the current parameters call for
    pub fn sync_to_parameters(&mut self) {
        let clip = self.target_clip();
        self.play(&clip);
    }
}

impl AnimationProgress for AnimationPlayer {
    fn progress(&self, clip: &str) -> Option<f32> {
        (self.current_animation == clip && self.animations.contains_key(clip))
            .then(|| self.normalized_time())
    }
}

impl AnimatorSink for AnimationPlayer {
    fn set_float(&mut self, name: &str, value: f32) {
        self.parameters
            .insert(name.to_string(), AnimatorValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.parameters
            .insert(name.to_string(), AnimatorValue::Bool(value));
    }
}
