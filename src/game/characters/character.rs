// Character entity: binds a controller to its physics body, hitboxes and animation

use glam::Vec2;
use log::{debug, info};

use crate::engine::input::{FrameInput, PlayerInput};
use crate::engine::physics::{presets, ColliderHandle, PhysicsWorld, RigidBodyHandle, Vector};

use super::animation::AnimationPlayer;
use super::config::ControllerConfig;
use super::controller::{CharacterController, CharacterPhysics};
use super::presentation::{Hitbox, Presentation};
use super::ControllerError;

/// `CharacterPhysics` view of one rigid body in a `PhysicsWorld`
pub struct BodyProxy<'w> {
    world: &'w mut PhysicsWorld,
    body: RigidBodyHandle,
}

impl<'w> BodyProxy<'w> {
    pub fn new(world: &'w mut PhysicsWorld, body: RigidBodyHandle) -> Result<Self, ControllerError> {
        if world.get_rigid_body(body).is_none() {
            return Err(ControllerError::UnknownBody);
        }
        Ok(Self { world, body })
    }
}

impl CharacterPhysics for BodyProxy<'_> {
    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or_default()
    }

    fn linear_velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.body)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or_default()
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.body) {
            body.set_linvel(Vector::new(velocity.x, velocity.y), true);
        }
    }

    fn gravity(&self) -> Vec2 {
        let gravity = self.world.gravity();
        Vec2::new(gravity.x, gravity.y)
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, layer_mask: u32) -> bool {
        self.world
            .overlap_circle(center, radius, layer_mask, Some(self.body))
    }
}

/// The three colliders a character switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxColliders {
    pub stand: ColliderHandle,
    pub crouch: ColliderHandle,
    pub crawl: ColliderHandle,
}

impl HitboxColliders {
    pub fn get(&self, hitbox: Hitbox) -> ColliderHandle {
        match hitbox {
            Hitbox::Stand => self.stand,
            Hitbox::Crouch => self.crouch,
            Hitbox::Crawl => self.crawl,
        }
    }
}

/// Assembles a `Character` from parts that already exist in a world
///
/// Every collaborator is required; `build` reports the first one missing.
#[derive(Debug)]
pub struct CharacterBuilder {
    config: ControllerConfig,
    body: Option<RigidBodyHandle>,
    hitboxes: Option<HitboxColliders>,
    animation: Option<AnimationPlayer>,
}

impl CharacterBuilder {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            body: None,
            hitboxes: None,
            animation: None,
        }
    }

    pub fn body(mut self, body: RigidBodyHandle) -> Self {
        self.body = Some(body);
        self
    }

    pub fn hitboxes(mut self, hitboxes: HitboxColliders) -> Self {
        self.hitboxes = Some(hitboxes);
        self
    }

    pub fn animation(mut self, animation: AnimationPlayer) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Validate the collaborators against `world` and build the character
    pub fn build(self, world: &PhysicsWorld) -> Result<Character, ControllerError> {
        let body = self
            .body
            .ok_or(ControllerError::MissingCollaborator("physics body"))?;
        let hitboxes = self
            .hitboxes
            .ok_or(ControllerError::MissingCollaborator("hitboxes"))?;
        let animation = self
            .animation
            .ok_or(ControllerError::MissingCollaborator("animation source"))?;

        if world.get_rigid_body(body).is_none() {
            return Err(ControllerError::UnknownBody);
        }
        for hitbox in Hitbox::ALL {
            if world.get_collider(hitboxes.get(hitbox)).is_none() {
                return Err(ControllerError::UnknownCollider);
            }
        }

        Ok(Character {
            controller: CharacterController::new(self.config),
            input: PlayerInput::new(),
            body,
            hitboxes,
            animation,
            active_hitbox: Hitbox::Stand,
        })
    }
}

/// A controllable character living in a `PhysicsWorld`
#[derive(Debug)]
pub struct Character {
    controller: CharacterController,
    input: PlayerInput,
    body: RigidBodyHandle,
    hitboxes: HitboxColliders,
    animation: AnimationPlayer,
    active_hitbox: Hitbox,
}

impl Character {
    /// Create the body and hitboxes in `world` and build a character around them
    pub fn spawn(
        world: &mut PhysicsWorld,
        config: ControllerConfig,
        x: f32,
        y: f32,
    ) -> Result<Self, ControllerError> {
        let body = world.add_rigid_body(presets::player_body(x, y));

        let sizes = &config.hitboxes;
        let hitboxes = HitboxColliders {
            stand: world.add_collider(presets::stand_hitbox(sizes.width, sizes.stand_height), body),
            crouch: world.add_collider(
                presets::low_hitbox(sizes.width, sizes.crouch_height, sizes.stand_height),
                body,
            ),
            crawl: world.add_collider(
                presets::low_hitbox(sizes.crawl_width, sizes.crawl_height, sizes.stand_height),
                body,
            ),
        };

        let animation = AnimationPlayer::with_character_clips(&config.attacks);
        info!("Spawned character at ({}, {})", x, y);

        CharacterBuilder::new(config)
            .body(body)
            .hitboxes(hitboxes)
            .animation(animation)
            .build(world)
    }

    /// Run one tick: controller, hitbox swap, animator, animation events
    ///
    /// Call before `PhysicsWorld::step`, with the same `dt`.
    pub fn update(
        &mut self,
        world: &mut PhysicsWorld,
        dt: f32,
    ) -> Result<Presentation, ControllerError> {
        let frame = FrameInput::from_player(&self.input);

        let presentation = {
            let mut physics = BodyProxy::new(world, self.body)?;
            self.controller
                .tick(&frame, &mut physics, &self.animation, dt)
        };

        self.apply_hitbox(world, presentation.hitbox)?;

        presentation.params.apply(&mut self.animation);
        self.animation
            .set_flip_horizontal(!presentation.facing_right);
        self.animation.sync_to_parameters();

        for event in self.animation.update(dt) {
            self.controller.handle_animation_event(event);
        }

        self.input.update();
        Ok(presentation)
    }

    fn apply_hitbox(&mut self, world: &mut PhysicsWorld, hitbox: Hitbox) -> Result<(), ControllerError> {
        if hitbox == self.active_hitbox {
            return Ok(());
        }

        for candidate in Hitbox::ALL {
            let collider = world
                .get_collider_mut(self.hitboxes.get(candidate))
                .ok_or(ControllerError::UnknownCollider)?;
            collider.set_enabled(candidate == hitbox);
        }

        debug!("Hitbox {:?} -> {:?}", self.active_hitbox, hitbox);
        self.active_hitbox = hitbox;
        Ok(())
    }

    /// Input state for the next `update`
    pub fn input_mut(&mut self) -> &mut PlayerInput {
        &mut self.input
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }

    /// Freeze or release the character
    pub fn set_can_move(&mut self, can_move: bool) {
        self.controller.set_can_move(can_move);
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn hitboxes(&self) -> HitboxColliders {
        self.hitboxes
    }

    pub fn active_hitbox(&self) -> Hitbox {
        self.active_hitbox
    }

    /// Current body position
    pub fn position(&self, world: &PhysicsWorld) -> Option<Vec2> {
        world
            .get_rigid_body(self.body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }
}
