use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use rusted_platformer::engine::game_loop::FixedTimestep;
use rusted_platformer::engine::input::{Action, Axis, PlayerInput};
use rusted_platformer::engine::physics::{presets, PhysicsWorld, Vector};
use rusted_platformer::game::characters::{AttackState, Character, ControllerConfig};

/// Apply the scripted input for `tick`, returning a label if anything changed
fn script(tick: u64, input: &mut PlayerInput) -> Option<&'static str> {
    let label = match tick {
        30 => {
            input.set_axis(Axis::MoveHorizontal, 1.0);
            "walk right"
        }
        60 => {
            input.press(Action::Run);
            "run"
        }
        90 => {
            input.press(Action::Jump);
            "jump"
        }
        105 => {
            input.press(Action::Jump);
            "double jump"
        }
        100 | 110 => {
            input.release(Action::Jump);
            "release jump"
        }
        118 => {
            input.press(Action::Crouch);
            input.press(Action::Attack);
            "dive"
        }
        120 => {
            input.release(Action::Crouch);
            input.release(Action::Attack);
            "release dive"
        }
        202 => {
            input.release(Action::Attack);
            "release attack"
        }
        180 => {
            input.set_axis(Axis::MoveHorizontal, 0.0);
            input.release(Action::Run);
            "stop"
        }
        200 => {
            input.press(Action::Crouch);
            input.press(Action::Attack);
            "crouch attack"
        }
        240 => {
            input.set_axis(Axis::MoveHorizontal, -1.0);
            "crawl left"
        }
        270 => {
            input.press(Action::Jump);
            "slide"
        }
        272 => {
            input.release(Action::Jump);
            input.release(Action::Crouch);
            input.set_axis(Axis::MoveHorizontal, 0.0);
            "stand"
        }
        _ => return None,
    };
    Some(label)
}

const TOTAL_TICKS: u64 = 330;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Platformer...");

    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(&path)
            .with_context(|| format!("Failed to load controller config from {}", path))?,
        None => ControllerConfig::default(),
    };

    let mut world = PhysicsWorld::with_gravity(Vector::new(0.0, -30.0));
    let floor = world.add_rigid_body(presets::ground_body(0.0, -0.5));
    world.add_collider(presets::ground_collider(200.0, 1.0), floor);

    let mut character = Character::spawn(&mut world, config, 0.0, 1.5)?;
    let mut timestep = FixedTimestep::new();
    let mut last_attack = AttackState::None;
    let mut was_grounded = false;

    // Feed fixed-length frames so the script replays identically
    let frame = Duration::from_micros(16_667);
    while timestep.tick_count() < TOTAL_TICKS {
        let ticks = timestep.advance(frame) as u64;
        let first = timestep.tick_count() - ticks;
        for tick in first..first + ticks {
            if let Some(label) = script(tick, character.input_mut()) {
                info!("[{:>3}] {}", tick, label);
            }

            let presentation = character.update(&mut world, timestep.dt())?;
            world.step();

            let state = character.controller().state();
            if state.attack != last_attack {
                info!("[{:>3}] attack {:?} -> {:?}", tick, last_attack, state.attack);
                last_attack = state.attack;
            }
            if state.is_grounded != was_grounded {
                info!(
                    "[{:>3}] grounded={} jumps={} hitbox={:?}",
                    tick, state.is_grounded, state.available_jumps, presentation.hitbox
                );
                was_grounded = state.is_grounded;
            }
        }
    }

    if let Some(position) = character.position(&world) {
        info!(
            "Finished {} ticks at ({:.2}, {:.2}), clip {}",
            timestep.tick_count(),
            position.x,
            position.y,
            character.animation().current_animation()
        );
    }

    Ok(())
}
