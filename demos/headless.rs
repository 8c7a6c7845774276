//! Drives a world from a scripted input session without any window.
//!
//! Run with `RUST_LOG=debug cargo run --example headless` to see every command.

use attractors::prelude::*;
use rand::thread_rng;
use std::thread;

const FRAMES: usize = 600;

fn script() -> Vec<InputEvent> {
    let key = |key, x, y| InputEvent::KeyTyped {
        key,
        cursor: Vector2::new(x, y),
    };

    vec![
        InputEvent::Start,
        key('a', 800.0, 450.0),
        key('a', 400.0, 300.0),
        InputEvent::ToggleReverse,
        key('a', 1200.0, 600.0),
        InputEvent::ToggleReverse,
        InputEvent::MousePressed {
            position: Vector2::new(200.0, 200.0),
            on_canvas: true,
        },
        InputEvent::MouseReleased {
            position: Vector2::new(350.0, 150.0),
        },
        key('p', 600.0, 700.0),
        key('P', 1000.0, 100.0),
        key('p', 1400.0, 800.0),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let shared = SharedWorld::default();
    let mut controller = match Controller::new(Controls {
        friction: 0.01,
        strength: 2.0,
        ..Default::default()
    }) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Invalid controls: {}", e);
            return;
        }
    };

    let mut rng = thread_rng();
    for event in script() {
        if let Some(command) = shared.handle(&mut controller, event, &mut rng) {
            log::debug!("{:?} -> {:?}", event, command);
        }
    }

    let renderer = {
        let shared = shared.clone();
        thread::spawn(move || {
            let mut drawn = 0;
            while drawn < FRAMES {
                let snapshot = shared.snapshot();
                drawn += 1;
                if drawn % 100 == 0 {
                    log::info!(
                        "Frame {}: {} particles, {} attractors",
                        drawn,
                        snapshot.particles.len(),
                        snapshot.attractors.len()
                    );
                }
                thread::yield_now();
            }
        })
    };

    for frame in 0..FRAMES {
        shared.tick();
        if frame == FRAMES / 2 {
            let randomize = InputEvent::KeyTyped {
                key: 'm',
                cursor: Vector2::ZERO,
            };
            shared.handle(&mut controller, randomize, &mut rng);
            log::info!("Randomized velocities at frame {}", frame);
        }
    }

    if renderer.join().is_err() {
        log::error!("Renderer thread panicked");
    }

    shared.read(|world| {
        for (i, particle) in world.particles().iter().enumerate() {
            log::info!(
                "Particle {}: position {:.1}, speed {:.3}",
                i,
                particle.position,
                particle.velocity.magnitude()
            );
        }
    });

    shared.handle(&mut controller, InputEvent::Escape, &mut rng);
    log::info!("World empty after escape: {}", shared.read(World::is_empty));
}
