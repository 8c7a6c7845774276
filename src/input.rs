use crate::{
    config::Controls,
    error::ConfigError,
    vector::Vector2,
    world::{Command, World},
};
use rand::Rng;

/// An input event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The toy became visible; keyboard commands are accepted.
    Start,
    /// The toy was hidden; keyboard commands are ignored.
    Stop,
    /// A mouse button went down.
    MousePressed {
        /// Cursor position.
        position: Vector2,
        /// Whether the press landed on the canvas rather than on a widget.
        on_canvas: bool,
    },
    /// A mouse button went up.
    MouseReleased {
        /// Cursor position.
        position: Vector2,
    },
    /// A character key was typed.
    KeyTyped {
        /// The typed character.
        key: char,
        /// Cursor position at the time of the key press.
        cursor: Vector2,
    },
    /// The escape key was pressed.
    Escape,
    /// The "reverse attraction" button was clicked.
    ToggleReverse,
}

/// Translates [`InputEvents`](InputEvent) into [`Commands`](Command) and applies them to a
/// [`World`].
///
/// - Dragging on the canvas launches a particle from the press position, with a velocity
///   proportional to the drag.
/// - While started, `p` spawns a particle at the cursor with a random velocity, `a` spawns an
///   attractor at the cursor, `r` clears the world and `m` randomizes velocities. Keys are
///   case-insensitive.
/// - Escape clears the world, resets the controls and stops the toy.
///
/// # Example
///
/// ```
/// # use attractors::prelude::*;
/// use rand::thread_rng;
///
/// let mut world = World::new();
/// let mut controller = Controller::default();
/// let mut rng = thread_rng();
///
/// controller.handle(InputEvent::Start, &mut world, &mut rng);
/// controller.handle(
///     InputEvent::KeyTyped { key: 'a', cursor: Vector2::new(100.0, 0.0) },
///     &mut world,
///     &mut rng,
/// );
///
/// assert_eq!(world.attractors().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Controller {
    controls: Controls,
    reversed: bool,
    started: bool,
    press: Option<Vector2>,
}

impl Controller {
    /// Creates a stopped [`Controller`] with the given slider values.
    pub fn new(controls: Controls) -> Result<Self, ConfigError> {
        controls.validate()?;

        Ok(Self {
            controls,
            ..Default::default()
        })
    }

    /// Current slider values.
    #[inline]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Replaces the slider values, keeping the previous ones if the new ones are invalid.
    ///
    /// Only objects spawned afterwards are affected.
    pub fn set_controls(&mut self, controls: Controls) -> Result<(), ConfigError> {
        controls.validate()?;
        self.controls = controls;
        Ok(())
    }

    /// Returns true if keyboard commands are accepted.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns true if new attractors repel.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Handles an event, applying the resulting command to the world.
    ///
    /// Returns the applied command, if any.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        event: InputEvent,
        world: &mut World,
        rng: &mut R,
    ) -> Option<Command> {
        let command = self.command_for(event, world, rng)?;
        world.execute(command, rng);
        Some(command)
    }

    fn command_for<R: Rng + ?Sized>(
        &mut self,
        event: InputEvent,
        world: &World,
        rng: &mut R,
    ) -> Option<Command> {
        match event {
            InputEvent::Start => {
                log::debug!("Controller started");
                self.started = true;
                None
            }
            InputEvent::Stop => {
                log::debug!("Controller stopped");
                self.started = false;
                None
            }
            InputEvent::Escape => {
                log::debug!("Escape: resetting controls and clearing world");
                self.started = false;
                self.press = None;
                self.controls = Controls::default();
                Some(Command::Clear)
            }
            InputEvent::ToggleReverse => {
                self.reversed = !self.reversed;
                log::debug!("Reverse attraction: {}", self.reversed);
                None
            }
            InputEvent::MousePressed {
                position,
                on_canvas,
            } => {
                self.press = on_canvas.then_some(position);
                None
            }
            InputEvent::MouseReleased { position } => {
                let start = self.press.take()?;
                let drag = position - start;
                let velocity = drag / world.config().launch_scale * self.controls.velocity;

                Some(self.particle_at(start, velocity))
            }
            InputEvent::KeyTyped { key, cursor } if self.started => {
                match key.to_ascii_lowercase() {
                    'p' => {
                        let velocity = world.random_velocity(rng) * self.controls.velocity;
                        Some(self.particle_at(cursor, velocity))
                    }
                    'a' => Some(Command::SpawnAttractor {
                        position: cursor,
                        strength: self.controls.strength,
                        reversed: self.reversed,
                    }),
                    'r' => Some(Command::Clear),
                    'm' => Some(Command::Randomize),
                    _ => None,
                }
            }
            InputEvent::KeyTyped { .. } => None,
        }
    }

    fn particle_at(&self, position: Vector2, velocity: Vector2) -> Command {
        Command::SpawnParticle {
            position,
            velocity,
            appearance: self.controls.appearance(),
            friction: self.controls.friction_coefficient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn started() -> (Controller, World, StdRng) {
        let mut controller = Controller::default();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(42);

        controller.handle(InputEvent::Start, &mut world, &mut rng);
        (controller, world, rng)
    }

    fn key(key: char, cursor: Vector2) -> InputEvent {
        InputEvent::KeyTyped { key, cursor }
    }

    #[test]
    fn drag_launches_particle() {
        let (mut controller, mut world, mut rng) = started();
        controller
            .set_controls(Controls {
                velocity: 2.0,
                friction: 0.3,
                ..Default::default()
            })
            .unwrap();

        controller.handle(
            InputEvent::MousePressed {
                position: Vector2::new(10.0, 10.0),
                on_canvas: true,
            },
            &mut world,
            &mut rng,
        );
        let command = controller.handle(
            InputEvent::MouseReleased {
                position: Vector2::new(110.0, -40.0),
            },
            &mut world,
            &mut rng,
        );

        assert!(matches!(command, Some(Command::SpawnParticle { .. })));
        let particle = world.particles()[0];
        assert_eq!(particle.position, Vector2::new(10.0, 10.0));
        // (100, -50) / 50 * 2
        assert_eq!(particle.velocity, Vector2::new(4.0, -2.0));
        assert_eq!(particle.friction, 0.3);
    }

    #[test]
    fn press_off_canvas_spawns_nothing() {
        let (mut controller, mut world, mut rng) = started();

        controller.handle(
            InputEvent::MousePressed {
                position: Vector2::ZERO,
                on_canvas: false,
            },
            &mut world,
            &mut rng,
        );
        let command = controller.handle(
            InputEvent::MouseReleased {
                position: Vector2::ONE,
            },
            &mut world,
            &mut rng,
        );

        assert_eq!(command, None);
        assert!(world.is_empty());
    }

    #[test]
    fn release_without_press_spawns_nothing() {
        let (mut controller, mut world, mut rng) = started();

        let command = controller.handle(
            InputEvent::MouseReleased {
                position: Vector2::ONE,
            },
            &mut world,
            &mut rng,
        );

        assert_eq!(command, None);
    }

    #[test]
    fn keys_ignored_until_started() {
        let mut controller = Controller::default();
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(1);

        for k in ['p', 'a', 'P', 'A'] {
            assert_eq!(controller.handle(key(k, Vector2::ZERO), &mut world, &mut rng), None);
        }
        assert!(world.is_empty());

        controller.handle(InputEvent::Start, &mut world, &mut rng);
        controller.handle(key('P', Vector2::ZERO), &mut world, &mut rng);
        controller.handle(key('a', Vector2::ONE), &mut world, &mut rng);
        assert_eq!(world.particles().len(), 1);
        assert_eq!(world.attractors().len(), 1);

        controller.handle(InputEvent::Stop, &mut world, &mut rng);
        controller.handle(key('r', Vector2::ZERO), &mut world, &mut rng);
        assert_eq!(world.particles().len(), 1);
    }

    #[test]
    fn random_particle_scaled_by_velocity() {
        let (mut controller, mut world, mut rng) = started();
        controller
            .set_controls(Controls {
                velocity: 0.0,
                ..Default::default()
            })
            .unwrap();

        controller.handle(key('p', Vector2::new(3.0, 4.0)), &mut world, &mut rng);

        assert_eq!(world.particles()[0].position, Vector2::new(3.0, 4.0));
        assert_eq!(world.particles()[0].velocity, Vector2::ZERO);
    }

    #[test]
    fn reverse_captured_at_spawn() {
        let (mut controller, mut world, mut rng) = started();
        controller
            .set_controls(Controls {
                strength: 2.0,
                ..Default::default()
            })
            .unwrap();

        controller.handle(key('a', Vector2::ZERO), &mut world, &mut rng);
        controller.handle(InputEvent::ToggleReverse, &mut world, &mut rng);
        assert!(controller.is_reversed());
        controller.handle(key('a', Vector2::ONE), &mut world, &mut rng);

        assert_eq!(world.attractors()[0].strength, 20_000.0);
        assert_eq!(world.attractors()[1].strength, -20_000.0);
    }

    #[test]
    fn clear_and_randomize_keys() {
        let (mut controller, mut world, mut rng) = started();
        controller.handle(key('p', Vector2::ZERO), &mut world, &mut rng);
        controller.handle(key('a', Vector2::ONE), &mut world, &mut rng);

        assert_eq!(
            controller.handle(key('m', Vector2::ZERO), &mut world, &mut rng),
            Some(Command::Randomize)
        );
        assert_eq!(
            controller.handle(key('R', Vector2::ZERO), &mut world, &mut rng),
            Some(Command::Clear)
        );
        assert!(world.is_empty());
    }

    #[test]
    fn escape_resets() {
        let (mut controller, mut world, mut rng) = started();
        controller
            .set_controls(Controls {
                color: 0.1,
                ..Default::default()
            })
            .unwrap();
        controller.handle(key('a', Vector2::ONE), &mut world, &mut rng);

        let command = controller.handle(InputEvent::Escape, &mut world, &mut rng);

        assert_eq!(command, Some(Command::Clear));
        assert!(world.is_empty());
        assert!(!controller.is_started());
        assert_eq!(controller.controls(), &Controls::default());
    }

    #[test]
    fn invalid_controls_kept_out() {
        let mut controller = Controller::default();

        let result = controller.set_controls(Controls {
            friction: 2.0,
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(controller.controls(), &Controls::default());
        assert!(Controller::new(Controls {
            strength: -1.0,
            ..Default::default()
        })
        .is_err());
    }
}
