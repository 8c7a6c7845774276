use crate::{
    input::{Controller, InputEvent},
    world::{Command, Snapshot, World},
};
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;

/// A [`World`] shared between threads, e.g. an input/simulation thread and a render thread.
///
/// Every mutation holds the write lock for its whole duration and snapshots are taken under the
/// read lock, so a renderer never observes a half-applied spawn, clear or tick.
///
/// # Example
///
/// ```
/// # use attractors::prelude::*;
/// let shared = SharedWorld::new(World::new());
/// let renderer = shared.clone();
///
/// shared.write(|world| world.spawn_attractor(Vector2::ZERO, 1.0, false));
/// shared.tick();
///
/// assert_eq!(renderer.snapshot().attractors, vec![Vector2::ZERO]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedWorld(Arc<RwLock<World>>);

impl SharedWorld {
    /// Wraps a world so it can be shared.
    pub fn new(world: World) -> Self {
        Self(Arc::new(RwLock::new(world)))
    }

    /// Runs a closure with exclusive access to the world.
    #[inline]
    pub fn write<T>(&self, f: impl FnOnce(&mut World) -> T) -> T {
        f(&mut *self.0.write())
    }

    /// Runs a closure with shared access to the world.
    #[inline]
    pub fn read<T>(&self, f: impl FnOnce(&World) -> T) -> T {
        f(&*self.0.read())
    }

    /// Advances the world by one frame.
    pub fn tick(&self) {
        self.write(World::tick);
    }

    /// Applies a command atomically.
    pub fn execute<R: Rng + ?Sized>(&self, command: Command, rng: &mut R) {
        self.write(|world| world.execute(command, rng));
    }

    /// Lets a controller handle an event, applying the resulting command atomically.
    pub fn handle<R: Rng + ?Sized>(
        &self,
        controller: &mut Controller,
        event: InputEvent,
        rng: &mut R,
    ) -> Option<Command> {
        self.write(|world| controller.handle(event, world, rng))
    }

    /// Copies what a renderer needs to draw the current frame.
    pub fn snapshot(&self) -> Snapshot {
        self.read(World::snapshot)
    }
}
