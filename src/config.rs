use crate::{
    error::ConfigError,
    force::{InverseSquare, MAX_DISTANCE, MIN_DISTANCE},
    particle::{Appearance, PARTICLE_MASS},
};

/// Strength of an attractor spawned with a multiplier of `1.0`.
pub const BASE_STRENGTH: f64 = 10_000.0;

/// Largest strength multiplier the control surface can give an attractor.
pub const MAX_STRENGTH: f64 = 10.0;

/// Largest friction coefficient a particle can be given. A coefficient of `1.0` would stop
/// particles dead every tick.
pub const MAX_FRICTION: f64 = 1.0 - f64::EPSILON;

/// Physical constants of a [`World`](crate::world::World).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Distances below this are clamped by the force law.
    pub min_distance: f64,
    /// Distances above this are clamped by the force law.
    pub max_distance: f64,
    /// Mass of every spawned particle.
    pub particle_mass: f64,
    /// Strength of an attractor with a multiplier of `1.0`.
    pub base_strength: f64,
    /// Randomised velocity components are drawn from `[-random_speed, random_speed)`.
    pub random_speed: f64,
    /// A mouse drag is divided by this to obtain a launch velocity.
    pub launch_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            particle_mass: PARTICLE_MASS,
            base_strength: BASE_STRENGTH,
            random_speed: 5.0,
            launch_scale: 50.0,
        }
    }
}

impl SimulationConfig {
    /// Checks that every constant can be used by the simulation.
    ///
    /// Besides each constant being finite and positive, the strongest force an attractor can
    /// exert and the width of the random velocity range must stay finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_distance", self.min_distance)?;
        positive("max_distance", self.max_distance)?;
        positive("particle_mass", self.particle_mass)?;
        positive("base_strength", self.base_strength)?;
        positive("random_speed", self.random_speed)?;
        positive("launch_scale", self.launch_scale)?;

        if self.min_distance > self.max_distance {
            return Err(ConfigError::InvertedDistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }

        let peak_force = self.particle_mass * self.base_strength * MAX_STRENGTH
            / (self.min_distance * self.min_distance);
        finite("peak force", peak_force)?;
        finite("random velocity range", 2.0 * self.random_speed)
    }

    /// The force law using this configuration's distance clamp.
    #[inline]
    pub fn force_law(&self) -> InverseSquare {
        InverseSquare::new(self.min_distance, self.max_distance)
    }
}

/// The five slider values of the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Colour of new particles, in `[0, 1]`.
    pub color: f64,
    /// Size of new particles, in `[0, 1]`.
    pub size: f64,
    /// Strength multiplier of new attractors, in `(0, 10]`.
    pub strength: f64,
    /// Velocity multiplier of new particles, in `[0, 5]`.
    pub velocity: f64,
    /// Friction of new particles, in `[0, 1]`.
    pub friction: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            color: 0.8,
            size: 0.8,
            strength: 1.0,
            velocity: 1.0,
            friction: 0.0,
        }
    }
}

impl Controls {
    /// Checks every slider value against its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        within("color", self.color, 0.0, 1.0)?;
        within("size", self.size, 0.0, 1.0)?;
        positive("strength", self.strength)?;
        within("strength", self.strength, 0.0, MAX_STRENGTH)?;
        within("velocity", self.velocity, 0.0, 5.0)?;
        within("friction", self.friction, 0.0, 1.0)
    }

    /// Appearance given to new particles.
    #[inline]
    pub fn appearance(&self) -> Appearance {
        Appearance {
            color: self.color,
            size: self.size,
        }
    }

    /// Friction coefficient given to new particles: the slider value clamped to `[0, 1)`.
    #[inline]
    pub fn friction_coefficient(&self) -> f64 {
        self.friction.max(0.0).min(MAX_FRICTION)
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn within(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
