//! Decorative circular motion for catalogue planets and moons.
//!
//! Speeds in the catalogue are radians per frame at the reference frame rate,
//! so every advance rescales the real frame delta by [`REFERENCE_FPS`].

use serde::{Deserialize, Serialize};
use solar_core::constants::REFERENCE_FPS;
use solar_core::vector::Vector3;

/// Speed multipliers applied while an eclipse tour is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CinematicFactors {
    pub planet_orbit: f64,
    pub planet_spin: f64,
    pub moon_orbit: f64,
    pub moon_spin: f64,
    pub belt_orbit: f64,
}

impl CinematicFactors {
    /// Slow-motion factors used during a tour.
    pub const TOUR: Self = Self {
        planet_orbit: 0.08,
        planet_spin: 0.08,
        moon_orbit: 0.06,
        moon_spin: 0.6,
        belt_orbit: 0.06,
    };

    /// Real-time factors.
    pub const NORMAL: Self = Self {
        planet_orbit: 1.0,
        planet_spin: 1.0,
        moon_orbit: 1.0,
        moon_spin: 1.0,
        belt_orbit: 1.0,
    };

    pub fn for_tour(active: bool) -> Self {
        if active { Self::TOUR } else { Self::NORMAL }
    }
}

/// Base self-rotation per reference frame for planets and moons.
pub const PLANET_SPIN_PER_FRAME: f64 = 0.01;
pub const MOON_SPIN_PER_FRAME: f64 = 0.02;

/// A body moving on a flat circle in the ecliptic plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularOrbit {
    /// Orbit radius in scene units.
    pub dist: f64,
    /// Angular speed per reference frame (rad).
    pub speed: f64,
    pub initial_angle: f64,
}

impl CircularOrbit {
    pub fn new(dist: f64, speed: f64, initial_angle: f64) -> Self {
        Self {
            dist,
            speed,
            initial_angle,
        }
    }

    /// Moon orbit, pushed out past the parent's surface.
    pub fn moon(dist: f64, speed: f64, initial_angle: f64, parent_size: f64) -> Self {
        Self::new(dist + parent_size, speed, initial_angle)
    }

    /// Angle after one host frame of `dt` seconds.
    ///
    /// `factor` is one of the [`CinematicFactors`] fields. A paused simulation should
    /// not call this at all.
    pub fn advance(&self, angle: f64, dt: f64, sim_speed: f64, factor: f64) -> f64 {
        angle + self.speed * sim_speed * dt * REFERENCE_FPS * factor
    }

    /// Angle at wall-clock `t_ms` for the follow camera, which does not track frames.
    pub fn angle_at_ms(&self, t_ms: f64, sim_speed: f64) -> f64 {
        self.initial_angle + t_ms * 0.0001 * self.speed * sim_speed
    }

    /// Scene position for `angle`.
    pub fn position(&self, angle: f64) -> Vector3 {
        let (s, c) = angle.sin_cos();
        [c * self.dist, 0.0, s * self.dist]
    }
}

/// Self-rotation after one host frame.
pub fn spin(rotation: f64, per_frame: f64, dt: f64, factor: f64) -> f64 {
    rotation + per_frame * dt * REFERENCE_FPS * factor
}
