//! Follow camera: keeps a fixed offset from a body moving on its decorative orbit.

use serde::Serialize;
use solar_core::vector::{self, Vector3, ZERO};
use solar_orbits::CircularOrbit;

/// Pose the camera returns to on reset.
pub const HOME_POSITION: Vector3 = [0.0, 30.0, 70.0];

/// Smallest follow distance, for tiny bodies.
pub const MIN_FOLLOW_DISTANCE: f64 = 15.0;

/// Body the camera is locked on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowTarget {
    pub name: String,
    pub size: f64,
    pub orbit: CircularOrbit,
}

impl FollowTarget {
    /// Offset from the body, scaled to its size.
    pub fn offset(&self) -> Vector3 {
        let d = (self.size * 8.0).max(MIN_FOLLOW_DISTANCE);
        [d, d * 0.5, d]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FollowCamera {
    pub position: Vector3,
    pub look_at: Vector3,
    last_target: Vector3,
    initialized: bool,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::home()
    }
}

impl FollowCamera {
    pub fn home() -> Self {
        Self {
            position: HOME_POSITION,
            look_at: ZERO,
            last_target: ZERO,
            initialized: false,
        }
    }

    /// Called whenever the follow target changes. Dropping the target sends the camera home.
    pub fn retarget(self, following: Option<&FollowTarget>) -> Self {
        match following {
            None => Self::home(),
            Some(_) => Self {
                initialized: false,
                ..self
            },
        }
    }

    /// One frame of following at wall-clock `t_ms`.
    ///
    /// The first frame after (re)targeting snaps to the offset pose; afterwards the
    /// camera is translated by the body's motion so user orbiting is preserved.
    pub fn update(self, following: Option<&FollowTarget>, t_ms: f64, sim_speed: f64) -> Self {
        let Some(body) = following else {
            return Self {
                initialized: false,
                ..self
            };
        };

        let angle = body.orbit.angle_at_ms(t_ms, sim_speed);
        let target = body.orbit.position(angle);

        let position = if self.initialized {
            let movement = vector::sub(&target, &self.last_target);
            vector::add(&self.position, &movement)
        } else {
            vector::add(&target, &body.offset())
        };

        Self {
            position,
            look_at: target,
            last_target: target,
            initialized: true,
        }
    }
}
