//! Core units, constants, and shared primitives for the solar system viewer workspace.

/// Scene and angular constants.
pub mod constants {
    /// Degrees to radians.
    pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;
    /// Scene units per astronomical unit (Earth's decorative orbit sits at 15).
    pub const AU_TO_SCENE: f64 = 15.0;
    /// Host frame rate the per-frame speeds in the body catalog were tuned against.
    pub const REFERENCE_FPS: f64 = 60.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_TO_SCENE, DEG2RAD};

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * DEG2RAD
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v / DEG2RAD
    }

    /// Convert astronomical units to scene units.
    #[inline]
    pub fn au_to_scene(v: f64) -> f64 {
        v * AU_TO_SCENE
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in scene units.
    pub type Vector3 = [f64; 3];

    /// The origin, where the Sun sits.
    pub const ZERO: Vector3 = [0.0, 0.0, 0.0];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Linear interpolation `a + (b - a) * t`.
    #[inline]
    pub fn lerp(a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
        add(a, &scale(&sub(b, a), t))
    }
}
