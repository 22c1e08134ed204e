//! Classical orbital elements to heliocentric Cartesian position.
//!
//! The eccentric anomaly is found by a fixed number of fixed-point iterations
//! rather than a tolerance-driven loop, so precision for very eccentric orbits
//! is bounded by [`KEPLER_ITERATIONS`]. Inputs are not validated: NaN in, NaN out.
//! Only elliptical orbits (`0 <= e < 1`) are meaningful.

use serde::{Deserialize, Serialize};
use solar_core::units::{au_to_scene, deg_to_rad};
use solar_core::vector::{self, Vector3};

/// Number of fixed-point iterations applied to Kepler's equation.
pub const KEPLER_ITERATIONS: usize = 10;

/// Keplerian elements with angles in degrees, as published by small-body databases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (AU).
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination (deg).
    pub i: f64,
    /// Longitude of the ascending node (deg).
    pub om: f64,
    /// Argument of periapsis (deg).
    pub w: f64,
    /// Mean anomaly (deg).
    pub ma: f64,
}

/// Position in the same length unit as the semi-major axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    pub fn magnitude(&self) -> f64 {
        vector::norm(&self.to_array())
    }

    /// Convert an AU position into scene units.
    pub fn to_scene(&self) -> Self {
        Self::new(au_to_scene(self.x), au_to_scene(self.y), au_to_scene(self.z))
    }

    pub fn to_array(&self) -> Vector3 {
        [self.x, self.y, self.z]
    }
}

impl OrbitalElements {
    pub fn new(a: f64, e: f64, i: f64, om: f64, w: f64, ma: f64) -> Self {
        Self { a, e, i, om, w, ma }
    }

    /// Eccentric anomaly (rad) for this element set's mean anomaly.
    pub fn eccentric_anomaly(&self) -> f64 {
        solve_kepler(deg_to_rad(self.ma), self.e)
    }

    /// True anomaly (rad) at the current mean anomaly.
    pub fn true_anomaly(&self) -> f64 {
        true_anomaly(self.eccentric_anomaly(), self.e)
    }

    /// Heliocentric distance, in the unit of `a`.
    pub fn orbital_radius(&self) -> f64 {
        orbital_radius(self.a, self.e, self.eccentric_anomaly())
    }

    /// Position in the unit of `a`.
    pub fn to_cartesian(&self) -> CartesianPosition {
        keplerian_to_cartesian(self)
    }
}

/// Solve `M = E - e sin E` by fixed-point iteration seeded at `E = M`.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ea = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        ea = mean_anomaly + e * ea.sin();
    }
    ea
}

/// True anomaly from eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, e: f64) -> f64 {
    let half = eccentric_anomaly * 0.5;
    2.0 * f64::atan2((1.0 + e).sqrt() * half.sin(), (1.0 - e).sqrt() * half.cos())
}

/// Radius `a (1 - e cos E)`.
pub fn orbital_radius(a: f64, e: f64, eccentric_anomaly: f64) -> f64 {
    a * (1.0 - e * eccentric_anomaly.cos())
}

/// Map one element set to one Cartesian position.
pub fn keplerian_to_cartesian(elements: &OrbitalElements) -> CartesianPosition {
    let i = deg_to_rad(elements.i);
    let om = deg_to_rad(elements.om);
    let w = deg_to_rad(elements.w);

    let ea = elements.eccentric_anomaly();
    let nu = true_anomaly(ea, elements.e);
    let r = orbital_radius(elements.a, elements.e, ea);
    let x_orb = r * nu.cos();
    let y_orb = r * nu.sin();

    let (sin_w, cos_w) = w.sin_cos();
    let (sin_om, cos_om) = om.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    let x = x_orb * (cos_w * cos_om - sin_w * sin_om * cos_i)
        - y_orb * (sin_w * cos_om + cos_w * sin_om * cos_i);
    let y = x_orb * (cos_w * sin_om + sin_w * cos_om * cos_i)
        + y_orb * (cos_w * cos_om * cos_i - sin_w * sin_om);
    let z = x_orb * sin_w * sin_i + y_orb * cos_w * sin_i;

    CartesianPosition { x, y, z }
}
