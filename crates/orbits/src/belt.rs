//! Procedural asteroid belts: seeded particle placement and per-frame drift.
//!
//! Each belt is a ring of particles on flat circles with a small vertical scatter.
//! The Trojans are the exception and cluster around Jupiter's L4 and L5 points.

use std::f64::consts::{FRAC_PI_3, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use solar_core::constants::REFERENCE_FPS;
use solar_core::vector::Vector3;

/// Sim-speed multiplier used when the simulation speed is exactly zero, so the
/// belts keep a barely visible drift.
pub const ZERO_SPEED_MULTIPLIER: f64 = 0.0001;

/// Radius of Jupiter's orbit the Trojans are scattered around.
pub const TROJAN_RADIUS: f64 = 25.0;
/// Half-width of the Trojan radial spread.
pub const TROJAN_RADIAL_SPREAD: f64 = 2.0;
/// Half-width of the Trojan angular spread around each Lagrange point (rad).
pub const TROJAN_ANGULAR_SPREAD: f64 = 0.5;

/// The individually generated belts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BeltKind {
    Inner,
    Middle,
    Outer,
    Trojans,
    Kuiper,
    Scattered,
    Oort,
}

/// Generation parameters of one belt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltParams {
    pub count: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Slowest orbit speed (rad per reference frame); particles get up to 50 % more.
    pub base_orbit_speed: f64,
    /// Full height of the vertical scatter.
    pub thickness: f64,
}

impl BeltKind {
    pub const ALL: [BeltKind; 7] = [
        BeltKind::Inner,
        BeltKind::Middle,
        BeltKind::Outer,
        BeltKind::Trojans,
        BeltKind::Kuiper,
        BeltKind::Scattered,
        BeltKind::Oort,
    ];

    pub fn params(self) -> BeltParams {
        let (count, inner_radius, outer_radius, base_orbit_speed, thickness) = match self {
            BeltKind::Inner => (150, 19.5, 21.5, 0.003, 1.2),
            BeltKind::Middle => (200, 21.5, 23.5, 0.0025, 1.2),
            BeltKind::Outer => (150, 23.5, 25.5, 0.002, 1.2),
            BeltKind::Trojans => (100, 23.0, 27.0, 0.000084, 1.2),
            BeltKind::Kuiper => (200, 44.0, 58.0, 0.0000015, 3.0),
            BeltKind::Scattered => (80, 58.0, 80.0, 0.0000008, 10.0),
            BeltKind::Oort => (50, 80.0, 120.0, 0.0000003, 20.0),
        };
        BeltParams {
            count,
            inner_radius,
            outer_radius,
            base_orbit_speed,
            thickness,
        }
    }

    /// Inner, middle and outer make up the main belt.
    pub fn is_main_belt(self) -> bool {
        matches!(self, BeltKind::Inner | BeltKind::Middle | BeltKind::Outer)
    }
}

/// One belt particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BeltParticle {
    pub angle: f64,
    pub radius: f64,
    /// Fixed vertical offset from the ecliptic.
    pub height: f64,
    pub size: f64,
    /// Angular speed per reference frame (rad).
    pub orbit_speed: f64,
}

impl BeltParticle {
    /// Angle after one host frame of `dt` seconds.
    ///
    /// `cinematic` is [`crate::CinematicFactors::belt_orbit`].
    pub fn advance(self, dt: f64, sim_speed: f64, cinematic: f64) -> Self {
        Self {
            angle: self.angle
                + self.orbit_speed * speed_multiplier(sim_speed) * dt * REFERENCE_FPS * cinematic,
            ..self
        }
    }

    pub fn position(&self) -> Vector3 {
        let (s, c) = self.angle.sin_cos();
        [c * self.radius, self.height, s * self.radius]
    }
}

/// Sim speed as seen by the belts: a stopped simulation still drifts slightly.
pub fn speed_multiplier(sim_speed: f64) -> f64 {
    if sim_speed == 0.0 {
        ZERO_SPEED_MULTIPLIER
    } else {
        sim_speed
    }
}

/// Generate the particles of `kind`. The same seed always yields the same belt.
pub fn generate(kind: BeltKind, seed: u64) -> Vec<BeltParticle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let params = kind.params();
    (0..params.count)
        .map(|i| sample_particle(&mut rng, kind, &params, i))
        .collect()
}

fn sample_particle(rng: &mut StdRng, kind: BeltKind, params: &BeltParams, i: usize) -> BeltParticle {
    let (angle, radius, size) = match kind {
        BeltKind::Trojans => {
            // First half leads Jupiter at L4, second half trails at L5.
            let lagrange = if i < params.count / 2 {
                FRAC_PI_3
            } else {
                -FRAC_PI_3
            };
            (
                lagrange + rng.gen_range(-TROJAN_ANGULAR_SPREAD..TROJAN_ANGULAR_SPREAD),
                TROJAN_RADIUS + rng.gen_range(-TROJAN_RADIAL_SPREAD..TROJAN_RADIAL_SPREAD),
                rng.gen_range(0.02..0.07),
            )
        }
        BeltKind::Scattered | BeltKind::Oort => {
            let size = if kind == BeltKind::Oort {
                rng.gen_range(0.05..0.17)
            } else {
                rng.gen_range(0.04..0.14)
            };
            (
                rng.gen_range(0.0..TAU),
                rng.gen_range(params.inner_radius..params.outer_radius),
                size,
            )
        }
        _ => (
            i as f64 / params.count as f64 * TAU + rng.gen_range(0.0..0.5),
            rng.gen_range(params.inner_radius..params.outer_radius),
            rng.gen_range(0.01..0.09),
        ),
    };
    let half = params.thickness / 2.0;
    BeltParticle {
        angle,
        radius,
        height: rng.gen_range(-half..half),
        size,
        orbit_speed: params.base_orbit_speed * (1.0 + rng.gen_range(0.0..0.5)),
    }
}
