//! Orbit helpers: Keplerian element solving for catalogued small bodies and the
//! decorative circular motion used for planets, moons and the procedural belts.

pub mod belt;
pub mod circular;
pub mod kepler;

pub use belt::{BeltKind, BeltParams, BeltParticle};
pub use circular::{CinematicFactors, CircularOrbit};
pub use kepler::{CartesianPosition, KEPLER_ITERATIONS, OrbitalElements, keplerian_to_cartesian};
