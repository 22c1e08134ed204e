//! Numeric core of the solar system viewer.
//!
//! The browser front-end owns rendering, panels and audio; everything it computes
//! per frame (small-body positions, decorative orbits, the eclipse tour, view-state
//! transitions) lives in the workspace crates re-exported here so every front-end
//! shares one implementation.

pub use solar_config as config;
pub use solar_core as primitives;
pub use solar_export as export;
pub use solar_orbits as orbits;
pub use solar_tour as tour;
pub use solar_view as view;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
