//! View-layer state for the viewer, kept as plain records updated by pure reducers.
//!
//! Nothing here renders; the host owns the canvas and feeds actions in.

pub mod camera;
pub mod keyboard;
pub mod simulation;
pub mod ui;

pub use camera::{FollowCamera, FollowTarget};
pub use keyboard::{HostCommand, KeyContext, Shortcut, shortcut};
pub use simulation::{AsteroidBelt, BeltVisibility, SimulationAction, SimulationState};
pub use ui::{UiAction, UiState};
