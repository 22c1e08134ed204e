//! Eclipse camera tour: a fixed five-phase sequence advanced once per rendered frame.
//!
//! The host calls [`TourState::step`] with the frame delta and the camera's current
//! position; the returned [`StepOutcome`] carries everything needed to drive the
//! camera, the corona overlay and the narration panel for that frame.
//!
//! Phase 0 eases the camera toward its keyframe by exponential smoothing; every later
//! phase blends from the previous keyframe to the current one with a cosine ease.

pub mod script;

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use solar_core::vector::{self, Vector3};
use thiserror::Error;

pub use script::{INTRO, Keyframe, PHASE_COUNT, PhaseText, keyframes, narration};

/// Which eclipse the tour narrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourKind {
    Solar,
    Lunar,
}

impl fmt::Display for TourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourKind::Solar => f.write_str("solar"),
            TourKind::Lunar => f.write_str("lunar"),
        }
    }
}

/// Timing knobs for the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    /// Length of every phase (s).
    pub phase_duration_s: f64,
    /// Per-frame fraction of the remaining distance covered during phase 0.
    pub first_phase_smoothing: f64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            phase_duration_s: 12.0,
            first_phase_smoothing: 0.02,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TourConfigError {
    #[error("phase duration must be a positive number of seconds, got {0}")]
    PhaseDuration(f64),
    #[error("first-phase smoothing must lie in (0, 1], got {0}")]
    Smoothing(f64),
}

impl TourConfig {
    pub fn new(phase_duration_s: f64, first_phase_smoothing: f64) -> Result<Self, TourConfigError> {
        if !(phase_duration_s > 0.0 && phase_duration_s.is_finite()) {
            return Err(TourConfigError::PhaseDuration(phase_duration_s));
        }
        if !(first_phase_smoothing > 0.0 && first_phase_smoothing <= 1.0) {
            return Err(TourConfigError::Smoothing(first_phase_smoothing));
        }
        Ok(Self {
            phase_duration_s,
            first_phase_smoothing,
        })
    }

    /// Full tour length (s).
    pub fn total_duration_s(&self) -> f64 {
        self.phase_duration_s * PHASE_COUNT as f64
    }

    /// Fraction of a phase covered after `elapsed_s`, in `[0, 1]`.
    ///
    /// A non-positive duration (only reachable by building the struct by hand)
    /// reads as the start of the phase.
    pub fn phase_fraction(&self, elapsed_s: f64) -> f64 {
        if self.phase_duration_s > 0.0 {
            (elapsed_s / self.phase_duration_s).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Corona opacity at totality.
pub const CORONA_PEAK_OPACITY: f64 = 0.85;

/// Coarse view of where the sequencer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStatus {
    Inactive,
    Phase(usize),
}

/// Sequencer state carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TourState {
    pub active: bool,
    pub kind: Option<TourKind>,
    pub phase: usize,
    pub elapsed_s: f64,
    pub corona_opacity: f64,
    /// Set by [`TourState::start`] and cleared by the first step.
    pub awaiting_first_step: bool,
}

impl Default for TourState {
    fn default() -> Self {
        Self::inactive()
    }
}

/// Camera pose produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vector3,
    pub target: Vector3,
}

/// Everything the host needs to render one tour frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourFrame {
    pub kind: TourKind,
    pub phase: usize,
    /// Percentage of the current phase elapsed, in `[0, 100)`.
    pub progress: f64,
    pub text: PhaseText,
    /// Pose the blend starts from. In phase 0 this is the live camera pose.
    pub from: Keyframe,
    pub to: Keyframe,
    pub blend: f64,
    pub camera: CameraPose,
    pub corona_opacity: f64,
}

/// Result of a single frame step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Tour not running; nothing to do.
    Inactive,
    Running(TourFrame),
    /// The last phase ran out on this step. The state has already been reset.
    Completed,
}

impl TourState {
    pub fn inactive() -> Self {
        Self {
            active: false,
            kind: None,
            phase: 0,
            elapsed_s: 0.0,
            corona_opacity: 0.0,
            awaiting_first_step: false,
        }
    }

    /// Begin a fresh run at phase 0.
    pub fn start(kind: TourKind) -> Self {
        Self {
            active: true,
            kind: Some(kind),
            awaiting_first_step: true,
            ..Self::inactive()
        }
    }

    /// External cancellation.
    pub fn stop(self) -> Self {
        Self::inactive()
    }

    pub fn status(&self) -> TourStatus {
        match (self.active, self.kind) {
            (true, Some(_)) => TourStatus::Phase(self.phase),
            _ => TourStatus::Inactive,
        }
    }

    /// Percentage of the current phase elapsed, clamped to `[0, 100]`.
    pub fn progress(&self, config: &TourConfig) -> f64 {
        config.phase_fraction(self.elapsed_s) * 100.0
    }

    /// Narration for the current phase: [`INTRO`] until the first step, `None`
    /// while inactive.
    pub fn text(&self) -> Option<PhaseText> {
        let kind = self.kind?;
        if self.awaiting_first_step {
            return Some(INTRO);
        }
        narration(kind).get(self.phase).copied()
    }

    /// Advance by one host frame of `dt` seconds.
    ///
    /// At most one phase boundary is crossed per call, and any time past the boundary
    /// is discarded. Negative deltas count as zero.
    pub fn step(
        self,
        dt: f64,
        camera_position: Vector3,
        config: &TourConfig,
    ) -> (TourState, StepOutcome) {
        let kind = match (self.active, self.kind) {
            (true, Some(kind)) => kind,
            _ => return (Self::inactive(), StepOutcome::Inactive),
        };

        let mut next = self;
        next.awaiting_first_step = false;
        next.elapsed_s += dt.max(0.0);
        if next.elapsed_s >= config.phase_duration_s {
            next.phase += 1;
            next.elapsed_s = 0.0;
            if next.phase >= PHASE_COUNT {
                return (Self::inactive(), StepOutcome::Completed);
            }
        }

        let fraction = config.phase_fraction(next.elapsed_s);
        let frames = keyframes(kind);
        let to = frames[next.phase];
        let (from, blend) = if next.phase > 0 {
            (frames[next.phase - 1], cosine_ease(fraction))
        } else {
            let live = Keyframe {
                position: camera_position,
                target: to.target,
            };
            (live, config.first_phase_smoothing)
        };
        let camera = CameraPose {
            position: vector::lerp(&from.position, &to.position, blend),
            target: vector::lerp(&from.target, &to.target, blend),
        };

        next.corona_opacity = corona_opacity(next.phase, fraction, next.corona_opacity);

        let frame = TourFrame {
            kind,
            phase: next.phase,
            progress: fraction * 100.0,
            text: narration(kind)[next.phase],
            from,
            to,
            blend,
            camera,
            corona_opacity: next.corona_opacity,
        };
        (next, StepOutcome::Running(frame))
    }
}

/// `0.5 (1 - cos(pi t))`: zero slope at both ends.
pub fn cosine_ease(t: f64) -> f64 {
    0.5 * (1.0 - (t * PI).cos())
}

/// Corona overlay opacity for `phase` at `fraction` of the phase.
///
/// Phase 1 (and anything past the script) keeps `previous`.
pub fn corona_opacity(phase: usize, fraction: f64, previous: f64) -> f64 {
    match phase {
        0 => 0.0,
        2 => fraction * 0.3,
        3 => CORONA_PEAK_OPACITY,
        4 => CORONA_PEAK_OPACITY - fraction * 0.9,
        _ => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_CAMERA: Vector3 = [0.0, 30.0, 70.0];

    #[test]
    fn config_rejects_non_positive_phase_length() {
        assert_eq!(
            TourConfig::new(0.0, 0.02),
            Err(TourConfigError::PhaseDuration(0.0))
        );
        assert!(TourConfig::new(f64::NAN, 0.02).is_err());
        assert!(TourConfig::new(12.0, 0.0).is_err());
        assert_eq!(TourConfig::new(12.0, 0.02), Ok(TourConfig::default()));
    }

    #[test]
    fn hand_built_zero_length_phase_stays_finite() {
        let cfg = TourConfig {
            phase_duration_s: 0.0,
            ..TourConfig::default()
        };
        let (state, outcome) = TourState::start(TourKind::Solar).step(0.016, START_CAMERA, &cfg);
        let StepOutcome::Running(frame) = outcome else {
            panic!("tour should be running");
        };
        assert_eq!(frame.phase, 1);
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.blend, 0.0);
        assert!(frame.camera.position.iter().all(|c| c.is_finite()));
        assert_eq!(frame.camera.position, keyframes(TourKind::Solar)[0].position);
        assert_eq!(state.progress(&cfg), 0.0);
    }

    #[test]
    fn inactive_state_ignores_steps() {
        let (state, outcome) = TourState::inactive().step(1.0, START_CAMERA, &TourConfig::default());
        assert_eq!(outcome, StepOutcome::Inactive);
        assert_eq!(state, TourState::inactive());
    }

    #[test]
    fn first_phase_smooths_toward_keyframe() {
        let cfg = TourConfig::default();
        let (_, outcome) = TourState::start(TourKind::Solar).step(0.5, START_CAMERA, &cfg);
        let StepOutcome::Running(frame) = outcome else {
            panic!("tour should be running");
        };
        assert_eq!(frame.phase, 0);
        assert_eq!(frame.blend, 0.02);
        // (0,30,70) -> (0,20,40) by 2 %.
        assert!((frame.camera.position[1] - 29.8).abs() < 1e-12);
        assert!((frame.camera.position[2] - 69.4).abs() < 1e-12);
        assert_eq!(frame.camera.target, [0.0, 0.0, 0.0]);
        assert_eq!(frame.corona_opacity, 0.0);
    }

    #[test]
    fn later_phases_blend_between_keyframes() {
        let cfg = TourConfig::default();
        let mut state = TourState::start(TourKind::Solar);
        for _ in 0..12 {
            state = state.step(1.0, START_CAMERA, &cfg).0;
        }
        assert_eq!(state.status(), TourStatus::Phase(1));
        assert_eq!(state.elapsed_s, 0.0);

        let (_, outcome) = state.step(6.0, START_CAMERA, &cfg);
        let StepOutcome::Running(frame) = outcome else {
            panic!("tour should be running");
        };
        assert!((frame.blend - 0.5).abs() < 1e-12);
        assert!((frame.progress - 50.0).abs() < 1e-12);
        assert_eq!(frame.from, keyframes(TourKind::Solar)[0]);
        assert_eq!(frame.to, keyframes(TourKind::Solar)[1]);
        assert!((frame.camera.position[0] - 12.5).abs() < 1e-9);
        assert!((frame.camera.target[0] - 7.5).abs() < 1e-9);
    }

    #[test]
    fn corona_schedule_follows_phases() {
        assert_eq!(corona_opacity(0, 0.5, 0.4), 0.0);
        assert_eq!(corona_opacity(1, 0.5, 0.4), 0.4);
        assert!((corona_opacity(2, 0.5, 0.0) - 0.15).abs() < 1e-12);
        assert_eq!(corona_opacity(3, 0.1, 0.0), CORONA_PEAK_OPACITY);
        assert!((corona_opacity(4, 0.5, 0.85) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn oversized_delta_crosses_only_one_boundary() {
        let cfg = TourConfig::default();
        let (state, _) = TourState::start(TourKind::Lunar).step(30.0, START_CAMERA, &cfg);
        assert_eq!(state.phase, 1);
        assert_eq!(state.elapsed_s, 0.0);
    }

    #[test]
    fn stop_resets_everything() {
        let cfg = TourConfig::default();
        let (state, _) = TourState::start(TourKind::Solar).step(3.0, START_CAMERA, &cfg);
        assert_eq!(state.stop(), TourState::inactive());
    }

    #[test]
    fn intro_text_shows_until_first_step() {
        let state = TourState::start(TourKind::Lunar);
        assert_eq!(state.text(), Some(INTRO));
        let (state, _) = state.step(0.0, START_CAMERA, &TourConfig::default());
        assert_eq!(state.text(), Some(narration(TourKind::Lunar)[0]));
        assert_eq!(TourState::inactive().text(), None);
    }
}
