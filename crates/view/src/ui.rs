//! Panel flags and the eclipse-tour fields shown in the narration overlay.

use serde::Serialize;
use solar_core::vector::Vector3;
use solar_tour::{INTRO, StepOutcome, TourConfig, TourFrame, TourKind, TourState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub mission_control_open: bool,
    pub celestial_panel_open: bool,
    pub planet_info_open: bool,
    pub chatbot_open: bool,
    pub info_panel_open: bool,
    pub ui_visible: bool,
    pub tour: TourState,
    pub eclipse_progress: f64,
    pub eclipse_title: String,
    pub eclipse_description: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mission_control_open: false,
            celestial_panel_open: false,
            planet_info_open: false,
            chatbot_open: false,
            info_panel_open: false,
            ui_visible: true,
            tour: TourState::inactive(),
            eclipse_progress: 0.0,
            eclipse_title: String::new(),
            eclipse_description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    ToggleMissionControl,
    ToggleCelestialPanel,
    OpenPlanetInfo,
    ClosePlanetInfo,
    ToggleChatbot,
    ToggleInfoPanel,
    ToggleUiVisibility,
    StartEclipseTour(TourKind),
    StopEclipseTour,
    UpdateEclipseProgress {
        progress: f64,
        title: String,
        description: String,
    },
}

impl UiState {
    pub fn reduce(self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleMissionControl => Self {
                mission_control_open: !self.mission_control_open,
                ..self
            },
            UiAction::ToggleCelestialPanel => Self {
                celestial_panel_open: !self.celestial_panel_open,
                ..self
            },
            UiAction::OpenPlanetInfo => Self {
                planet_info_open: true,
                ..self
            },
            UiAction::ClosePlanetInfo => Self {
                planet_info_open: false,
                ..self
            },
            UiAction::ToggleChatbot => Self {
                chatbot_open: !self.chatbot_open,
                ..self
            },
            UiAction::ToggleInfoPanel => Self {
                info_panel_open: !self.info_panel_open,
                ..self
            },
            UiAction::ToggleUiVisibility => Self {
                ui_visible: !self.ui_visible,
                ..self
            },
            UiAction::StartEclipseTour(kind) => {
                let tour = TourState::start(kind);
                let intro = tour.text().unwrap_or(INTRO);
                Self {
                    tour,
                    eclipse_progress: 0.0,
                    eclipse_title: intro.title.to_string(),
                    eclipse_description: intro.description.to_string(),
                    ..self
                }
            }
            UiAction::StopEclipseTour => Self {
                tour: TourState::inactive(),
                eclipse_progress: 0.0,
                eclipse_title: String::new(),
                eclipse_description: String::new(),
                ..self
            },
            UiAction::UpdateEclipseProgress {
                progress,
                title,
                description,
            } => Self {
                eclipse_progress: progress,
                eclipse_title: title,
                eclipse_description: description,
                ..self
            },
        }
    }

    pub fn tour_active(&self) -> bool {
        self.tour.active
    }

    /// Run one frame of the tour and fold its outcome back into the UI fields.
    ///
    /// Completion stops the tour exactly as an external cancel would.
    pub fn advance_tour(
        self,
        dt: f64,
        camera_position: Vector3,
        config: &TourConfig,
    ) -> (Self, Option<TourFrame>) {
        let (tour, outcome) = self.tour.step(dt, camera_position, config);
        match outcome {
            StepOutcome::Inactive => (Self { tour, ..self }, None),
            StepOutcome::Completed => (self.reduce(UiAction::StopEclipseTour), None),
            StepOutcome::Running(frame) => {
                let next = Self { tour, ..self }.reduce(UiAction::UpdateEclipseProgress {
                    progress: frame.progress,
                    title: frame.text.title.to_string(),
                    description: frame.text.description.to_string(),
                });
                (next, Some(frame))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_tour::narration;

    #[test]
    fn starting_a_tour_shows_intro_text() {
        let ui = UiState::default().reduce(UiAction::StartEclipseTour(TourKind::Solar));
        assert!(ui.tour_active());
        assert_eq!(ui.eclipse_title, INTRO.title);
        assert_eq!(ui.eclipse_progress, 0.0);
    }

    #[test]
    fn frames_replace_intro_with_phase_text() {
        let cfg = TourConfig::default();
        let ui = UiState::default().reduce(UiAction::StartEclipseTour(TourKind::Lunar));
        let (ui, frame) = ui.advance_tour(3.0, [0.0, 30.0, 70.0], &cfg);
        assert!(frame.is_some());
        assert_eq!(ui.eclipse_title, narration(TourKind::Lunar)[0].title);
        assert!((ui.eclipse_progress - 25.0).abs() < 1e-12);
    }

    #[test]
    fn completion_clears_tour_fields() {
        let cfg = TourConfig::default();
        let mut ui = UiState::default().reduce(UiAction::StartEclipseTour(TourKind::Solar));
        for _ in 0..60 {
            ui = ui.advance_tour(1.0, [0.0, 30.0, 70.0], &cfg).0;
        }
        assert!(!ui.tour_active());
        assert!(ui.eclipse_title.is_empty());
    }
}
