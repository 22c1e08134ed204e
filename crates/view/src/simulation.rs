//! Simulation-wide toggles: speed, pause, overlays, selection and belt visibility.

use serde::Serialize;
use solar_orbits::BeltKind;

use crate::camera::FollowTarget;

pub const DEFAULT_SPEED: f64 = 0.4;
pub const DEFAULT_BLOOM: f64 = 0.5;

/// Procedural asteroid belts that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AsteroidBelt {
    Main,
    Inner,
    Middle,
    Outer,
    Trojans,
    Kuiper,
    Scattered,
    Oort,
}

impl AsteroidBelt {
    pub const ALL: [AsteroidBelt; 8] = [
        AsteroidBelt::Main,
        AsteroidBelt::Inner,
        AsteroidBelt::Middle,
        AsteroidBelt::Outer,
        AsteroidBelt::Trojans,
        AsteroidBelt::Kuiper,
        AsteroidBelt::Scattered,
        AsteroidBelt::Oort,
    ];
}

impl From<BeltKind> for AsteroidBelt {
    fn from(kind: BeltKind) -> Self {
        match kind {
            BeltKind::Inner => AsteroidBelt::Inner,
            BeltKind::Middle => AsteroidBelt::Middle,
            BeltKind::Outer => AsteroidBelt::Outer,
            BeltKind::Trojans => AsteroidBelt::Trojans,
            BeltKind::Kuiper => AsteroidBelt::Kuiper,
            BeltKind::Scattered => AsteroidBelt::Scattered,
            BeltKind::Oort => AsteroidBelt::Oort,
        }
    }
}

/// Per-belt visibility plus the master "all" switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeltVisibility {
    pub all: bool,
    pub main: bool,
    pub inner: bool,
    pub middle: bool,
    pub outer: bool,
    pub trojans: bool,
    pub kuiper: bool,
    pub scattered: bool,
    pub oort: bool,
}

impl BeltVisibility {
    pub fn uniform(visible: bool) -> Self {
        Self {
            all: visible,
            main: visible,
            inner: visible,
            middle: visible,
            outer: visible,
            trojans: visible,
            kuiper: visible,
            scattered: visible,
            oort: visible,
        }
    }

    /// Raw flag for `belt`. Use [`SimulationState::belt_visible`] to decide rendering.
    pub fn get(&self, belt: AsteroidBelt) -> bool {
        match belt {
            AsteroidBelt::Main => self.main,
            AsteroidBelt::Inner => self.inner,
            AsteroidBelt::Middle => self.middle,
            AsteroidBelt::Outer => self.outer,
            AsteroidBelt::Trojans => self.trojans,
            AsteroidBelt::Kuiper => self.kuiper,
            AsteroidBelt::Scattered => self.scattered,
            AsteroidBelt::Oort => self.oort,
        }
    }

    /// Copy with one belt changed. The `all` switch is left as is.
    pub fn with(mut self, belt: AsteroidBelt, visible: bool) -> Self {
        let slot = match belt {
            AsteroidBelt::Main => &mut self.main,
            AsteroidBelt::Inner => &mut self.inner,
            AsteroidBelt::Middle => &mut self.middle,
            AsteroidBelt::Outer => &mut self.outer,
            AsteroidBelt::Trojans => &mut self.trojans,
            AsteroidBelt::Kuiper => &mut self.kuiper,
            AsteroidBelt::Scattered => &mut self.scattered,
            AsteroidBelt::Oort => &mut self.oort,
        };
        *slot = visible;
        self
    }
}

/// Global simulation view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationState {
    pub speed: f64,
    pub paused: bool,
    pub show_orbits: bool,
    pub show_moons: bool,
    pub show_real_asteroids: bool,
    pub show_comets: bool,
    pub bloom_strength: f64,
    pub bloom_manual: bool,
    pub selected_body: Option<String>,
    pub following: Option<FollowTarget>,
    pub show_labels: bool,
    pub show_moon_labels: bool,
    pub belts: BeltVisibility,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            paused: false,
            show_orbits: true,
            show_moons: true,
            show_real_asteroids: false,
            show_comets: true,
            bloom_strength: DEFAULT_BLOOM,
            bloom_manual: false,
            selected_body: None,
            following: None,
            show_labels: false,
            show_moon_labels: false,
            belts: BeltVisibility::uniform(true),
        }
    }
}

/// Every mutation the host can request.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationAction {
    SetSpeed(f64),
    TogglePause,
    ToggleOrbits,
    ToggleMoons,
    ToggleRealAsteroids,
    ToggleComets,
    SetBloomStrength(f64),
    ToggleBloomManual,
    Select(Option<String>),
    Follow(Option<FollowTarget>),
    ToggleLabels,
    ToggleMoonLabels,
    SetBeltVisibility(AsteroidBelt, bool),
    ToggleBelt(AsteroidBelt),
    ToggleAllBelts,
}

impl SimulationState {
    /// Apply `action`, returning the next state.
    pub fn reduce(self, action: SimulationAction) -> Self {
        use SimulationAction::*;
        match action {
            SetSpeed(speed) => Self { speed, ..self },
            TogglePause => Self {
                paused: !self.paused,
                ..self
            },
            ToggleOrbits => Self {
                show_orbits: !self.show_orbits,
                ..self
            },
            ToggleMoons => Self {
                show_moons: !self.show_moons,
                ..self
            },
            ToggleRealAsteroids => Self {
                show_real_asteroids: !self.show_real_asteroids,
                ..self
            },
            ToggleComets => Self {
                show_comets: !self.show_comets,
                ..self
            },
            SetBloomStrength(bloom_strength) => Self {
                bloom_strength,
                ..self
            },
            ToggleBloomManual => Self {
                bloom_manual: !self.bloom_manual,
                ..self
            },
            Select(selected_body) => Self {
                selected_body,
                ..self
            },
            Follow(following) => Self { following, ..self },
            ToggleLabels => Self {
                show_labels: !self.show_labels,
                ..self
            },
            ToggleMoonLabels => Self {
                show_moon_labels: !self.show_moon_labels,
                ..self
            },
            SetBeltVisibility(belt, visible) => Self {
                belts: self.belts.with(belt, visible),
                ..self
            },
            ToggleBelt(belt) => {
                let visible = !self.belts.get(belt);
                Self {
                    belts: self.belts.with(belt, visible),
                    ..self
                }
            }
            // Driven by the master switch, not by the individual belts.
            ToggleAllBelts => Self {
                belts: BeltVisibility::uniform(!self.belts.all),
                ..self
            },
        }
    }

    /// Whether `belt` is drawn. The inner, middle and outer rings follow the main-belt flag.
    pub fn belt_visible(&self, belt: impl Into<AsteroidBelt>) -> bool {
        match belt.into() {
            AsteroidBelt::Inner | AsteroidBelt::Middle | AsteroidBelt::Outer => self.belts.main,
            other => self.belts.get(other),
        }
    }
}
