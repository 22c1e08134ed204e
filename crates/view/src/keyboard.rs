//! Keyboard shortcut table.
//!
//! Keys map to reducer actions plus, for things the host owns (camera reset, music),
//! host commands. Lookup is pure; the host applies the result.

use crate::simulation::{DEFAULT_BLOOM, SimulationAction, SimulationState};
use crate::ui::UiAction;

pub const MAX_SPEED: f64 = 10.0;
pub const SPEED_STEP: f64 = 0.5;

/// Side effects only the host can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    ResetCamera,
    ToggleMusic,
}

/// Everything a single key press asks for, in application order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shortcut {
    pub simulation: Vec<SimulationAction>,
    pub ui: Vec<UiAction>,
    pub host: Vec<HostCommand>,
}

impl Shortcut {
    fn sim(actions: impl IntoIterator<Item = SimulationAction>) -> Self {
        Self {
            simulation: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.simulation.is_empty() && self.ui.is_empty() && self.host.is_empty()
    }
}

/// Input context the table needs besides the key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    /// Chat input has focus; keys are typed text, not shortcuts.
    pub chat_focused: bool,
}

/// Resolve `key` against the current simulation state.
///
/// Returns `None` for keys with no binding or when the chat input is focused.
pub fn shortcut(key: &str, state: &SimulationState, ctx: KeyContext) -> Option<Shortcut> {
    if ctx.chat_focused {
        return None;
    }
    let shortcut = match key.to_lowercase().as_str() {
        " " => Shortcut::sim([SimulationAction::TogglePause]),
        "r" => Shortcut {
            simulation: vec![SimulationAction::Follow(None)],
            host: vec![HostCommand::ResetCamera],
            ..Shortcut::default()
        },
        "f" => Shortcut::sim([SimulationAction::Follow(None)]),
        "o" => Shortcut::sim([SimulationAction::ToggleOrbits]),
        "m" => Shortcut::sim([SimulationAction::ToggleMoons]),
        "h" => Shortcut {
            ui: vec![UiAction::ToggleUiVisibility],
            ..Shortcut::default()
        },
        "p" => Shortcut {
            host: vec![HostCommand::ToggleMusic],
            ..Shortcut::default()
        },
        "+" | "=" => Shortcut::sim([SimulationAction::SetSpeed(
            (state.speed + SPEED_STEP).min(MAX_SPEED),
        )]),
        "-" => Shortcut::sim([SimulationAction::SetSpeed(
            (state.speed - SPEED_STEP).max(0.0),
        )]),
        "b" => {
            let mut actions = vec![SimulationAction::ToggleBloomManual];
            // Decided on the state before the toggle.
            if state.bloom_manual {
                actions.push(SimulationAction::SetBloomStrength(DEFAULT_BLOOM));
            }
            Shortcut::sim(actions)
        }
        // Belt cycling is bound but has no behaviour yet.
        "a" => Shortcut::default(),
        _ => return None,
    };
    Some(shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: SimulationState, key: &str) -> SimulationState {
        shortcut(key, &state, KeyContext::default())
            .map(|s| s.simulation.into_iter().fold(state.clone(), SimulationState::reduce))
            .unwrap_or(state)
    }

    #[test]
    fn speed_keys_clamp() {
        let mut s = SimulationState::default();
        for _ in 0..30 {
            s = apply(s, "+");
        }
        assert_eq!(s.speed, MAX_SPEED);
        for _ in 0..30 {
            s = apply(s, "-");
        }
        assert_eq!(s.speed, 0.0);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let s = apply(SimulationState::default(), "O");
        assert!(!s.show_orbits);
    }

    #[test]
    fn chat_focus_swallows_shortcuts() {
        let ctx = KeyContext { chat_focused: true };
        assert!(shortcut(" ", &SimulationState::default(), ctx).is_none());
    }

    #[test]
    fn reset_stops_following_and_asks_host() {
        let s = shortcut("r", &SimulationState::default(), KeyContext::default()).unwrap();
        assert_eq!(s.host, vec![HostCommand::ResetCamera]);
        assert_eq!(s.simulation, vec![SimulationAction::Follow(None)]);
    }

    #[test]
    fn unbound_and_placeholder_keys() {
        let state = SimulationState::default();
        assert!(shortcut("z", &state, KeyContext::default()).is_none());
        assert!(shortcut("a", &state, KeyContext::default()).unwrap().is_empty());
    }
}
