//! HUD state debouncing and UI frame gating
//!
//! Three observables drive the cluster UI: main cruise availability, lateral
//! activation, and the steer-alert flag. Two independently gated frame
//! classes repeat them on the bus: the fast cruise UI and the slow lane UI.
//! Each class fires when its cadence is due or when any observable changed
//! since the previous tick; a single edge may fire both classes at once.
//!
//! The snapshot is refreshed after every evaluation, whether or not a frame
//! was emitted, so an edge is reported exactly once per class.

use crate::types::{ActuationCommand, VehicleObservation};

/// HUD-relevant observables for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiSnapshot {
    pub main_on: bool,
    pub lateral_active: bool,
    pub steer_alert: bool,
}

impl UiSnapshot {
    /// Capture the observables for this tick
    pub fn capture(command: &ActuationCommand, observation: &VehicleObservation) -> Self {
        Self {
            main_on: observation.cruise_main_on,
            lateral_active: command.lateral_active,
            steer_alert: command.hud_alert.is_steer_alert(),
        }
    }
}

/// Emission decision for the two UI classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiDecision {
    pub fast: bool,
    pub slow: bool,
}

/// Decide which UI classes fire this tick
pub fn evaluate(
    current: &UiSnapshot,
    previous: &UiSnapshot,
    fast_due: bool,
    slow_due: bool,
) -> UiDecision {
    let changed = current != previous;
    UiDecision {
        fast: fast_due || changed,
        slow: slow_due || changed,
    }
}
