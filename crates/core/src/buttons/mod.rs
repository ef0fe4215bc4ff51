//! Cruise button arbitration policy
//!
//! At most one synthesized button action fires per tick, by strict priority:
//!
//! 1. Cancel - every tick it is requested, not cadence-gated, mirrored on the
//!    camera and main buses so both consumers see it immediately.
//! 2. Resume - on button cadence, mirrored on both buses.
//! 3. Lane-centering toggle - on button cadence, single press on the camera
//!    bus, while the stock lane-centering reports engaged. The stock system
//!    is expected to self-disengage once it detects the override; that is an
//!    external-system assumption, not a contract this module can verify.

use crate::frame::{Bus, ButtonPress};
use crate::types::{ActuationCommand, VehicleObservation};

/// Buses a cancel or resume press is mirrored to
static MIRRORED_BUSES: [Bus; 2] = [Bus::Camera, Bus::Main];

/// Bus for the single lane-centering toggle press
static TOGGLE_BUS: [Bus; 1] = [Bus::Camera];

/// Arbitration result: the press to synthesize and its destination buses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDecision {
    pub press: ButtonPress,
    pub buses: &'static [Bus],
}

/// Pick at most one button action for this tick
///
/// # Arguments
///
/// * `command` - Intent carrying the cancel/resume requests
/// * `observation` - Carries the stock lane-centering status
/// * `buttons_due` - Button cadence decision from the scheduler
pub fn arbitrate(
    command: &ActuationCommand,
    observation: &VehicleObservation,
    buttons_due: bool,
) -> Option<ButtonDecision> {
    if command.cruise_cancel {
        Some(ButtonDecision {
            press: ButtonPress::Cancel,
            buses: &MIRRORED_BUSES,
        })
    } else if command.cruise_resume && buttons_due {
        Some(ButtonDecision {
            press: ButtonPress::Resume,
            buses: &MIRRORED_BUSES,
        })
    } else if observation.stock_acc.lane_centering_status != 0 && buttons_due {
        Some(ButtonDecision {
            press: ButtonPress::LaneCenteringToggle,
            buses: &TOGGLE_BUS,
        })
    } else {
        None
    }
}
