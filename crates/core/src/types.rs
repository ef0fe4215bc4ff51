//! Per-tick input types
//!
//! These are supplied by the external estimation/perception collaborator once
//! per control tick. Raw stock snapshots are carried opaquely so that signals
//! this system does not own ride through into outgoing frames unchanged.

/// HUD alert kind requested by the upstream planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudAlert {
    #[default]
    None,
    /// Driver must take over steering
    SteerRequired,
    /// Lane departure warning
    LaneDeparture,
}

impl HudAlert {
    /// True for alerts that light the steering warning on the cluster
    #[inline]
    pub fn is_steer_alert(&self) -> bool {
        matches!(self, HudAlert::SteerRequired | HudAlert::LaneDeparture)
    }
}

/// High-level actuation intent for one control tick
///
/// Curvature follows the input convention: signed 1/m, positive = right.
/// The outgoing command uses the opposite sign convention (positive = left);
/// the lateral builder performs the negation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActuationCommand {
    /// Requested path curvature (1/m)
    pub curvature: f32,
    /// Lateral control is engaged
    pub lateral_active: bool,
    /// Cancel cruise control this tick
    pub cruise_cancel: bool,
    /// Resume cruise control this tick
    pub cruise_resume: bool,
    /// HUD alert to display
    pub hud_alert: HudAlert,
}

/// Raw stock cruise-button snapshot
///
/// Captured from the stock button message and echoed into outgoing button
/// frames so that pressed-state bits this system does not synthesize are
/// preserved on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockButtons {
    pub main_cruise: bool,
    pub set_plus: bool,
    pub set_minus: bool,
    pub gap_increase: bool,
    pub gap_decrease: bool,
    pub lka_button: bool,
    /// Rolling message counter from the stock frame
    pub counter: u8,
}

/// Raw stock ACC / lane-centering status snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockAccStatus {
    /// Stock lane-centering state (0 = off). Non-zero triggers the
    /// toggle-off button policy.
    pub lane_centering_status: u8,
    /// Remaining status word, passed through into the cruise UI frame
    pub raw: u16,
}

/// Raw stock LKAS status snapshot, passed through into the lane UI frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockLkasStatus {
    pub raw: u16,
}

/// Vehicle state observed this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleObservation {
    /// Longitudinal speed (m/s)
    pub speed_mps: f32,
    /// Measured steering wheel angle (degrees)
    pub steering_angle_deg: f32,
    /// Main cruise switch is on (cruise available)
    pub cruise_main_on: bool,
    pub stock_buttons: StockButtons,
    pub stock_acc: StockAccStatus,
    pub stock_lkas: StockLkasStatus,
}
