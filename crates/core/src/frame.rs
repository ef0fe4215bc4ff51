//! Output frame types and semantic frame descriptors
//!
//! An [`EmittedFrame`] is an opaque payload bound to a destination bus. The
//! byte layout is produced by an external [`FrameEncoder`](crate::traits::FrameEncoder);
//! this module defines the semantic descriptors handed to it, one per frame
//! class, plus the bounded batch type returned each tick.

use heapless::Vec;

use crate::lateral::{Precision, RampRate};
use crate::types::{StockAccStatus, StockButtons, StockLkasStatus};

/// Destination control bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bus {
    Main,
    Radar,
    Camera,
}

/// Maximum payload length of a single frame (CAN FD data field)
pub const MAX_PAYLOAD: usize = 64;

/// Maximum frames emitted in one tick: 2 button + 2 steering + 2 UI
pub const MAX_FRAMES_PER_TICK: usize = 8;

/// Opaque frame payload produced by the external encoder
pub type FramePayload = Vec<u8, MAX_PAYLOAD>;

/// One message unit bound for the control bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFrame {
    pub bus: Bus,
    pub payload: FramePayload,
}

/// Ordered frame batch for one tick. Order is semantically significant and
/// must be preserved by the transport sink.
pub type FrameBatch = Vec<EmittedFrame, MAX_FRAMES_PER_TICK>;

/// Synthesized cruise button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    Cancel,
    Resume,
    /// Toggle the stock lane-centering system off
    LaneCenteringToggle,
}

/// Button frame descriptor: the synthesized press over the stock snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFrameData {
    pub press: ButtonPress,
    pub stock: StockButtons,
}

/// Informational steering-assist frame, always zero-valued
///
/// Sent ahead of every active steering command to suppress the conflicting
/// stock assist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteerAssistData {
    pub curvature: f32,
    pub curvature_rate: f32,
}

/// Fields shared by both steering command shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringEnvelope {
    /// Protocol steering mode (0 = off; 1 legacy active, 2 extended active)
    pub mode: u8,
    pub ramp: RampRate,
    pub precision: Precision,
    /// Always zero; reserved by the protocol
    pub path_offset: f32,
    /// Always zero; reserved by the protocol
    pub path_angle: f32,
    /// Clamped, negated curvature command (positive = left)
    pub curvature: f32,
    /// Always zero; rate limiting is delegated to the actuator
    pub curvature_rate: f32,
}

/// Steering command frame, shaped per protocol variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteeringFrameData {
    /// Legacy shape: envelope only
    Legacy(SteeringEnvelope),
    /// Extended shape: envelope plus a monotone command epoch
    Extended { envelope: SteeringEnvelope, epoch: u64 },
}

impl SteeringFrameData {
    pub fn envelope(&self) -> &SteeringEnvelope {
        match self {
            SteeringFrameData::Legacy(envelope) => envelope,
            SteeringFrameData::Extended { envelope, .. } => envelope,
        }
    }
}

/// Lane-keeping UI frame descriptor (slow cadence class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneUiData {
    pub main_on: bool,
    pub lateral_active: bool,
    pub steer_alert: bool,
    pub stock: StockLkasStatus,
}

/// Cruise UI frame descriptor (fast cadence class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CruiseUiData {
    pub main_on: bool,
    pub lateral_active: bool,
    pub steer_alert: bool,
    pub stock: StockAccStatus,
}
