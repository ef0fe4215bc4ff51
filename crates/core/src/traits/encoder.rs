//! Byte-level frame encoder interface

use crate::frame::{
    ButtonFrameData, CruiseUiData, FramePayload, LaneUiData, SteerAssistData, SteeringFrameData,
};

/// Byte-level encoder for outgoing frames
///
/// One method per frame class. Implementations own the wire layout; the core
/// decides which frames fire, in what order, and on which bus. Encoding is
/// infallible: every semantic descriptor the core produces has a valid
/// encoding by construction.
pub trait FrameEncoder {
    /// Encode a synthesized button press over the stock snapshot
    fn encode_button(&mut self, data: &ButtonFrameData) -> FramePayload;

    /// Encode the informational zero-valued steering-assist frame
    fn encode_steer_assist(&mut self, data: &SteerAssistData) -> FramePayload;

    /// Encode the active steering command (legacy or extended shape)
    fn encode_steering(&mut self, data: &SteeringFrameData) -> FramePayload;

    /// Encode the lane-keeping UI frame
    fn encode_lane_ui(&mut self, data: &LaneUiData) -> FramePayload;

    /// Encode the cruise UI frame
    fn encode_cruise_ui(&mut self, data: &CruiseUiData) -> FramePayload;
}
