//! Deterministic byte-level frame encoder for SITL runs
//!
//! Stands in for the production bus encoder. Every payload starts with a
//! 16-bit little-endian message id so tests and the loopback binary can
//! classify and decode what the core emitted.
//!
//! Layouts (after the 2-byte id):
//!
//! - Button: press bits, stock button bits, stock counter
//! - Steer assist: curvature i16 (2e-5 1/m), curvature rate i16 (1e-3)
//! - Steering: packed mode/ramp/precision byte, curvature i16 (2e-5 1/m),
//!   path offset i16, path angle i16, curvature rate i16; the extended shape
//!   appends the command epoch masked to its 4-bit wire counter
//! - UI frames: flag byte plus the raw stock status words

use latbridge_core::frame::{
    ButtonFrameData, ButtonPress, CruiseUiData, EmittedFrame, FramePayload, LaneUiData,
    SteerAssistData, SteeringEnvelope, SteeringFrameData,
};
use latbridge_core::FrameEncoder;

/// Message ids, one per frame class
pub const BUTTON_ID: u16 = 0x083;
pub const STEER_ASSIST_ID: u16 = 0x3CA;
pub const STEERING_LEGACY_ID: u16 = 0x3D3;
pub const STEERING_EXTENDED_ID: u16 = 0x3D6;
pub const CRUISE_UI_ID: u16 = 0x18A;
pub const LANE_UI_ID: u16 = 0x3D8;

/// Curvature wire resolution (1/m per count)
pub const CURVATURE_SCALE: f32 = 2e-5;

/// Curvature rate wire resolution (1/m/s per count)
const CURVATURE_RATE_SCALE: f32 = 1e-3;

/// Path offset / path angle wire resolution
const PATH_SCALE: f32 = 1e-2;

fn scaled_i16(value: f32, scale: f32) -> i16 {
    let counts = value / scale;
    counts.clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

struct PayloadWriter {
    payload: FramePayload,
}

impl PayloadWriter {
    fn new(id: u16) -> Self {
        let mut payload = FramePayload::new();
        let _ = payload.extend_from_slice(&id.to_le_bytes());
        Self { payload }
    }

    fn u8(&mut self, value: u8) -> &mut Self {
        let _ = self.payload.push(value);
        self
    }

    fn i16(&mut self, value: i16) -> &mut Self {
        let _ = self.payload.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn u16(&mut self, value: u16) -> &mut Self {
        let _ = self.payload.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn finish(self) -> FramePayload {
        self.payload
    }
}

/// Byte-level encoder used by SITL sessions and integration tests
#[derive(Debug, Default)]
pub struct SitlEncoder {
    frames_encoded: u64,
}

impl SitlEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames encoded over the session
    pub fn frames_encoded(&self) -> u64 {
        self.frames_encoded
    }

    fn write_envelope(writer: &mut PayloadWriter, envelope: &SteeringEnvelope) {
        let packed =
            envelope.mode | ((envelope.ramp as u8) << 2) | ((envelope.precision as u8) << 4);
        writer
            .u8(packed)
            .i16(scaled_i16(envelope.curvature, CURVATURE_SCALE))
            .i16(scaled_i16(envelope.path_offset, PATH_SCALE))
            .i16(scaled_i16(envelope.path_angle, PATH_SCALE))
            .i16(scaled_i16(envelope.curvature_rate, CURVATURE_RATE_SCALE));
    }
}

impl FrameEncoder for SitlEncoder {
    fn encode_button(&mut self, data: &ButtonFrameData) -> FramePayload {
        self.frames_encoded += 1;
        let press = match data.press {
            ButtonPress::Cancel => 0x01,
            ButtonPress::Resume => 0x02,
            ButtonPress::LaneCenteringToggle => 0x04,
        };
        let stock = &data.stock;
        let stock_bits = (stock.main_cruise as u8)
            | ((stock.set_plus as u8) << 1)
            | ((stock.set_minus as u8) << 2)
            | ((stock.gap_increase as u8) << 3)
            | ((stock.gap_decrease as u8) << 4)
            | ((stock.lka_button as u8) << 5);
        let mut writer = PayloadWriter::new(BUTTON_ID);
        writer.u8(press).u8(stock_bits).u8(stock.counter);
        writer.finish()
    }

    fn encode_steer_assist(&mut self, data: &SteerAssistData) -> FramePayload {
        self.frames_encoded += 1;
        let mut writer = PayloadWriter::new(STEER_ASSIST_ID);
        writer
            .i16(scaled_i16(data.curvature, CURVATURE_SCALE))
            .i16(scaled_i16(data.curvature_rate, CURVATURE_RATE_SCALE));
        writer.finish()
    }

    fn encode_steering(&mut self, data: &SteeringFrameData) -> FramePayload {
        self.frames_encoded += 1;
        match data {
            SteeringFrameData::Legacy(envelope) => {
                let mut writer = PayloadWriter::new(STEERING_LEGACY_ID);
                Self::write_envelope(&mut writer, envelope);
                writer.finish()
            }
            SteeringFrameData::Extended { envelope, epoch } => {
                let mut writer = PayloadWriter::new(STEERING_EXTENDED_ID);
                Self::write_envelope(&mut writer, envelope);
                // Wire counter is 4 bits wide
                writer.u8((epoch & 0x0F) as u8);
                writer.finish()
            }
        }
    }

    fn encode_lane_ui(&mut self, data: &LaneUiData) -> FramePayload {
        self.frames_encoded += 1;
        let flags = (data.main_on as u8)
            | ((data.lateral_active as u8) << 1)
            | ((data.steer_alert as u8) << 2);
        let mut writer = PayloadWriter::new(LANE_UI_ID);
        writer.u8(flags).u16(data.stock.raw);
        writer.finish()
    }

    fn encode_cruise_ui(&mut self, data: &CruiseUiData) -> FramePayload {
        self.frames_encoded += 1;
        let flags = (data.main_on as u8)
            | ((data.lateral_active as u8) << 1)
            | ((data.steer_alert as u8) << 2);
        let mut writer = PayloadWriter::new(CRUISE_UI_ID);
        writer
            .u8(flags)
            .u8(data.stock.lane_centering_status)
            .u16(data.stock.raw);
        writer.finish()
    }
}

/// Message id of an emitted frame
pub fn frame_id(frame: &EmittedFrame) -> u16 {
    u16::from_le_bytes([frame.payload[0], frame.payload[1]])
}

/// Decode the commanded curvature from a steering frame payload
pub fn decode_steering_curvature(frame: &EmittedFrame) -> f32 {
    let counts = i16::from_le_bytes([frame.payload[3], frame.payload[4]]);
    counts as f32 * CURVATURE_SCALE
}

/// Decode the packed mode/ramp/precision byte from a steering frame payload
pub fn decode_steering_flags(frame: &EmittedFrame) -> (u8, u8, u8) {
    let packed = frame.payload[2];
    (packed & 0x03, (packed >> 2) & 0x03, (packed >> 4) & 0x01)
}

#[cfg(test)]
mod tests {
    use super::*;
    use latbridge_core::frame::Bus;
    use latbridge_core::lateral::{Precision, RampRate};
    use latbridge_core::types::StockButtons;

    fn frame(payload: FramePayload) -> EmittedFrame {
        EmittedFrame {
            bus: Bus::Main,
            payload,
        }
    }

    #[test]
    fn test_button_payload_layout() {
        let mut encoder = SitlEncoder::new();
        let payload = encoder.encode_button(&ButtonFrameData {
            press: ButtonPress::Resume,
            stock: StockButtons {
                main_cruise: true,
                counter: 9,
                ..Default::default()
            },
        });
        let f = frame(payload);
        assert_eq!(frame_id(&f), BUTTON_ID);
        assert_eq!(f.payload[2], 0x02);
        assert_eq!(f.payload[3], 0x01);
        assert_eq!(f.payload[4], 9);
    }

    #[test]
    fn test_steering_curvature_round_trip_resolution() {
        let mut encoder = SitlEncoder::new();
        let envelope = SteeringEnvelope {
            mode: 1,
            ramp: RampRate::Fast,
            precision: Precision::Precise,
            path_offset: 0.0,
            path_angle: 0.0,
            curvature: -0.02,
            curvature_rate: 0.0,
        };
        let payload = encoder.encode_steering(&SteeringFrameData::Legacy(envelope));
        let f = frame(payload);
        assert_eq!(frame_id(&f), STEERING_LEGACY_ID);
        assert!((decode_steering_curvature(&f) - (-0.02)).abs() < CURVATURE_SCALE);
        assert_eq!(decode_steering_flags(&f), (1, RampRate::Fast as u8, 1));
    }

    #[test]
    fn test_extended_steering_masks_epoch_to_wire_counter() {
        let mut encoder = SitlEncoder::new();
        let envelope = SteeringEnvelope {
            mode: 2,
            ramp: RampRate::Slow,
            precision: Precision::Precise,
            path_offset: 0.0,
            path_angle: 0.0,
            curvature: 0.0,
            curvature_rate: 0.0,
        };
        let payload = encoder.encode_steering(&SteeringFrameData::Extended {
            envelope,
            epoch: 0x1F,
        });
        let f = frame(payload);
        assert_eq!(frame_id(&f), STEERING_EXTENDED_ID);
        assert_eq!(*f.payload.last().unwrap(), 0x0F);
    }

    #[test]
    fn test_encoder_counts_frames() {
        let mut encoder = SitlEncoder::new();
        encoder.encode_steer_assist(&SteerAssistData::default());
        encoder.encode_steer_assist(&SteerAssistData::default());
        assert_eq!(encoder.frames_encoded(), 2);
    }
}
