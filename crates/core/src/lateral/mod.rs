//! Steering command envelope builder
//!
//! Turns the requested curvature into the pair of frames the steering rack
//! expects: an informational zero-valued assist frame (suppresses the
//! conflicting stock assist) followed by the active command frame, shaped per
//! protocol variant.
//!
//! The builder clamps and negates the curvature (the outgoing convention is
//! positive = left, opposite of the input), selects a ramp rate from the
//! expected steering angle change, and stamps the extended shape with the
//! monotone command epoch. There is no recoverable error path here; apart
//! from the curvature clamp, upstream values propagate unmodified.

use libm::fabsf;

use crate::frame::{SteerAssistData, SteeringEnvelope, SteeringFrameData};
use crate::params::{Protocol, VariantParams};
use crate::traits::CurvatureModel;
use crate::types::{ActuationCommand, VehicleObservation};

/// Discrete rate-of-change class for the commanded curvature
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RampRate {
    Slow = 0,
    Medium = 1,
    Fast = 2,
    Immediate = 3,
}

impl RampRate {
    /// Select a ramp rate from the expected steering angle change (degrees)
    ///
    /// Breakpoints are 2.0, 4.0 and 6.0 degrees. Equality at a breakpoint
    /// resolves to the slower bucket: exactly 4.0 degrees is `Medium`.
    pub fn from_steer_change(steer_change_deg: f32) -> Self {
        if steer_change_deg <= 2.0 {
            RampRate::Slow
        } else if steer_change_deg <= 4.0 {
            RampRate::Medium
        } else if steer_change_deg <= 6.0 {
            RampRate::Fast
        } else {
            RampRate::Immediate
        }
    }
}

/// Command precision class
///
/// The stock system always requests `Comfortable`; this system always
/// requests `Precise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Comfortable = 0,
    Precise = 1,
}

/// Result of building one steering command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LateralCommand {
    /// Clamped, negated curvature actually commanded (positive = left)
    pub apply_curvature: f32,
    /// Informational assist frame, emitted first
    pub assist: SteerAssistData,
    /// Active command frame, emitted second
    pub steering: SteeringFrameData,
}

/// Steering command envelope builder
///
/// Holds the variant parameters; the protocol shape is fixed at construction
/// and dispatched here rather than checked per tick elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct LateralCommandBuilder {
    params: &'static VariantParams,
}

impl LateralCommandBuilder {
    pub fn new(params: &'static VariantParams) -> Self {
        Self { params }
    }

    /// Build the steering frames for this tick
    ///
    /// # Arguments
    ///
    /// * `model` - External curvature-to-steer-angle conversion
    /// * `command` - Requested intent (input sign convention)
    /// * `observation` - Measured vehicle state
    /// * `epoch` - Monotone command epoch (extended shape only)
    pub fn build<M: CurvatureModel>(
        &self,
        model: &M,
        command: &ActuationCommand,
        observation: &VehicleObservation,
        epoch: u64,
    ) -> LateralCommand {
        let max = self.params.curvature_max;
        let apply_curvature = if command.lateral_active {
            // Outgoing convention: positive = left
            -command.curvature.clamp(-max, max)
        } else {
            0.0
        };

        // Expected angle from the pre-clamp request, speed held, roll at zero
        let expected_deg = model.steer_from_curvature(-command.curvature, observation.speed_mps, 0.0);
        let steer_change = fabsf(observation.steering_angle_deg - expected_deg);
        let ramp = RampRate::from_steer_change(steer_change);

        let mode = match (self.params.protocol, command.lateral_active) {
            (_, false) => 0,
            (Protocol::Legacy, true) => 1,
            (Protocol::Extended, true) => 2,
        };

        let envelope = SteeringEnvelope {
            mode,
            ramp,
            precision: Precision::Precise,
            path_offset: 0.0,
            path_angle: 0.0,
            curvature: apply_curvature,
            curvature_rate: 0.0,
        };

        let steering = match self.params.protocol {
            Protocol::Legacy => SteeringFrameData::Legacy(envelope),
            Protocol::Extended => SteeringFrameData::Extended { envelope, epoch },
        };

        LateralCommand {
            apply_curvature,
            assist: SteerAssistData::default(),
            steering,
        }
    }
}
