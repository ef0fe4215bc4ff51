//! Kinematic bicycle model for SITL runs
//!
//! Stands in for the production vehicle-dynamics collaborator. Speed and
//! roll are ignored: at SITL fidelity the kinematic relation between path
//! curvature and steering wheel angle is enough to exercise the ramp-rate
//! selection in the core.

use latbridge_core::{CurvatureModel, VariantParams};

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Curvature-to-steering-wheel-angle conversion from variant geometry
#[derive(Debug, Clone, Copy)]
pub struct KinematicBicycleModel {
    wheelbase_m: f32,
    steer_ratio: f32,
}

impl KinematicBicycleModel {
    pub fn new(wheelbase_m: f32, steer_ratio: f32) -> Self {
        Self {
            wheelbase_m,
            steer_ratio,
        }
    }

    pub fn from_params(params: &VariantParams) -> Self {
        Self::new(params.wheelbase_m, params.steer_ratio)
    }
}

impl CurvatureModel for KinematicBicycleModel {
    fn steer_from_curvature(&self, curvature: f32, _speed_mps: f32, _roll: f32) -> f32 {
        let wheel_angle_rad = (self.wheelbase_m * curvature).atan();
        wheel_angle_rad * self.steer_ratio * RAD_TO_DEG
    }
}
