//! Vehicle dynamics model interface

/// Curvature-to-steering-angle conversion
///
/// Implemented by the external vehicle-dynamics collaborator. The core only
/// uses the result to size the expected steering change when selecting a
/// ramp rate; it never closes a loop on it.
pub trait CurvatureModel {
    /// Expected steering wheel angle (degrees) for a commanded curvature
    ///
    /// # Arguments
    ///
    /// * `curvature` - Path curvature (1/m), outgoing sign convention
    /// * `speed_mps` - Current longitudinal speed (m/s)
    /// * `roll` - Road roll (radians); the synthesizer holds this at 0.0
    fn steer_from_curvature(&self, curvature: f32, speed_mps: f32, roll: f32) -> f32;
}
