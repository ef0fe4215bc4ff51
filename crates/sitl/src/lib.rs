//! latbridge_sitl - Software-in-the-loop harness for the command synthesizer
//!
//! Provides host-side implementations of the collaborators the core only
//! knows as traits (byte-level frame encoder, curvature-to-steer-angle
//! model), plus a scripted session runner that drives a synthesizer at the
//! reference 100 Hz loop rate.

pub mod encoder;
pub mod error;
pub mod model;
pub mod session;

pub use encoder::SitlEncoder;
pub use error::HarnessError;
pub use model::KinematicBicycleModel;
pub use session::{SessionConfig, SessionStats, SitlSession};
