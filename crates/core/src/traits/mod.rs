//! External collaborator interfaces
//!
//! The core never touches bytes or vehicle dynamics directly. Byte-level
//! frame encoding and the curvature-to-steer-angle conversion are injected
//! through these traits; production wiring and the SITL harness provide the
//! implementations.

pub mod encoder;
pub mod model;

pub use encoder::FrameEncoder;
pub use model::CurvatureModel;
