//! latbridge_core - Pure no_std lateral/cruise command synthesis
//!
//! This crate turns a high-level driving-assistance intent (target curvature,
//! lateral activation, HUD alert, cruise button intents) into the ordered
//! batch of control-bus frames expected by the vehicle's actuation hardware,
//! once per control tick.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Host-testable**: no_std in production, std only under test
//! - **Trait abstractions**: byte-level frame encoding and the
//!   curvature-to-steer-angle vehicle model are injected via traits
//!
//! # Modules
//!
//! - [`types`]: Per-tick input types (ActuationCommand, VehicleObservation)
//! - [`frame`]: Output frame types and semantic frame descriptors
//! - [`params`]: Per-variant parameter table (geometry, protocol, cadences)
//! - [`scheduler`]: Tick counter and per-class cadence decisions
//! - [`lateral`]: Steering command envelope (clamp, ramp rate, framing)
//! - [`buttons`]: Cruise button arbitration policy
//! - [`ui`]: HUD state debouncing and UI frame gating
//! - [`synthesizer`]: Orchestration root, one call per control tick
//! - [`traits`]: External collaborator interfaces (encoder, vehicle model)
//! - [`error`]: Construction-time error types

#![cfg_attr(not(test), no_std)]

pub mod buttons;
pub mod error;
pub mod frame;
pub mod lateral;
pub mod params;
pub mod scheduler;
pub mod synthesizer;
pub mod traits;
pub mod types;
pub mod ui;

pub use error::ConfigError;
pub use frame::{Bus, EmittedFrame, FrameBatch, FramePayload};
pub use params::{VariantParams, VehicleVariant};
pub use synthesizer::{CommandSynthesizer, ControllerState};
pub use traits::{CurvatureModel, FrameEncoder};
pub use types::{ActuationCommand, HudAlert, VehicleObservation};
