//! Per-variant parameter table
//!
//! Geometry, protocol shape, and cadence constants for each supported vehicle
//! variant. The table is immutable and selected exactly once at construction
//! via a fingerprint lookup; the hot path never branches on vehicle identity.

use crate::error::ConfigError;

/// Maximum magnitude of the outgoing curvature command (1/m)
pub const CURVATURE_MAX: f32 = 0.02;

/// Reference control loop rate (Hz)
pub const LOOP_RATE_HZ: u32 = 100;

/// Steering command wire shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Legacy shape: no command epoch
    Legacy,
    /// Extended shape: carries a monotone command epoch
    Extended,
}

/// Per-class emission intervals, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceConfig {
    pub buttons: u64,
    pub steering: u64,
    pub ui_fast: u64,
    pub ui_slow: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        // Reference cadences at the 100 Hz loop rate:
        // buttons 10 Hz, steering 20 Hz, cruise UI 20 Hz, lane UI 2 Hz
        Self {
            buttons: 10,
            steering: 5,
            ui_fast: 5,
            ui_slow: 50,
        }
    }
}

/// Immutable per-variant configuration record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantParams {
    pub name: &'static str,
    pub wheelbase_m: f32,
    pub steer_ratio: f32,
    pub mass_kg: f32,
    pub protocol: Protocol,
    pub cadence: CadenceConfig,
    pub curvature_max: f32,
}

const DEFAULT_CADENCE: CadenceConfig = CadenceConfig {
    buttons: 10,
    steering: 5,
    ui_fast: 5,
    ui_slow: 50,
};

const fn variant(
    name: &'static str,
    wheelbase_m: f32,
    steer_ratio: f32,
    mass_kg: f32,
    protocol: Protocol,
) -> VariantParams {
    VariantParams {
        name,
        wheelbase_m,
        steer_ratio,
        mass_kg,
        protocol,
        cadence: DEFAULT_CADENCE,
        curvature_max: CURVATURE_MAX,
    }
}

/// Supported vehicle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleVariant {
    BroncoSportMk1,
    EdgeMk25,
    EscapeMk4,
    ExplorerMk6,
    FocusMk4,
    MaverickMk1,
    F150Mk14,
    F150LightningMk1,
    MustangMachEMk1,
}

impl VehicleVariant {
    /// Look up a variant from its fingerprint string
    ///
    /// This is the only fallible step of synthesizer construction; unknown
    /// fingerprints are rejected before the control loop starts.
    pub fn from_fingerprint(fingerprint: &str) -> Result<Self, ConfigError> {
        match fingerprint {
            "BRONCO_SPORT_MK1" => Ok(Self::BroncoSportMk1),
            "EDGE_MK2_5" => Ok(Self::EdgeMk25),
            "ESCAPE_MK4" => Ok(Self::EscapeMk4),
            "EXPLORER_MK6" => Ok(Self::ExplorerMk6),
            "FOCUS_MK4" => Ok(Self::FocusMk4),
            "MAVERICK_MK1" => Ok(Self::MaverickMk1),
            "F_150_MK14" => Ok(Self::F150Mk14),
            "F_150_LIGHTNING_MK1" => Ok(Self::F150LightningMk1),
            "MUSTANG_MACH_E_MK1" => Ok(Self::MustangMachEMk1),
            _ => Err(ConfigError::UnknownVariant),
        }
    }

    /// Parameter record for this variant
    pub fn params(&self) -> &'static VariantParams {
        match self {
            Self::BroncoSportMk1 => &BRONCO_SPORT_MK1,
            Self::EdgeMk25 => &EDGE_MK2_5,
            Self::EscapeMk4 => &ESCAPE_MK4,
            Self::ExplorerMk6 => &EXPLORER_MK6,
            Self::FocusMk4 => &FOCUS_MK4,
            Self::MaverickMk1 => &MAVERICK_MK1,
            Self::F150Mk14 => &F_150_MK14,
            Self::F150LightningMk1 => &F_150_LIGHTNING_MK1,
            Self::MustangMachEMk1 => &MUSTANG_MACH_E_MK1,
        }
    }
}

static BRONCO_SPORT_MK1: VariantParams =
    variant("BRONCO_SPORT_MK1", 2.67, 17.7, 1625.0, Protocol::Legacy);
static EDGE_MK2_5: VariantParams = variant("EDGE_MK2_5", 2.85, 15.0, 1900.0, Protocol::Legacy);
static ESCAPE_MK4: VariantParams = variant("ESCAPE_MK4", 2.71, 17.7, 1750.0, Protocol::Legacy);
static EXPLORER_MK6: VariantParams = variant("EXPLORER_MK6", 3.025, 16.8, 2050.0, Protocol::Legacy);
static FOCUS_MK4: VariantParams = variant("FOCUS_MK4", 2.7, 13.8, 1350.0, Protocol::Legacy);
static MAVERICK_MK1: VariantParams = variant("MAVERICK_MK1", 3.076, 16.2, 1650.0, Protocol::Legacy);
static F_150_MK14: VariantParams = variant("F_150_MK14", 3.5, 18.0, 2100.0, Protocol::Extended);
static F_150_LIGHTNING_MK1: VariantParams =
    variant("F_150_LIGHTNING_MK1", 3.696, 18.0, 2750.0, Protocol::Extended);
static MUSTANG_MACH_E_MK1: VariantParams =
    variant("MUSTANG_MACH_E_MK1", 2.985, 17.0, 2100.0, Protocol::Extended);
