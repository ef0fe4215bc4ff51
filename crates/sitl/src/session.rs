//! Scripted synthesizer sessions
//!
//! A session owns one synthesizer and drives it tick by tick from a script
//! closure, the way the production real-time loop would. Pacing is optional:
//! tests run as fast as possible, the loopback binary can hold the reference
//! 100 Hz period. The session only observes tick duration; deadline
//! enforcement belongs to a real enclosing loop.

use std::time::{Duration, Instant};

use latbridge_core::{ActuationCommand, CommandSynthesizer, VehicleObservation, VehicleVariant};
use log::{debug, trace};

use crate::encoder::{
    self, SitlEncoder, BUTTON_ID, CRUISE_UI_ID, LANE_UI_ID, STEERING_EXTENDED_ID,
    STEERING_LEGACY_ID, STEER_ASSIST_ID,
};
use crate::error::HarnessError;
use crate::model::KinematicBicycleModel;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Vehicle variant fingerprint
    pub fingerprint: String,
    /// Number of ticks to run
    pub ticks: u64,
    /// Loop rate used when pacing in real time
    pub rate_hz: u32,
    /// Sleep between ticks to hold the loop period
    pub realtime: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fingerprint: "ESCAPE_MK4".to_string(),
            ticks: 1000,
            rate_hz: latbridge_core::params::LOOP_RATE_HZ,
            realtime: false,
        }
    }
}

/// Per-class frame counters and timing observed over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub button_frames: u64,
    pub steering_frames: u64,
    pub assist_frames: u64,
    pub cruise_ui_frames: u64,
    pub lane_ui_frames: u64,
    /// Longest observed tick, in microseconds
    pub max_tick_us: u64,
}

impl SessionStats {
    pub fn total_frames(&self) -> u64 {
        self.button_frames
            + self.steering_frames
            + self.assist_frames
            + self.cruise_ui_frames
            + self.lane_ui_frames
    }
}

/// One scripted SITL session around a synthesizer
pub struct SitlSession {
    config: SessionConfig,
    synthesizer: CommandSynthesizer<SitlEncoder, KinematicBicycleModel>,
}

impl SitlSession {
    pub fn new(config: SessionConfig) -> Result<Self, HarnessError> {
        let variant = VehicleVariant::from_fingerprint(&config.fingerprint)?;
        let model = KinematicBicycleModel::from_params(variant.params());
        let synthesizer = CommandSynthesizer::for_variant(variant, SitlEncoder::new(), model);
        Ok(Self {
            config,
            synthesizer,
        })
    }

    /// Run the session, pulling inputs from the script for each tick
    ///
    /// The script receives the tick number and returns the intent and
    /// observation the estimator would have produced for it.
    pub fn run<F>(&mut self, mut script: F) -> SessionStats
    where
        F: FnMut(u64) -> (ActuationCommand, VehicleObservation),
    {
        let period = Duration::from_micros(1_000_000 / u64::from(self.config.rate_hz));
        let mut stats = SessionStats::default();
        let mut next_deadline = Instant::now() + period;

        for tick in 0..self.config.ticks {
            let (command, observation) = script(tick);
            let started = Instant::now();
            let (echo, frames) = self.synthesizer.update(&command, &observation);
            let elapsed = started.elapsed().as_micros() as u64;
            stats.max_tick_us = stats.max_tick_us.max(elapsed);
            stats.ticks += 1;

            for frame in &frames {
                match encoder::frame_id(frame) {
                    BUTTON_ID => stats.button_frames += 1,
                    STEER_ASSIST_ID => stats.assist_frames += 1,
                    STEERING_LEGACY_ID | STEERING_EXTENDED_ID => stats.steering_frames += 1,
                    CRUISE_UI_ID => stats.cruise_ui_frames += 1,
                    LANE_UI_ID => stats.lane_ui_frames += 1,
                    id => trace!("tick {tick}: unclassified frame id {id:#05x}"),
                }
            }

            if !frames.is_empty() {
                debug!(
                    "tick {tick}: {} frames, applied curvature {:.5}",
                    frames.len(),
                    echo.curvature
                );
            }

            if self.config.realtime {
                let now = Instant::now();
                if next_deadline > now {
                    std::thread::sleep(next_deadline - now);
                }
                next_deadline += period;
            }
        }

        stats
    }
}
