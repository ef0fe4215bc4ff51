//! Orchestration root: one call per control tick
//!
//! [`CommandSynthesizer::update`] runs the sub-policies in fixed order each
//! tick and returns the echoed actuation output plus the ordered frame batch:
//!
//! 1. Cruise button arbitration
//! 2. Steering envelope (on steering cadence): assist frame, then command
//! 3. Fast UI class, then slow UI class
//! 4. State snapshot, echo, tick increment
//!
//! The synthesizer owns all mutable session state. One instance drives one
//! vehicle session and is invoked serially by the enclosing real-time loop;
//! it never blocks, never raises on per-tick data, and always returns a
//! (possibly empty) batch so loop cadence is preserved.

use crate::buttons;
use crate::error::ConfigError;
use crate::frame::{
    Bus, ButtonFrameData, CruiseUiData, EmittedFrame, FrameBatch, LaneUiData,
};
use crate::lateral::LateralCommandBuilder;
use crate::params::{VariantParams, VehicleVariant};
use crate::scheduler::TickScheduler;
use crate::traits::{CurvatureModel, FrameEncoder};
use crate::types::{ActuationCommand, VehicleObservation};
use crate::ui::{self, UiSnapshot};

/// Session-scoped mutable state
///
/// Created zeroed at construction, mutated only by the synthesizer at the
/// end of each tick, destroyed with the session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerState {
    /// Observables as of the end of the previous tick
    pub ui: UiSnapshot,
    /// Last curvature actually commanded (outgoing sign convention)
    pub apply_curvature: f32,
}

/// Per-tick command synthesizer for one vehicle session
pub struct CommandSynthesizer<E, M> {
    params: &'static VariantParams,
    encoder: E,
    model: M,
    lateral: LateralCommandBuilder,
    scheduler: TickScheduler,
    state: ControllerState,
}

impl<E: FrameEncoder, M: CurvatureModel> CommandSynthesizer<E, M> {
    /// Build a synthesizer for the fingerprinted variant
    ///
    /// The fingerprint lookup is the only fallible step; an unknown variant
    /// is rejected here, before the control loop starts.
    pub fn new(fingerprint: &str, encoder: E, model: M) -> Result<Self, ConfigError> {
        let variant = VehicleVariant::from_fingerprint(fingerprint)?;
        Ok(Self::for_variant(variant, encoder, model))
    }

    /// Build a synthesizer for an already-resolved variant
    pub fn for_variant(variant: VehicleVariant, encoder: E, model: M) -> Self {
        let params = variant.params();
        Self {
            params,
            encoder,
            model,
            lateral: LateralCommandBuilder::new(params),
            scheduler: TickScheduler::new(params.cadence),
            state: ControllerState::default(),
        }
    }

    /// Variant parameters this synthesizer was built with
    pub fn params(&self) -> &'static VariantParams {
        self.params
    }

    /// Current session state (last snapshots and applied curvature)
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Current tick number
    pub fn tick(&self) -> u64 {
        self.scheduler.tick()
    }

    /// Synthesize the frame batch for one control tick
    ///
    /// Returns the echoed actuation output (input with the curvature
    /// overwritten by the last applied value) and the ordered frames.
    pub fn update(
        &mut self,
        command: &ActuationCommand,
        observation: &VehicleObservation,
    ) -> (ActuationCommand, FrameBatch) {
        let mut frames = FrameBatch::new();

        // Batch capacity covers the worst case of every class firing at
        // once, so these pushes cannot fail.
        if let Some(decision) = buttons::arbitrate(command, observation, self.scheduler.buttons_due())
        {
            let data = ButtonFrameData {
                press: decision.press,
                stock: observation.stock_buttons,
            };
            for &bus in decision.buses {
                let payload = self.encoder.encode_button(&data);
                let _ = frames.push(EmittedFrame { bus, payload });
            }
        }

        if self.scheduler.steering_due() {
            let lateral = self.lateral.build(
                &self.model,
                command,
                observation,
                self.scheduler.steering_epoch(),
            );
            let assist = self.encoder.encode_steer_assist(&lateral.assist);
            let _ = frames.push(EmittedFrame {
                bus: Bus::Main,
                payload: assist,
            });
            let steering = self.encoder.encode_steering(&lateral.steering);
            let _ = frames.push(EmittedFrame {
                bus: Bus::Main,
                payload: steering,
            });
            self.state.apply_curvature = lateral.apply_curvature;
        }

        let snapshot = UiSnapshot::capture(command, observation);
        let decision = ui::evaluate(
            &snapshot,
            &self.state.ui,
            self.scheduler.ui_fast_due(),
            self.scheduler.ui_slow_due(),
        );
        if decision.fast {
            let payload = self.encoder.encode_cruise_ui(&CruiseUiData {
                main_on: snapshot.main_on,
                lateral_active: snapshot.lateral_active,
                steer_alert: snapshot.steer_alert,
                stock: observation.stock_acc,
            });
            let _ = frames.push(EmittedFrame {
                bus: Bus::Main,
                payload,
            });
        }
        if decision.slow {
            let payload = self.encoder.encode_lane_ui(&LaneUiData {
                main_on: snapshot.main_on,
                lateral_active: snapshot.lateral_active,
                steer_alert: snapshot.steer_alert,
                stock: observation.stock_lkas,
            });
            let _ = frames.push(EmittedFrame {
                bus: Bus::Main,
                payload,
            });
        }
        self.state.ui = snapshot;

        let mut echo = *command;
        echo.curvature = self.state.apply_curvature;

        self.scheduler.advance();
        (echo, frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{ButtonPress, SteeringFrameData};
    use crate::params::CURVATURE_MAX;
    use crate::types::{HudAlert, StockAccStatus};

    /// Encoder tagging each payload with a class byte, for order assertions
    struct TagEncoder;

    const TAG_BUTTON: u8 = 1;
    const TAG_ASSIST: u8 = 2;
    const TAG_STEERING: u8 = 3;
    const TAG_CRUISE_UI: u8 = 4;
    const TAG_LANE_UI: u8 = 5;

    fn tagged(tag: u8, detail: u8) -> crate::frame::FramePayload {
        let mut payload = crate::frame::FramePayload::new();
        let _ = payload.push(tag);
        let _ = payload.push(detail);
        payload
    }

    impl FrameEncoder for TagEncoder {
        fn encode_button(&mut self, data: &ButtonFrameData) -> crate::frame::FramePayload {
            tagged(TAG_BUTTON, data.press as u8)
        }

        fn encode_steer_assist(
            &mut self,
            _data: &crate::frame::SteerAssistData,
        ) -> crate::frame::FramePayload {
            tagged(TAG_ASSIST, 0)
        }

        fn encode_steering(&mut self, data: &SteeringFrameData) -> crate::frame::FramePayload {
            tagged(TAG_STEERING, data.envelope().mode)
        }

        fn encode_lane_ui(&mut self, _data: &LaneUiData) -> crate::frame::FramePayload {
            tagged(TAG_LANE_UI, 0)
        }

        fn encode_cruise_ui(&mut self, _data: &CruiseUiData) -> crate::frame::FramePayload {
            tagged(TAG_CRUISE_UI, 0)
        }
    }

    struct FlatModel;

    impl CurvatureModel for FlatModel {
        fn steer_from_curvature(&self, curvature: f32, _speed_mps: f32, _roll: f32) -> f32 {
            curvature * 1000.0
        }
    }

    fn synthesizer(fingerprint: &str) -> CommandSynthesizer<TagEncoder, FlatModel> {
        CommandSynthesizer::new(fingerprint, TagEncoder, FlatModel).unwrap()
    }

    fn tags(frames: &FrameBatch) -> Vec<u8> {
        frames.iter().map(|f| f.payload[0]).collect()
    }

    #[test]
    fn test_unknown_fingerprint_rejected_at_construction() {
        assert_eq!(
            CommandSynthesizer::new("PINTO_MK1", TagEncoder, FlatModel)
                .err()
                .unwrap(),
            ConfigError::UnknownVariant
        );
    }

    #[test]
    fn test_tick_zero_fires_every_class_in_order() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let command = ActuationCommand {
            cruise_cancel: true,
            lateral_active: true,
            curvature: 0.001,
            ..Default::default()
        };
        let (_, frames) = synth.update(&command, &VehicleObservation::default());
        assert_eq!(
            tags(&frames),
            vec![
                TAG_BUTTON,
                TAG_BUTTON,
                TAG_ASSIST,
                TAG_STEERING,
                TAG_CRUISE_UI,
                TAG_LANE_UI
            ]
        );
    }

    #[test]
    fn test_cancel_scenario_two_buses_no_other_buttons() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let command = ActuationCommand {
            cruise_cancel: true,
            cruise_resume: true,
            ..Default::default()
        };
        let observation = VehicleObservation {
            stock_acc: StockAccStatus {
                lane_centering_status: 1,
                raw: 0,
            },
            ..Default::default()
        };
        let (_, frames) = synth.update(&command, &observation);
        let buttons: Vec<_> = frames
            .iter()
            .filter(|f| f.payload[0] == TAG_BUTTON)
            .collect();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].bus, Bus::Camera);
        assert_eq!(buttons[1].bus, Bus::Main);
        for frame in buttons {
            assert_eq!(frame.payload[1], ButtonPress::Cancel as u8);
        }
    }

    #[test]
    fn test_clamp_scenario_echoes_applied_curvature() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let command = ActuationCommand {
            lateral_active: true,
            curvature: 10.0 * CURVATURE_MAX,
            ..Default::default()
        };
        let (echo, frames) = synth.update(&command, &VehicleObservation::default());
        let steering: Vec<_> = frames
            .iter()
            .filter(|f| f.payload[0] == TAG_ASSIST || f.payload[0] == TAG_STEERING)
            .collect();
        assert_eq!(steering.len(), 2);
        assert!((echo.curvature - (-CURVATURE_MAX)).abs() < 1e-9);
        assert!((synth.state().apply_curvature - (-CURVATURE_MAX)).abs() < 1e-9);
    }

    #[test]
    fn test_echo_holds_last_applied_between_steering_ticks() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let active = ActuationCommand {
            lateral_active: true,
            curvature: 0.005,
            ..Default::default()
        };
        let observation = VehicleObservation::default();
        synth.update(&active, &observation); // tick 0, steering due

        // Ticks 1-4: steering not due, echo still reports the tick-0 value
        let idle = ActuationCommand {
            lateral_active: true,
            curvature: 0.009,
            ..Default::default()
        };
        for _ in 1..5 {
            let (echo, frames) = synth.update(&idle, &observation);
            assert!((echo.curvature - (-0.005)).abs() < 1e-9);
            assert!(frames.iter().all(|f| f.payload[0] != TAG_STEERING));
        }

        // Tick 5: steering due again, new value applied
        let (echo, _) = synth.update(&idle, &observation);
        assert!((echo.curvature - (-0.009)).abs() < 1e-9);
    }

    #[test]
    fn test_ui_fast_cadence_and_edge() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let quiet = ActuationCommand::default();
        let observation = VehicleObservation::default();

        let mut fast_ticks = Vec::new();
        for tick in 0..12u64 {
            // Inject an off-cadence edge at tick 7
            let command = if tick == 7 {
                ActuationCommand {
                    hud_alert: HudAlert::SteerRequired,
                    ..Default::default()
                }
            } else {
                quiet
            };
            let (_, frames) = synth.update(&command, &observation);
            if frames.iter().any(|f| f.payload[0] == TAG_CRUISE_UI) {
                fast_ticks.push(tick);
            }
        }
        // Cadence at 0, 5, 10; edges at 7 (alert raised) and 8 (alert cleared)
        assert_eq!(fast_ticks, vec![0, 5, 7, 8, 10]);
    }

    #[test]
    fn test_edge_fires_slow_class_off_cadence_once() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let observation = VehicleObservation::default();
        synth.update(&ActuationCommand::default(), &observation); // tick 0

        let engaged = ActuationCommand {
            lateral_active: true,
            ..Default::default()
        };
        let (_, frames) = synth.update(&engaged, &observation); // tick 1, edge
        assert!(frames.iter().any(|f| f.payload[0] == TAG_LANE_UI));

        let (_, frames) = synth.update(&engaged, &observation); // tick 2, no edge
        assert!(frames.iter().all(|f| f.payload[0] != TAG_LANE_UI));
    }

    #[test]
    fn test_constant_input_is_periodic_with_period_fifty() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let command = ActuationCommand {
            lateral_active: true,
            curvature: 0.002,
            ..Default::default()
        };
        let observation = VehicleObservation {
            cruise_main_on: true,
            ..Default::default()
        };
        let mut sequences: Vec<Vec<u8>> = Vec::new();
        for _ in 0..150 {
            let (_, frames) = synth.update(&command, &observation);
            sequences.push(tags(&frames));
        }
        // Skip the first period: tick 0 carries the initial edge of main_on
        for tick in 50..100 {
            assert_eq!(sequences[tick], sequences[tick + 50], "tick {tick}");
        }
    }

    #[test]
    fn test_at_most_one_button_pair_per_tick() {
        let mut synth = synthesizer("ESCAPE_MK4");
        let observation = VehicleObservation {
            stock_acc: StockAccStatus {
                lane_centering_status: 1,
                raw: 0,
            },
            ..Default::default()
        };
        for tick in 0..100u64 {
            let command = ActuationCommand {
                cruise_cancel: tick % 3 == 0,
                cruise_resume: tick % 2 == 0,
                ..Default::default()
            };
            let (_, frames) = synth.update(&command, &observation);
            let buttons: Vec<_> = frames
                .iter()
                .filter(|f| f.payload[0] == TAG_BUTTON)
                .map(|f| f.payload[1])
                .collect();
            assert!(buttons.len() <= 2);
            // All button frames in a tick carry the same press
            assert!(buttons.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_extended_variant_steering_mode() {
        let mut synth = synthesizer("MUSTANG_MACH_E_MK1");
        let command = ActuationCommand {
            lateral_active: true,
            curvature: 0.001,
            ..Default::default()
        };
        let (_, frames) = synth.update(&command, &VehicleObservation::default());
        let steering = frames
            .iter()
            .find(|f| f.payload[0] == TAG_STEERING)
            .unwrap();
        assert_eq!(steering.payload[1], 2);
    }

    #[test]
    fn test_state_snapshot_updated_after_tick() {
        let mut synth = synthesizer("ESCAPE_MK4");
        assert_eq!(synth.state().ui, UiSnapshot::default());
        let command = ActuationCommand {
            lateral_active: true,
            hud_alert: HudAlert::LaneDeparture,
            ..Default::default()
        };
        let observation = VehicleObservation {
            cruise_main_on: true,
            ..Default::default()
        };
        synth.update(&command, &observation);
        assert_eq!(
            *synth.state(),
            ControllerState {
                ui: UiSnapshot {
                    main_on: true,
                    lateral_active: true,
                    steer_alert: true,
                },
                apply_curvature: 0.0,
            }
        );
        assert_eq!(synth.tick(), 1);
    }
}
