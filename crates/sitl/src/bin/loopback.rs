//! Scripted loopback run of the command synthesizer.
//!
//! Drives one synthesizer session with a canned intent profile (engage
//! lateral control, weave, pulse cancel/resume) and prints per-class frame
//! counts. Useful for eyeballing cadence behavior and timing headroom.
//!
//! Usage:
//!   cargo run -p latbridge_sitl --bin loopback -- [OPTIONS]
//!
//! Options:
//!   --variant <FINGERPRINT>  Vehicle variant (default: ESCAPE_MK4)
//!   --ticks <N>              Ticks to run (default: 1000)
//!   --rate <HZ>              Loop rate when pacing (default: 100)
//!   --realtime               Hold the loop period instead of free-running

use std::env;
use std::process;

use latbridge_sitl::{SessionConfig, SitlSession};
use latbridge_core::types::{StockAccStatus, StockButtons};
use latbridge_core::{ActuationCommand, HudAlert, VehicleObservation};

struct Args {
    variant: String,
    ticks: u64,
    rate_hz: u32,
    realtime: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        variant: "ESCAPE_MK4".to_string(),
        ticks: 1000,
        rate_hz: 100,
        realtime: false,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--variant" => {
                i += 1;
                args.variant = expect_value(&raw, i, "variant").to_string();
            }
            "--ticks" => {
                i += 1;
                args.ticks = expect_value(&raw, i, "ticks").parse().unwrap_or_else(|_| {
                    eprintln!("invalid --ticks value");
                    process::exit(2);
                });
            }
            "--rate" => {
                i += 1;
                args.rate_hz = expect_value(&raw, i, "rate").parse().unwrap_or_else(|_| {
                    eprintln!("invalid --rate value");
                    process::exit(2);
                });
            }
            "--realtime" => args.realtime = true,
            other => {
                eprintln!("unknown argument: {other}");
                process::exit(2);
            }
        }
        i += 1;
    }
    args
}

fn expect_value<'a>(raw: &'a [String], i: usize, name: &str) -> &'a str {
    raw.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("missing value for --{name}");
        process::exit(2);
    })
}

/// Canned intent profile: idle, then lateral weave, with button pulses
fn script(tick: u64) -> (ActuationCommand, VehicleObservation) {
    let engaged = tick >= 100;
    let phase = tick as f32 * 0.02;
    let command = ActuationCommand {
        curvature: if engaged { 0.015 * phase.sin() } else { 0.0 },
        lateral_active: engaged,
        cruise_cancel: (600..603).contains(&tick),
        cruise_resume: (700..720).contains(&tick),
        hud_alert: if (400..450).contains(&tick) {
            HudAlert::SteerRequired
        } else {
            HudAlert::None
        },
    };
    let observation = VehicleObservation {
        speed_mps: 25.0,
        steering_angle_deg: if engaged { 5.0 * phase.sin() } else { 0.0 },
        cruise_main_on: tick >= 50,
        stock_buttons: StockButtons {
            main_cruise: tick >= 50,
            counter: (tick % 16) as u8,
            ..Default::default()
        },
        stock_acc: StockAccStatus {
            lane_centering_status: if (200..260).contains(&tick) { 2 } else { 0 },
            raw: 0,
        },
        stock_lkas: Default::default(),
    };
    (command, observation)
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let config = SessionConfig {
        fingerprint: args.variant.clone(),
        ticks: args.ticks,
        rate_hz: args.rate_hz,
        realtime: args.realtime,
    };
    let mut session = match SitlSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to start session: {err}");
            process::exit(1);
        }
    };

    let stats = session.run(script);

    println!("variant:          {}", args.variant);
    println!("ticks:            {}", stats.ticks);
    println!("button frames:    {}", stats.button_frames);
    println!("assist frames:    {}", stats.assist_frames);
    println!("steering frames:  {}", stats.steering_frames);
    println!("cruise UI frames: {}", stats.cruise_ui_frames);
    println!("lane UI frames:   {}", stats.lane_ui_frames);
    println!("total frames:     {}", stats.total_frames());
    println!("max tick:         {} us", stats.max_tick_us);
}
