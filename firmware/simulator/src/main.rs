//! Trailer Remote Simulator for Windows/Desktop.
//!
//! Runs the shared display presenter against host capabilities so every
//! render path can be exercised from the keyboard:
//!
//! | Key | Action |
//! |-----|--------|
//! | P | toggle power |
//! | Up / Down | speed +1 / -1 |
//! | Right / Left | battery +0.05 V / -0.05 V |
//! | C | plug / unplug USB |
//! | L | low battery alert |
//! | E | connection error screen |
//! | R | redraw normal screen |
//!
//! Set `RUST_LOG=debug` for capability logging.

mod peripherals;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use remote_common::{DisplayPresenter, ScreenMode, Telemetry};
use tracing_subscriber::EnvFilter;

use crate::peripherals::{SimBuzzer, SimDelay, SimPanel, SimPower};
use crate::timing::FRAME_TIME;

type Presenter = DisplayPresenter<SimPanel, SimPower, SimBuzzer, SimDelay>;

const BATTERY_MIN_V: f32 = 3.0;
const BATTERY_MAX_V: f32 = 4.2;
const BATTERY_STEP_V: f32 = 0.05;

/// What changed this frame, decided from key presses.
#[derive(Default)]
struct Pending {
    power: bool,
    speed: bool,
    battery: bool,
    mode: Option<ScreenMode>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Trailer Remote Sim", &output_settings);

    let mut telemetry = Telemetry {
        engaged: false,
        speed: 0,
        battery_volts: 3.9,
    };
    let mut ui: Presenter = DisplayPresenter::new(SimPanel::new(), SimPower::new(telemetry.battery_volts), SimBuzzer, SimDelay);
    let mut mode = ScreenMode::Normal;

    ui.redraw(&telemetry);
    window.update(ui.display().inner());
    tracing::info!("Simulator started");

    loop {
        let frame_start = Instant::now();
        let mut pending = Pending::default();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } => handle_key(keycode, &mut telemetry, &mut ui, &mut pending),
                _ => {}
            }
        }

        ui.power_mut().battery = telemetry.battery_volts;

        if let Some(requested) = pending.mode {
            mode = enter_mode(requested, &mut ui, &mut window, &telemetry);
        } else if mode == ScreenMode::Normal {
            if pending.power {
                ui.render_power(telemetry.engaged);
            }
            if pending.speed {
                ui.render_speed(telemetry.speed);
            }
            if pending.battery {
                ui.render_battery(telemetry.battery_volts);
            }
        }

        window.update(ui.display().inner());

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn handle_key(
    keycode: Keycode,
    telemetry: &mut Telemetry,
    ui: &mut Presenter,
    pending: &mut Pending,
) {
    match keycode {
        Keycode::P => {
            telemetry.engaged = !telemetry.engaged;
            pending.power = true;
            tracing::debug!(engaged = telemetry.engaged, "Power toggled");
        }
        Keycode::Up => {
            telemetry.speed = telemetry.speed.saturating_add(1);
            pending.speed = true;
        }
        Keycode::Down => {
            telemetry.speed = telemetry.speed.saturating_sub(1);
            pending.speed = true;
        }
        Keycode::Right => {
            telemetry.battery_volts = (telemetry.battery_volts + BATTERY_STEP_V).clamp(BATTERY_MIN_V, BATTERY_MAX_V);
            pending.battery = true;
        }
        Keycode::Left => {
            telemetry.battery_volts = (telemetry.battery_volts - BATTERY_STEP_V).clamp(BATTERY_MIN_V, BATTERY_MAX_V);
            pending.battery = true;
        }
        Keycode::C => {
            ui.power_mut().toggle_usb();
            pending.battery = true;
            tracing::info!(usb = ui.power_mut().usb_connected(), "Supply changed");
        }
        Keycode::L => pending.mode = Some(ScreenMode::LowBatteryAlert),
        Keycode::E => pending.mode = Some(ScreenMode::ErrorScreen),
        Keycode::R => pending.mode = Some(ScreenMode::Normal),
        _ => {}
    }
}

/// Show `requested` and return the mode left on screen.
fn enter_mode(
    requested: ScreenMode,
    ui: &mut Presenter,
    window: &mut Window,
    telemetry: &Telemetry,
) -> ScreenMode {
    match requested {
        ScreenMode::Normal => {
            ui.redraw(telemetry);
            ScreenMode::Normal
        }
        ScreenMode::LowBatteryAlert => {
            tracing::info!(volts = telemetry.battery_volts, "Low battery alert");
            // Present after every step so the blank and message frames are visible
            for step in ui.alert_steps() {
                ui.run_alert_step(step);
                window.update(ui.display().inner());
            }
            ui.redraw(telemetry);
            ScreenMode::Normal
        }
        ScreenMode::ErrorScreen => {
            tracing::info!("Connection error screen");
            ui.show_connection_error();
            ScreenMode::ErrorScreen
        }
    }
}
