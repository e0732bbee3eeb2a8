//! The display presenter: the remote's whole rendering surface.
//!
//! [`DisplayPresenter`] turns scalar telemetry into fixed-layout updates and
//! shows the two alternate full-screen modes. It keeps no UI state of its
//! own: every render call is a pure function of its argument plus, for the
//! battery gauge, the current VBUS reading. The frame buffer is the only
//! memory between calls, and it belongs to the panel.
//!
//! # Operations
//!
//! | Operation | Touches | Blocks |
//! |-----------|---------|--------|
//! | [`initialize`](DisplayPresenter::initialize) | whole screen, rotation | no |
//! | [`render_power`](DisplayPresenter::render_power) | power region | no |
//! | [`render_speed`](DisplayPresenter::render_speed) | speed region | no |
//! | [`render_battery`](DisplayPresenter::render_battery) | battery region, **backlight** | no |
//! | [`show_low_battery_alert`](DisplayPresenter::show_low_battery_alert) | whole screen, buzzer | ~1.5 s |
//! | [`show_connection_error`](DisplayPresenter::show_connection_error) | whole screen | no |
//!
//! Switching between the normal screen and the alternate modes is up to the
//! caller; nothing here remembers which mode is showing.
//!
//! # Capability Failures
//!
//! Render calls never fail. Power and buzzer errors are logged (with the
//! `defmt` feature) and the call continues: a failed VBUS read shows the
//! battery bar, a failed backlight request keeps the current level, a
//! failed tone is skipped.

use embedded_hal::delay::DelayNs;

use crate::colors::BACKGROUND;
use crate::config::PresenterConfig;
use crate::hal::{Brightness, Buzzer, Panel, PowerSupply};
use crate::screens::{AlertStep, alert_steps, draw_alert_message, draw_connection_error};
use crate::thresholds::is_vbus_present;
use crate::widgets::{
    draw_battery_level,
    draw_battery_shell,
    draw_charging_glyph,
    draw_power_cell,
    draw_speed_cell,
    draw_static_layout,
};

/// Which screen the caller is currently showing.
///
/// The presenter does not track this; it is a vocabulary type for callers
/// that do.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    /// Power, speed and battery fields.
    #[default]
    Normal,
    LowBatteryAlert,
    ErrorScreen,
}

impl ScreenMode {
    /// Alternate modes replace the whole screen and need a full redraw to leave.
    pub const fn is_alternate(self) -> bool { !matches!(self, Self::Normal) }
}

/// Snapshot of every value shown on the normal screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Telemetry {
    pub engaged: bool,
    pub speed: i32,
    pub battery_volts: f32,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            engaged: false,
            speed: 0,
            battery_volts: 0.0,
        }
    }
}

/// Renders the remote UI onto a panel.
///
/// Owns one handle per capability: the panel `D`, the power chip `P`, the
/// buzzer `B` and the delay source `T` used by the blocking alert.
pub struct DisplayPresenter<D, P, B, T> {
    display: D,
    power: P,
    buzzer: B,
    delay: T,
    config: PresenterConfig,
}

impl<D, P, B, T> DisplayPresenter<D, P, B, T>
where
    D: Panel,
    P: PowerSupply,
    B: Buzzer,
    T: DelayNs,
{
    /// Presenter with the default board configuration.
    pub fn new(
        display: D,
        power: P,
        buzzer: B,
        delay: T,
    ) -> Self {
        Self::with_config(display, power, buzzer, delay, PresenterConfig::default())
    }

    pub fn with_config(
        display: D,
        power: P,
        buzzer: B,
        delay: T,
        config: PresenterConfig,
    ) -> Self {
        Self {
            display,
            power,
            buzzer,
            delay,
            config,
        }
    }

    /// Set the rotation and draw the static layout (background, divider, labels).
    ///
    /// Call once before any other operation. Calling it again redraws the
    /// same layout from a cleared screen.
    pub fn initialize(&mut self) {
        self.display.set_rotation(self.config.rotation);
        draw_static_layout(&mut self.display);

        #[cfg(feature = "defmt")]
        defmt::debug!("UI initialized, rotation {}", self.config.rotation);
    }

    /// Draw "ON" (green) or "OFF" (red) in the power region.
    pub fn render_power(
        &mut self,
        engaged: bool,
    ) {
        draw_power_cell(&mut self.display, engaged);
    }

    /// Draw `value` as a plain decimal in the speed region.
    pub fn render_speed(
        &mut self,
        value: i32,
    ) {
        draw_speed_cell(&mut self.display, value);
    }

    /// Draw the battery gauge and set the backlight.
    ///
    /// The VBUS reading selects the branch (see [`crate::SupplyPolarity`]):
    /// either the charging glyph at the charging brightness, or the
    /// five-segment bar for `voltage_volts` at the battery brightness.
    /// Unlike the other fields this also changes global backlight state.
    pub fn render_battery(
        &mut self,
        voltage_volts: f32,
    ) {
        draw_battery_shell(&mut self.display);

        if self.shows_charging() {
            self.request_backlight(self.config.charging_brightness);
            draw_charging_glyph(&mut self.display);
        } else {
            self.request_backlight(self.config.battery_brightness);
            draw_battery_level(&mut self.display, voltage_volts);
        }
    }

    /// Flash "LOW BATTERY" with a beep three times, blocking for ~1.5 s.
    ///
    /// Not interruptible. Leaves the last alert frame on screen.
    pub fn show_low_battery_alert(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Low battery alert");

        for step in alert_steps() {
            self.run_alert_step(step);
        }
    }

    /// The steps [`show_low_battery_alert`](Self::show_low_battery_alert) runs.
    pub fn alert_steps(&self) -> impl Iterator<Item = AlertStep> + use<D, P, B, T> { alert_steps() }

    /// Execute a single alert step. `Wait` steps block on the delay source.
    pub fn run_alert_step(
        &mut self,
        step: AlertStep,
    ) {
        match step {
            AlertStep::Clear => {
                self.display.clear(BACKGROUND).ok();
            }
            AlertStep::Wait(ms) => self.delay.delay_ms(ms),
            AlertStep::Message => draw_alert_message(&mut self.display),
            AlertStep::Tone {
                frequency_hz,
                duration_ms,
            } => {
                if let Err(_err) = self.buzzer.tone(frequency_hz, duration_ms) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Buzzer tone failed: {}", defmt::Debug2Format(&_err));
                }
            }
        }
    }

    /// Replace the screen with the static connection error message.
    pub fn show_connection_error(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Showing connection error");

        draw_connection_error(&mut self.display);
    }

    /// Redraw the complete normal screen, e.g. after an alternate mode.
    pub fn redraw(
        &mut self,
        telemetry: &Telemetry,
    ) {
        self.initialize();
        self.render_power(telemetry.engaged);
        self.render_speed(telemetry.speed);
        self.render_battery(telemetry.battery_volts);
    }

    pub fn config(&self) -> &PresenterConfig { &self.config }

    pub fn display(&self) -> &D { &self.display }

    pub fn display_mut(&mut self) -> &mut D { &mut self.display }

    pub fn power_mut(&mut self) -> &mut P { &mut self.power }

    /// Give the capability handles back.
    pub fn release(self) -> (D, P, B, T) { (self.display, self.power, self.buzzer, self.delay) }

    fn shows_charging(&mut self) -> bool {
        match self.power.vbus_voltage() {
            Ok(vbus) => self.config.supply_polarity.shows_charging(is_vbus_present(vbus)),
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("VBUS read failed, showing battery level: {}", defmt::Debug2Format(&_err));
                false
            }
        }
    }

    fn request_backlight(
        &mut self,
        level: Brightness,
    ) {
        if let Err(_err) = self.power.set_backlight(level) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Backlight request failed: {}", defmt::Debug2Format(&_err));
        }
    }
}
