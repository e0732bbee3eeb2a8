//! Host implementations of the remote's hardware capabilities.
//!
//! The panel draws into an `embedded-graphics-simulator` frame buffer; the
//! power chip, buzzer and delay are plain values that report through
//! `tracing` instead of touching hardware.

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::SimulatorDisplay;
use embedded_hal::delay::DelayNs;
use remote_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use remote_common::{Brightness, Buzzer, Panel, PowerSupply, Rotation};

// =============================================================================
// Panel
// =============================================================================

/// Landscape frame buffer shown in the simulator window.
///
/// The window is already 240×135, so rotation is recorded but does not
/// change the axes.
pub struct SimPanel {
    display: SimulatorDisplay<Rgb565>,
    rotation: Rotation,
}

impl SimPanel {
    pub fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            rotation: Rotation::default(),
        }
    }

    /// Frame buffer to hand to `Window::update`.
    pub fn inner(&self) -> &SimulatorDisplay<Rgb565> { &self.display }
}

impl Default for SimPanel {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for SimPanel {
    fn size(&self) -> Size { self.display.size() }
}

impl DrawTarget for SimPanel {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}

impl Panel for SimPanel {
    fn set_rotation(
        &mut self,
        rotation: Rotation,
    ) {
        if rotation != self.rotation {
            tracing::debug!(?rotation, "Panel rotation set");
        }
        self.rotation = rotation;
    }
}

// =============================================================================
// Power supply
// =============================================================================

/// Simulated USB input voltage when the cable is plugged in.
pub const USB_VBUS_V: f32 = 5.0;

/// Power chip with keyboard-controlled readings.
pub struct SimPower {
    pub vbus: f32,
    pub battery: f32,
    backlight: Option<Brightness>,
}

impl SimPower {
    pub fn new(battery: f32) -> Self {
        Self {
            vbus: 0.0,
            battery,
            backlight: None,
        }
    }

    pub fn usb_connected(&self) -> bool { self.vbus > 0.0 }

    pub fn toggle_usb(&mut self) { self.vbus = if self.usb_connected() { 0.0 } else { USB_VBUS_V }; }
}

impl PowerSupply for SimPower {
    type Error = Infallible;

    fn vbus_voltage(&mut self) -> Result<f32, Self::Error> { Ok(self.vbus) }

    fn battery_voltage(&mut self) -> Result<f32, Self::Error> { Ok(self.battery) }

    fn set_backlight(
        &mut self,
        level: Brightness,
    ) -> Result<(), Self::Error> {
        if self.backlight != Some(level) {
            tracing::info!(percent = level.percent(), "Backlight");
        }
        self.backlight = Some(level);
        Ok(())
    }
}

// =============================================================================
// Buzzer and delay
// =============================================================================

pub struct SimBuzzer;

impl Buzzer for SimBuzzer {
    type Error = Infallible;

    fn tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) -> Result<(), Self::Error> {
        tracing::info!(frequency_hz, duration_ms, "Beep");
        Ok(())
    }
}

/// Blocking delay backed by `thread::sleep`.
pub struct SimDelay;

impl DelayNs for SimDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
