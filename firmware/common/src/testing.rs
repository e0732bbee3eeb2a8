//! Test doubles for the presenter capabilities.
//!
//! Every double appends to one shared [`EventLog`], so tests can assert on
//! the interleaving of display, power, buzzer and delay calls as well as on
//! the final pixels.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use crate::colors::BLACK;
use crate::config::{PresenterConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::hal::{Brightness, Buzzer, Panel, PowerSupply, Rotation};
use crate::presenter::DisplayPresenter;

/// Observable capability call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    Clear(Rgb565),
    Fill(Rectangle, Rgb565),
    Rotation(Rotation),
    VbusRead,
    Backlight(Brightness),
    Tone { frequency_hz: u32, duration_ms: u32 },
    DelayMs(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog { Rc::new(RefCell::new(Vec::new())) }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

// =============================================================================
// Frame buffer
// =============================================================================

/// In-memory 240×135 panel that records solid fills and clears.
#[derive(Clone)]
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    log: EventLog,
}

impl Framebuffer {
    /// Panel filled with a color that no widget uses, so untouched pixels
    /// are distinguishable from cleared ones.
    pub fn new(log: EventLog) -> Self {
        Self {
            pixels: vec![Self::UNTOUCHED; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            log,
        }
    }

    pub const UNTOUCHED: Rgb565 = Rgb565::new(3, 7, 3);

    fn index(point: Point) -> Option<usize> {
        let in_bounds =
            point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT;
        in_bounds.then(|| point.y as usize * SCREEN_WIDTH as usize + point.x as usize)
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Rgb565 {
        Self::index(point).map_or(BLACK, |i| self.pixels[i])
    }

    /// Colors of every pixel in `area`, row by row.
    pub fn region(
        &self,
        area: &Rectangle,
    ) -> Vec<Rgb565> {
        area.points().map(|p| self.pixel(p)).collect()
    }

    /// Number of pixels of `color` inside `area`.
    pub fn count(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|p| self.pixel(*p) == color).count()
    }

    /// Number of pixels outside `area` that differ from `other`.
    pub fn diff_outside(
        &self,
        other: &Self,
        area: &Rectangle,
    ) -> usize {
        self.bounding_box()
            .points()
            .filter(|p| !area.contains(*p) && self.pixel(*p) != other.pixel(*p))
            .count()
    }

    /// Same pixels as this panel, detached from the event log.
    pub fn snapshot(&self) -> Self {
        Self {
            pixels: self.pixels.clone(),
            log: event_log(),
        }
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Fill(*area, color));
        self.draw_iter(area.points().map(|p| Pixel(p, color)))
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Clear(color));
        self.pixels.fill(color);
        Ok(())
    }
}

impl Panel for Framebuffer {
    fn set_rotation(
        &mut self,
        rotation: Rotation,
    ) {
        self.log.borrow_mut().push(Event::Rotation(rotation));
    }
}

// =============================================================================
// Capability doubles
// =============================================================================

/// Power supply returning a fixed VBUS reading (or an error).
pub struct ScriptedPower {
    pub vbus: Result<f32, MockError>,
    pub battery: f32,
    pub backlight_fails: bool,
    log: EventLog,
}

impl ScriptedPower {
    pub fn new(
        log: EventLog,
        vbus: f32,
    ) -> Self {
        Self {
            vbus: Ok(vbus),
            battery: 3.9,
            backlight_fails: false,
            log,
        }
    }
}

impl PowerSupply for ScriptedPower {
    type Error = MockError;

    fn vbus_voltage(&mut self) -> Result<f32, Self::Error> {
        self.log.borrow_mut().push(Event::VbusRead);
        self.vbus
    }

    fn battery_voltage(&mut self) -> Result<f32, Self::Error> { Ok(self.battery) }

    fn set_backlight(
        &mut self,
        level: Brightness,
    ) -> Result<(), Self::Error> {
        if self.backlight_fails {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Backlight(level));
        Ok(())
    }
}

pub struct RecordingBuzzer {
    pub fails: bool,
    log: EventLog,
}

impl RecordingBuzzer {
    pub fn new(log: EventLog) -> Self { Self { fails: false, log } }
}

impl Buzzer for RecordingBuzzer {
    type Error = MockError;

    fn tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) -> Result<(), Self::Error> {
        if self.fails {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Tone {
            frequency_hz,
            duration_ms,
        });
        Ok(())
    }
}

/// Simulated clock: records waits instead of sleeping.
pub struct RecordingDelay {
    log: EventLog,
}

impl RecordingDelay {
    pub fn new(log: EventLog) -> Self { Self { log } }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

// =============================================================================
// Helpers
// =============================================================================

pub type TestPresenter = DisplayPresenter<Framebuffer, ScriptedPower, RecordingBuzzer, RecordingDelay>;

/// Presenter over fresh doubles with the given VBUS reading.
pub fn presenter_with(
    vbus: f32,
    config: PresenterConfig,
) -> (TestPresenter, EventLog) {
    let log = event_log();
    let presenter = DisplayPresenter::with_config(
        Framebuffer::new(log.clone()),
        ScriptedPower::new(log.clone(), vbus),
        RecordingBuzzer::new(log.clone()),
        RecordingDelay::new(log.clone()),
        config,
    );
    (presenter, log)
}

/// Presenter with the default config, running from the battery.
pub fn presenter() -> (TestPresenter, EventLog) { presenter_with(0.0, PresenterConfig::default()) }

/// Total simulated delay recorded in `log`.
pub fn total_delay_ms(log: &EventLog) -> u32 {
    log.borrow()
        .iter()
        .map(|e| if let Event::DelayMs(ms) = e { *ms } else { 0 })
        .sum()
}
