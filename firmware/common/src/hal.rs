//! Hardware capabilities used by the presenter.
//!
//! The presenter never talks to a concrete driver. It owns one handle per
//! capability, so the same rendering code runs on the handheld, in the
//! desktop simulator and against test doubles:
//!
//! - [`Panel`]: an `embedded-graphics` draw target that can be rotated
//! - [`PowerSupply`]: supply voltages and backlight level (AXP192 on the handheld)
//! - [`Buzzer`]: fixed-channel tone output
//!
//! Blocking waits use `embedded_hal::delay::DelayNs`.

use core::fmt::Debug;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;

/// Panel rotation, clockwise from the native portrait orientation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    /// Landscape, used by the remote UI.
    Deg90,
    Deg180,
    Deg270,
}

/// Color display the UI draws on.
///
/// Drawing itself goes through `DrawTarget`: rectangles, triangles, rounded
/// rectangles and text are `embedded-graphics` primitives.
pub trait Panel: DrawTarget<Color = Rgb565> {
    /// Set the panel rotation. Subsequent drawing uses the rotated axes.
    fn set_rotation(
        &mut self,
        rotation: Rotation,
    );
}

/// Backlight level in percent (0..=100).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmed level used while charging.
    pub const LOW: Self = Self(25);

    /// Full level used while running from the battery.
    pub const HIGH: Self = Self(100);

    /// Create a level, saturating at 100%.
    pub const fn from_percent(percent: u8) -> Self {
        if percent > 100 { Self(100) } else { Self(percent) }
    }

    #[inline]
    pub const fn percent(self) -> u8 { self.0 }
}

/// Power-management capability.
pub trait PowerSupply {
    type Error: Debug;

    /// External (USB) supply voltage in volts.
    fn vbus_voltage(&mut self) -> Result<f32, Self::Error>;

    /// Battery cell voltage in volts.
    fn battery_voltage(&mut self) -> Result<f32, Self::Error>;

    /// Set the screen backlight level.
    fn set_backlight(
        &mut self,
        level: Brightness,
    ) -> Result<(), Self::Error>;
}

/// Audio capability: a single tone channel.
pub trait Buzzer {
    type Error: Debug;

    /// Start a tone. Returns immediately; the tone stops on its own after
    /// `duration_ms`.
    fn tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) -> Result<(), Self::Error>;
}
