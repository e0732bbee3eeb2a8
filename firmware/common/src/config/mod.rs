//! Application configuration.
//!
//! - `layout`: Display dimensions, field regions and text anchors
//! - [`PresenterConfig`]: Runtime settings that depend on the board revision

pub mod layout;

// Re-export layout constants at config level for convenience
pub use layout::{
    BATTERY_REGION,
    CENTER_X,
    DIVIDER,
    POWER_REGION,
    SCREEN,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SPEED_REGION,
};

use crate::hal::{Brightness, Rotation};

/// Which VBUS reading selects the charging glyph on the battery gauge.
///
/// The handheld shows the charging glyph while USB is connected. Boards
/// that report VBUS inverted need `ChargingWhenAbsent`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupplyPolarity {
    /// VBUS at or above the presence threshold selects the charging glyph.
    #[default]
    ChargingWhenPresent,
    /// VBUS below the presence threshold selects the charging glyph.
    ChargingWhenAbsent,
}

impl SupplyPolarity {
    /// Whether the charging glyph should be shown for this VBUS state.
    pub const fn shows_charging(
        self,
        vbus_present: bool,
    ) -> bool {
        match self {
            Self::ChargingWhenPresent => vbus_present,
            Self::ChargingWhenAbsent => !vbus_present,
        }
    }
}

/// Board-dependent presenter settings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresenterConfig {
    /// Panel rotation applied by `initialize()`.
    pub rotation: Rotation,
    /// Polarity of the battery gauge branch selection.
    pub supply_polarity: SupplyPolarity,
    /// Backlight level while the charging glyph is shown.
    pub charging_brightness: Brightness,
    /// Backlight level while the battery bar is shown.
    pub battery_brightness: Brightness,
}

impl PresenterConfig {
    pub const fn new() -> Self {
        Self {
            rotation: Rotation::Deg90,
            supply_polarity: SupplyPolarity::ChargingWhenPresent,
            charging_brightness: Brightness::LOW,
            battery_brightness: Brightness::HIGH,
        }
    }

    /// Same settings with a different supply polarity.
    pub const fn with_supply_polarity(
        mut self,
        polarity: SupplyPolarity,
    ) -> Self {
        self.supply_polarity = polarity;
        self
    }
}

impl Default for PresenterConfig {
    fn default() -> Self { Self::new() }
}
