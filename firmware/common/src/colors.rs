//! Color constants for the remote display.
//!
//! Standard colors come from the `RgbColor` trait constants so they map to
//! the exact full-scale RGB565 values the ST7789 expects.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background of every screen and cleared segments.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Divider, battery shell, lit segments, alert text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). "OFF" state and the connection error text.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). "ON" state.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark grey for the static field labels.
/// RGB565: (15, 31, 15), the classic `0x7BEF` TFT dark grey.
pub const DARK_GREY: Rgb565 = Rgb565::new(15, 31, 15);

/// Screen background. Regions are cleared to this before redrawing.
pub const BACKGROUND: Rgb565 = BLACK;

/// Affirmative value color (power engaged).
pub const AFFIRMATIVE: Rgb565 = GREEN;

/// Warning value color (power disengaged, connection error).
pub const WARNING: Rgb565 = RED;
