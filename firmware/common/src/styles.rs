//! Pre-computed static text styles.
//!
//! All styles are `const`, so they live in read-only data and cost nothing
//! per draw call. Text anchors in [`crate::config::layout`] are baseline
//! positions; every style here uses the default alphabetic baseline.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{AFFIRMATIVE, DARK_GREY, WARNING, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for field values and the alert message.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for static labels and the error message lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Static field labels ("POWER", "SPEED").
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, DARK_GREY);

/// Large green "ON".
pub const POWER_ON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, AFFIRMATIVE);

/// Large red "OFF".
pub const POWER_OFF_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WARNING);

/// Large white speed value.
pub const SPEED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// "LOW BATTERY" alert message.
pub const ALERT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Connection error lines.
pub const ERROR_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WARNING);
