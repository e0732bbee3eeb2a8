//! Power state cell.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::layout::{POWER_REGION, POWER_VALUE_POS};
use crate::styles::{CENTERED, POWER_OFF_STYLE, POWER_ON_STYLE};
use crate::widgets::primitives::clear_region;

pub const POWER_ON_TEXT: &str = "ON";
pub const POWER_OFF_TEXT: &str = "OFF";

/// Text and style for a power state.
pub const fn power_text(engaged: bool) -> (&'static str, MonoTextStyle<'static, Rgb565>) {
    if engaged {
        (POWER_ON_TEXT, POWER_ON_STYLE)
    } else {
        (POWER_OFF_TEXT, POWER_OFF_STYLE)
    }
}

pub fn draw_power_cell<D>(
    display: &mut D,
    engaged: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cell = display.clipped(&POWER_REGION);
    clear_region(&mut cell, &POWER_REGION);

    let (text, style) = power_text(engaged);
    Text::with_text_style(text, POWER_VALUE_POS, style, CENTERED)
        .draw(&mut cell)
        .ok();
}
