//! Speed value cell.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::layout::{SPEED_REGION, SPEED_VALUE_POS};
use crate::styles::{CENTERED, SPEED_STYLE};
use crate::widgets::primitives::clear_region;

/// Fits any `i32`, sign included ("-2147483648").
pub type SpeedText = String<11>;

/// Plain decimal rendering, no padding or units.
pub fn speed_text(value: i32) -> SpeedText {
    let mut text = SpeedText::new();
    let _ = write!(text, "{value}");
    text
}

/// Values wider than the region are cut at its edges.
pub fn draw_speed_cell<D>(
    display: &mut D,
    value: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cell = display.clipped(&SPEED_REGION);
    clear_region(&mut cell, &SPEED_REGION);

    let text = speed_text(value);
    Text::with_text_style(&text, SPEED_VALUE_POS, SPEED_STYLE, CENTERED)
        .draw(&mut cell)
        .ok();
}
