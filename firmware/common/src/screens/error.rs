//! Connection error screen.
//!
//! Shown by the caller when the radio link to the trailer is lost. Static,
//! non-blocking, and left on screen until the caller redraws.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BACKGROUND;
use crate::config::layout::{ERROR_LINE_BASELINES, ERROR_TEXT_X};
use crate::styles::{ERROR_STYLE, LEFT_ALIGNED};

pub const CONNECTION_ERROR_LINES: [&str; 3] = ["ERROR CONNECTING.", "ENSURE TRAILER IS", "ON AND WITHIN RANGE"];

pub fn draw_connection_error<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();

    for (line, baseline) in CONNECTION_ERROR_LINES.iter().zip(ERROR_LINE_BASELINES) {
        Text::with_text_style(line, Point::new(ERROR_TEXT_X, baseline), ERROR_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
