//! Static layout: background, divider line and field labels.
//!
//! Drawn once by `initialize()` and again whenever the caller recovers from
//! an alternate screen. Always starts from a full clear, so repeated draws
//! never stack labels on top of each other.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use super::primitives::WHITE_FILL;
use crate::colors::BACKGROUND;
use crate::config::layout::{DIVIDER, POWER_LABEL_POS, SPEED_LABEL_POS};
use crate::styles::{LABEL_STYLE, LEFT_ALIGNED};

pub const POWER_LABEL: &str = "POWER";
pub const SPEED_LABEL: &str = "SPEED";

pub fn draw_static_layout<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();
    draw_divider(display);
    draw_labels(display);
}

pub fn draw_divider<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    DIVIDER.into_styled(WHITE_FILL).draw(display).ok();
}

pub fn draw_labels<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(POWER_LABEL, POWER_LABEL_POS, LABEL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(SPEED_LABEL, SPEED_LABEL_POS, LABEL_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
