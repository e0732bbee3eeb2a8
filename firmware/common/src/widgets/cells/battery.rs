//! Battery gauge cell.
//!
//! The gauge is a discrete 0-5 bar: a segment is either white or cleared to
//! the background, never dimmed. While an external supply is charging the
//! cell, the segments are replaced by a lightning glyph. Choosing between
//! the two is the presenter's job; these functions only draw.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{RoundedRectangle, Triangle};

use crate::colors::{BACKGROUND, WHITE};
use crate::config::layout::{
    BATTERY_NUB,
    BATTERY_NUB_FILL,
    BATTERY_NUB_RADIUS,
    BATTERY_REGION,
    BATTERY_SEGMENTS,
    BATTERY_SHELL,
    BATTERY_SHELL_RADIUS,
    CHARGING_GLYPH,
};
use crate::thresholds::battery_segments;
use crate::widgets::primitives::{WHITE_FILL, WHITE_OUTLINE, clear_region, fill_rect};

/// Clear the gauge region and draw the empty battery outline with its nub.
pub fn draw_battery_shell<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cell = display.clipped(&BATTERY_REGION);
    clear_region(&mut cell, &BATTERY_REGION);

    RoundedRectangle::with_equal_corners(BATTERY_SHELL, Size::new(BATTERY_SHELL_RADIUS, BATTERY_SHELL_RADIUS))
        .into_styled(WHITE_OUTLINE)
        .draw(&mut cell)
        .ok();
    RoundedRectangle::with_equal_corners(BATTERY_NUB, Size::new(BATTERY_NUB_RADIUS, BATTERY_NUB_RADIUS))
        .into_styled(WHITE_OUTLINE)
        .draw(&mut cell)
        .ok();
    fill_rect(&mut cell, &BATTERY_NUB_FILL, WHITE);
}

/// Draw the five level segments for `voltage`.
pub fn draw_battery_level<D>(
    display: &mut D,
    voltage: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cell = display.clipped(&BATTERY_REGION);
    for (segment, lit) in BATTERY_SEGMENTS.iter().zip(battery_segments(voltage)) {
        fill_rect(&mut cell, segment, if lit { WHITE } else { BACKGROUND });
    }
}

pub fn draw_charging_glyph<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cell = display.clipped(&BATTERY_REGION);
    for [a, b, c] in CHARGING_GLYPH {
        Triangle::new(a, b, c).into_styled(WHITE_FILL).draw(&mut cell).ok();
    }
}
