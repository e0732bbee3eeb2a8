//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{BACKGROUND, WHITE};

pub(crate) const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
pub(crate) const WHITE_OUTLINE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Fill `area` with a solid color.
pub fn fill_rect<D>(
    display: &mut D,
    area: &Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Reset a field region to the background color.
pub fn clear_region<D>(
    display: &mut D,
    region: &Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, region, BACKGROUND);
}
