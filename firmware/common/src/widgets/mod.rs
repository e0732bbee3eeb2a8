//! Widget components for the remote display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod cells;
mod header;
mod primitives;

pub use cells::{
    POWER_OFF_TEXT,
    POWER_ON_TEXT,
    SpeedText,
    draw_battery_level,
    draw_battery_shell,
    draw_charging_glyph,
    draw_power_cell,
    draw_speed_cell,
    power_text,
    speed_text,
};
pub use header::{POWER_LABEL, SPEED_LABEL, draw_divider, draw_labels, draw_static_layout};
pub use primitives::{clear_region, fill_rect};
