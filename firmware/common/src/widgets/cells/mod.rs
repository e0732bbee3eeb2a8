//! Field cells of the normal screen.
//!
//! Each cell owns one fixed region from [`crate::config::layout`]. Drawing
//! is clipped to that region and always starts by clearing it, so a cell
//! is a pure function of its input and redrawing one cell never disturbs
//! another.
//!
//! # Cell Types
//!
//! - `power`: "ON" (green) / "OFF" (red)
//! - `speed`: plain decimal integer
//! - `battery`: shell outline plus either five level segments or a charging glyph

mod battery;
mod power;
mod speed;

pub use battery::{draw_battery_level, draw_battery_shell, draw_charging_glyph};
pub use power::{POWER_OFF_TEXT, POWER_ON_TEXT, draw_power_cell, power_text};
pub use speed::{SpeedText, draw_speed_cell, speed_text};
