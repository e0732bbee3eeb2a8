//! Full-screen alternate modes.
//!
//! Both screens replace the normal layout entirely and do not restore it;
//! the caller redraws the normal screen when it wants it back.

mod alert;
mod error;

pub use alert::{
    ALERT_CYCLE,
    ALERT_CYCLES,
    ALERT_STEP_DELAY_MS,
    ALERT_TONE_HZ,
    ALERT_TONE_MS,
    AlertStep,
    LOW_BATTERY_TEXT,
    alert_duration_ms,
    alert_steps,
    draw_alert_message,
};
pub use error::{CONNECTION_ERROR_LINES, draw_connection_error};
