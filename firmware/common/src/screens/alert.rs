//! Low-battery alert sequence.
//!
//! The alert flashes "LOW BATTERY" with a beep, three times. It is
//! expressed as a fixed list of timed steps so the same sequence can be run
//! blocking on the handheld (with a hardware delay) or stepped by a host
//! that needs to present frames between steps.
//!
//! One cycle:
//!
//! | Step | Effect |
//! |------|--------|
//! | `Clear` | fill the whole screen with the background |
//! | `Wait(250)` | blank pause |
//! | `Message` | draw centered "LOW BATTERY" |
//! | `Tone` | 4 kHz beep for 100 ms (non-blocking) |
//! | `Wait(250)` | message stays visible |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::layout::ALERT_TEXT_POS;
use crate::styles::{ALERT_STYLE, CENTERED};

pub const LOW_BATTERY_TEXT: &str = "LOW BATTERY";

/// Number of flash cycles per alert.
pub const ALERT_CYCLES: usize = 3;

/// Pause before and after the message in each cycle.
pub const ALERT_STEP_DELAY_MS: u32 = 250;

pub const ALERT_TONE_HZ: u32 = 4000;
pub const ALERT_TONE_MS: u32 = 100;

/// One timed step of the alert.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertStep {
    /// Fill the whole screen with the background color.
    Clear,
    /// Block for the given number of milliseconds.
    Wait(u32),
    /// Draw the "LOW BATTERY" message.
    Message,
    /// Start a tone on the buzzer.
    Tone { frequency_hz: u32, duration_ms: u32 },
}

impl AlertStep {
    /// Time this step blocks the caller.
    pub const fn blocking_ms(self) -> u32 {
        match self {
            Self::Wait(ms) => ms,
            _ => 0,
        }
    }
}

/// Steps of a single cycle.
pub const ALERT_CYCLE: [AlertStep; 5] = [
    AlertStep::Clear,
    AlertStep::Wait(ALERT_STEP_DELAY_MS),
    AlertStep::Message,
    AlertStep::Tone {
        frequency_hz: ALERT_TONE_HZ,
        duration_ms: ALERT_TONE_MS,
    },
    AlertStep::Wait(ALERT_STEP_DELAY_MS),
];

/// Every step of the alert, in order.
pub fn alert_steps() -> impl Iterator<Item = AlertStep> { (0..ALERT_CYCLES).flat_map(|_| ALERT_CYCLE) }

/// Total time the blocking alert holds the caller.
pub fn alert_duration_ms() -> u32 { alert_steps().map(AlertStep::blocking_ms).sum() }

pub fn draw_alert_message<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(LOW_BATTERY_TEXT, ALERT_TEXT_POS, ALERT_STYLE, CENTERED)
        .draw(display)
        .ok();
}
