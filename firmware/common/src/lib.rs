//! Display presenter for the trailer remote.
//!
//! This crate contains the platform-agnostic UI code shared between the
//! desktop simulator and the handheld firmware:
//!
//! - [`colors`]: RGB565 color constants for the display
//! - [`config`]: Screen layout (regions, text anchors) and presenter settings
//! - [`styles`]: Pre-computed text styles
//! - [`thresholds`]: Battery calibration and supply detection thresholds
//! - [`hal`]: Capability traits for the panel, power chip and buzzer
//! - [`axp192`]: AXP192 power-management driver over `embedded-hal` I2C
//! - [`widgets`]: Field renderers (power, speed, battery) and static layout
//! - [`screens`]: Full-screen alternate modes (low battery, connection error)
//! - [`presenter`]: [`DisplayPresenter`], the public rendering surface
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Tests run on the host with the
//! standard test harness:
//!
//! ```bash
//! cargo test -p remote-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod axp192;
pub mod colors;
pub mod config;
pub mod hal;
pub mod presenter;
pub mod screens;
pub mod styles;
pub mod thresholds;
pub mod widgets;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use config::{PresenterConfig, SupplyPolarity};
pub use hal::{Brightness, Buzzer, Panel, PowerSupply, Rotation};
pub use presenter::{DisplayPresenter, ScreenMode, Telemetry};
pub use screens::AlertStep;
