//! Centralized calibration thresholds.
//!
//! All thresholds are compile-time constants with validation assertions.
//! If they are reordered incorrectly, compilation fails.
//!
//! # Usage
//!
//! ```ignore
//! use remote_common::thresholds::{BATTERY_SEGMENT_THRESHOLDS, VBUS_PRESENT_THRESHOLD_V};
//! ```

use crate::config::layout::SEGMENT_COUNT;

// =============================================================================
// Battery Gauge Thresholds (single-cell LiPo, fully charged ~4.15V)
// =============================================================================

/// First segment: the cell still has usable charge.
pub const BATT_SEGMENT_1_V: f32 = 3.14;

/// Second segment: lower knee of the discharge curve.
pub const BATT_SEGMENT_2_V: f32 = 3.5;

/// Third segment: middle of the plateau.
pub const BATT_SEGMENT_3_V: f32 = 3.65;

/// Fourth segment: upper plateau.
pub const BATT_SEGMENT_4_V: f32 = 3.75;

/// Fifth segment: near full.
pub const BATT_SEGMENT_5_V: f32 = 3.85;

/// Segment thresholds, lowest first. These are empirical calibration points
/// of the cell's discharge curve, not a formula.
pub const BATTERY_SEGMENT_THRESHOLDS: [f32; SEGMENT_COUNT] = [
    BATT_SEGMENT_1_V,
    BATT_SEGMENT_2_V,
    BATT_SEGMENT_3_V,
    BATT_SEGMENT_4_V,
    BATT_SEGMENT_5_V,
];

// Compile-time validation: thresholds must be in ascending order
const _: () = assert!(BATT_SEGMENT_1_V < BATT_SEGMENT_2_V);
const _: () = assert!(BATT_SEGMENT_2_V < BATT_SEGMENT_3_V);
const _: () = assert!(BATT_SEGMENT_3_V < BATT_SEGMENT_4_V);
const _: () = assert!(BATT_SEGMENT_4_V < BATT_SEGMENT_5_V);

/// Whether segment `index` is lit at `voltage`.
///
/// A voltage exactly at the threshold lights the segment.
#[inline]
pub fn segment_lit(
    index: usize,
    voltage: f32,
) -> bool {
    BATTERY_SEGMENT_THRESHOLDS.get(index).is_some_and(|threshold| voltage >= *threshold)
}

/// Lit state of every segment, lowest first.
pub fn battery_segments(voltage: f32) -> [bool; SEGMENT_COUNT] {
    let mut lit = [false; SEGMENT_COUNT];
    for (index, segment) in lit.iter_mut().enumerate() {
        *segment = segment_lit(index, voltage);
    }
    lit
}

/// Number of lit segments (0..=5). NaN lights nothing.
pub fn lit_segment_count(voltage: f32) -> u8 { battery_segments(voltage).iter().filter(|lit| **lit).count() as u8 }

// =============================================================================
// External Supply Detection
// =============================================================================

/// VBUS below this voltage means no USB supply is connected.
pub const VBUS_PRESENT_THRESHOLD_V: f32 = 1.0;

/// Check whether a VBUS reading indicates an external supply.
#[inline]
pub fn is_vbus_present(vbus_voltage: f32) -> bool { vbus_voltage >= VBUS_PRESENT_THRESHOLD_V }

// =============================================================================
// Unit Tests
// =============================================================================
