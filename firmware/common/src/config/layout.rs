//! Display and layout configuration constants.
//!
//! The screen is used in landscape (rotated 90°): 240×135 pixels with the
//! origin in the top-left corner. A vertical divider splits it into a
//! "power" half on the left and a "speed" half on the right; the battery
//! gauge sits below the power value.
//!
//! ```text
//!  0                 135              240
//!  +-------------------+----------------+
//!  |  POWER            |  SPEED         |
//!  |  [power region]   |                |
//!  |                   | [speed region] |
//!  |  [battery region] |                |
//!  +-------------------+----------------+
//! ```
//!
//! Text anchors are baseline positions.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 135×240 panel, landscape).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 135;

/// Full screen area.
pub const SCREEN: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Static Layout
// =============================================================================

/// One-pixel white column separating the power and speed halves.
pub const DIVIDER: Rectangle = Rectangle::new(Point::new(135, 0), Size::new(1, SCREEN_HEIGHT));

pub const POWER_LABEL_POS: Point = Point::new(33, 26);
pub const SPEED_LABEL_POS: Point = Point::new(157, 26);

// =============================================================================
// Field Regions
// =============================================================================

/// Area owned by the power value ("ON"/"OFF").
pub const POWER_REGION: Rectangle = Rectangle::new(Point::new(20, 30), Size::new(80, 50));

/// Baseline anchor of the power value, horizontally centered in its region.
pub const POWER_VALUE_POS: Point = Point::new(region_center_x(&POWER_REGION), 72);

/// Area owned by the speed value.
pub const SPEED_REGION: Rectangle = Rectangle::new(Point::new(140, 30), Size::new(80, 100));

/// Baseline anchor of the speed value, horizontally centered in its region.
pub const SPEED_VALUE_POS: Point = Point::new(region_center_x(&SPEED_REGION), 114);

/// Area owned by the battery gauge (shell, nub, segments, charging glyph).
pub const BATTERY_REGION: Rectangle = Rectangle::new(Point::new(30, 90), Size::new(105, 30));

// =============================================================================
// Battery Gauge Geometry
// =============================================================================

/// Battery body outline.
pub const BATTERY_SHELL: Rectangle = Rectangle::new(Point::new(31, 90), Size::new(70, 28));
pub const BATTERY_SHELL_RADIUS: u32 = 4;

/// Positive terminal nub: a rounded outline plus a solid fill.
pub const BATTERY_NUB: Rectangle = Rectangle::new(Point::new(100, 96), Size::new(4, 16));
pub const BATTERY_NUB_RADIUS: u32 = 1;
pub const BATTERY_NUB_FILL: Rectangle = Rectangle::new(Point::new(100, 96), Size::new(3, 16));

/// Number of discrete level segments in the gauge.
pub const SEGMENT_COUNT: usize = 5;

const SEGMENT_ORIGIN: Point = Point::new(35, 94);
const SEGMENT_PITCH: i32 = 13;
const SEGMENT_SIZE: Size = Size::new(10, 20);

/// Level segments, lowest threshold first (left to right).
pub const BATTERY_SEGMENTS: [Rectangle; SEGMENT_COUNT] = [
    segment(0),
    segment(1),
    segment(2),
    segment(3),
    segment(4),
];

/// Charging glyph: two filled triangles forming a lightning bolt.
pub const CHARGING_GLYPH: [[Point; 3]; 2] = [
    [Point::new(45, 102), Point::new(71, 102), Point::new(71, 112)],
    [Point::new(61, 94), Point::new(87, 104), Point::new(61, 104)],
];

// =============================================================================
// Alternate Screens
// =============================================================================

/// Baseline anchor of the centered "LOW BATTERY" message.
pub const ALERT_TEXT_POS: Point = Point::new(CENTER_X, 77);

/// Left edge of the connection error lines.
pub const ERROR_TEXT_X: i32 = 20;

/// Baselines of the three connection error lines.
pub const ERROR_LINE_BASELINES: [i32; 3] = [27, 55, 73];

// =============================================================================
// Helpers
// =============================================================================

const fn segment(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(SEGMENT_ORIGIN.x + SEGMENT_PITCH * index as i32, SEGMENT_ORIGIN.y),
        SEGMENT_SIZE,
    )
}

const fn region_center_x(region: &Rectangle) -> i32 { region.top_left.x + (region.size.width / 2) as i32 }

const fn right(r: &Rectangle) -> i32 { r.top_left.x + r.size.width as i32 }

const fn bottom(r: &Rectangle) -> i32 { r.top_left.y + r.size.height as i32 }

const fn disjoint(
    a: &Rectangle,
    b: &Rectangle,
) -> bool {
    right(a) <= b.top_left.x || right(b) <= a.top_left.x || bottom(a) <= b.top_left.y || bottom(b) <= a.top_left.y
}

const fn contains(
    outer: &Rectangle,
    inner: &Rectangle,
) -> bool {
    inner.top_left.x >= outer.top_left.x
        && inner.top_left.y >= outer.top_left.y
        && right(inner) <= right(outer)
        && bottom(inner) <= bottom(outer)
}

// Field regions must never overlap each other or the divider, otherwise
// redrawing one field would erase part of another.
const _: () = assert!(disjoint(&POWER_REGION, &SPEED_REGION));
const _: () = assert!(disjoint(&POWER_REGION, &BATTERY_REGION));
const _: () = assert!(disjoint(&SPEED_REGION, &BATTERY_REGION));
const _: () = assert!(disjoint(&DIVIDER, &POWER_REGION));
const _: () = assert!(disjoint(&DIVIDER, &SPEED_REGION));
const _: () = assert!(disjoint(&DIVIDER, &BATTERY_REGION));
const _: () = assert!(contains(&SCREEN, &SPEED_REGION));
const _: () = assert!(contains(&BATTERY_REGION, &BATTERY_SHELL));
const _: () = assert!(contains(&BATTERY_REGION, &BATTERY_NUB));
const _: () = assert!(contains(&BATTERY_SHELL, &BATTERY_SEGMENTS[0]));
const _: () = assert!(contains(&BATTERY_SHELL, &BATTERY_SEGMENTS[SEGMENT_COUNT - 1]));
