//! Pure geometry: maps time of day and strip configuration to the
//! rectangles a frame consists of. No X11 calls, no state — everything
//! here is unit-testable without a display connection.

use x11rb::protocol::xproto::Rectangle;

use crate::config::{HighlightSet, Orientation};
use crate::constants::layout::{HOURS_ON_AXIS, MARKER_CENTER_OFFSET, MARKER_SPAN, TICK_SPAN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Rectangle {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

/// One frame's worth of fill instructions. Field order is the draw
/// order contract: marker first, then hour ticks, then highlights, so
/// coinciding ticks and highlights paint over the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    pub marker: Rect,
    pub ticks: Vec<Rect>,
    pub highlights: Vec<Rect>,
}

/// Pixel length allotted to one hour on the axis. Integer division is
/// intentional; it fixes the pixel alignment of every tick.
pub fn hour_tick(axis_length: u16) -> i32 {
    axis_length as i32 / HOURS_ON_AXIS
}

/// Axis offset of the current-time marker.
///
/// May go negative for small `hour_tick` values around midnight; that
/// is a valid (clipped) draw instruction and must not be clamped.
pub fn current_marker_position(hour: u32, minute: u32, hour_tick: i32) -> i32 {
    hour_tick * hour as i32 + (hour_tick as f32 * minute as f32 / 60.0).floor() as i32
        - MARKER_CENTER_OFFSET
}

/// Axis offsets of the 23 interior hour ticks, ascending. Hour 0 and
/// hour 24 sit on the axis boundary and are not drawn.
pub fn tick_positions(hour_tick: i32) -> Vec<i32> {
    (1..HOURS_ON_AXIS).map(|hour| hour * hour_tick).collect()
}

/// Axis offsets of the highlight marks, in `HighlightSet` order.
/// Fractional hours are scaled in floating point and truncated to
/// pixel coordinates.
pub fn highlight_positions(highlights: &HighlightSet, hour_tick: i32) -> Vec<i32> {
    highlights
        .hours()
        .iter()
        .map(|&h| (h * hour_tick as f32) as i32)
        .collect()
}

/// The single orientation-dependent branch: place a mark of the given
/// along-axis `span` at `offset`, `size` pixels thick. Horizontal
/// strips run the axis along x, vertical strips along y.
pub fn rectangle_for(offset: i32, orientation: Orientation, span: u16, size: u16) -> Rect {
    if orientation.is_horizontal() {
        Rect {
            x: offset as i16,
            y: 0,
            width: span,
            height: size,
        }
    } else {
        Rect {
            x: 0,
            y: offset as i16,
            width: size,
            height: span,
        }
    }
}

/// Compose the full rectangle plan for one frame.
pub fn frame_plan(
    orientation: Orientation,
    size: u16,
    hour_tick: i32,
    marker_position: i32,
    highlights: &HighlightSet,
) -> FramePlan {
    FramePlan {
        marker: rectangle_for(marker_position, orientation, MARKER_SPAN, size),
        ticks: tick_positions(hour_tick)
            .into_iter()
            .map(|offset| rectangle_for(offset, orientation, TICK_SPAN, size))
            .collect(),
        highlights: highlight_positions(highlights, hour_tick)
            .into_iter()
            .map(|offset| rectangle_for(offset, orientation, TICK_SPAN, size))
            .collect(),
    }
}
