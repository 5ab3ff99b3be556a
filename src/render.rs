//! The once-per-second redraw loop. Samples the wall clock, asks the
//! layout engine for the frame plan, and repaints only when the marker
//! moved or the window was exposed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Timelike};
use tracing::debug;

use crate::config::{HighlightSet, StripConfig};
use crate::layout;
use crate::x11_utils::DockWindow;

/// Redraw decision state, exclusively owned by the loop. `None` marks
/// the pre-first-frame state; any computed position differs from it,
/// so the first iteration always draws.
pub struct FrameState {
    last_drawn: Option<i32>,
}

impl FrameState {
    pub fn new() -> Self {
        Self { last_drawn: None }
    }

    /// The display surface persists between frames, so skip the frame
    /// entirely unless the marker moved or the server invalidated us
    pub fn should_redraw(&self, new_position: i32, exposed: bool) -> bool {
        exposed || self.last_drawn != Some(new_position)
    }

    pub fn mark_drawn(&mut self, position: i32) {
        self.last_drawn = Some(position);
    }
}

/// Run the strip until `shutdown` is set by a signal. Teardown happens
/// on this function's own exit path, never in signal context.
pub fn run(
    dock: &DockWindow<'_>,
    config: &StripConfig,
    highlights: &HighlightSet,
    shutdown: &AtomicBool,
) -> Result<()> {
    let hour_tick = layout::hour_tick(dock.axis_length);
    let mut frame = FrameState::new();

    while !shutdown.load(Ordering::Relaxed) {
        let now = Local::now();
        let new_position = layout::current_marker_position(now.hour(), now.minute(), hour_tick);

        let exposed = dock.drain_exposures()?;

        if frame.should_redraw(new_position, exposed) {
            let plan = layout::frame_plan(
                config.orientation,
                config.size,
                hour_tick,
                new_position,
                highlights,
            );
            dock.draw(&plan)?;
            frame.mark_drawn(new_position);
            debug!(
                hour = now.hour(),
                minute = now.minute(),
                position = new_position,
                exposed,
                "redrew strip"
            );
        }

        thread::sleep(Duration::from_secs(1));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_always_draws() {
        let frame = FrameState::new();
        assert!(frame.should_redraw(0, false));
        assert!(frame.should_redraw(-3, false));
    }

    #[test]
    fn test_unchanged_position_without_expose_skips_frame() {
        let mut frame = FrameState::new();
        frame.mark_drawn(1447);
        assert!(!frame.should_redraw(1447, false));
    }

    #[test]
    fn test_expose_forces_redraw_of_unchanged_position() {
        let mut frame = FrameState::new();
        frame.mark_drawn(1447);
        assert!(frame.should_redraw(1447, true));
    }

    #[test]
    fn test_position_change_triggers_exactly_one_redraw() {
        let mut frame = FrameState::new();
        frame.mark_drawn(1447);

        // minute rolls over, marker moves
        assert!(frame.should_redraw(1448, false));
        frame.mark_drawn(1448);

        // next second, same minute: no further redraw
        assert!(!frame.should_redraw(1448, false));
    }

    #[test]
    fn test_negative_sentinel_position_is_reachable() {
        // -1 can be a real marker position for tiny hour_tick values,
        // which is why the sentinel is None rather than -1
        let mut frame = FrameState::new();
        frame.mark_drawn(-1);
        assert!(!frame.should_redraw(-1, false));
        assert!(frame.should_redraw(0, false));
    }
}
