//! Application-wide constants
//!
//! Single source of truth for the magic numbers of the clock strip:
//! axis subdivision, rectangle spans and the built-in defaults.

/// Time-axis layout constants
pub mod layout {
    /// Number of hour slots the axis is divided into
    pub const HOURS_ON_AXIS: i32 = 24;

    /// Along-axis span of the current-time marker, in pixels
    pub const MARKER_SPAN: u16 = 6;

    /// Offset subtracted from the marker position so the 6px marker
    /// straddles the exact tick; coupled to MARKER_SPAN
    pub const MARKER_CENTER_OFFSET: i32 = 3;

    /// Along-axis span of hour ticks and highlight marks, in pixels
    pub const TICK_SPAN: u16 = 2;
}

/// Built-in defaults, overridable from the command line
pub mod defaults {
    /// Strip thickness in pixels
    pub const SIZE: u16 = 3;

    /// Window background color name
    pub const BACKGROUND: &str = "black";

    /// Hour-tick color name
    pub const TICK_COLOR: &str = "royal blue";

    /// Current-time marker color name
    pub const TIME_COLOR: &str = "yellow";

    /// Highlight-mark color name
    pub const HIGHLIGHT_COLOR: &str = "green";

    /// Hours highlighted when no times are given (9am, noon, 5pm)
    pub const HIGHLIGHT_HOURS: [f32; 3] = [9.0, 12.0, 17.0];
}

/// Window-manager facing constants
pub mod wm {
    /// WM_NAME registered for the strip window
    pub const WINDOW_NAME: &str = "pixelclock";
}
