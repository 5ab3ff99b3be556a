use crate::constants::defaults;

/// Screen edge the strip occupies, fixed for the process lifetime.
/// Determines whether the time axis runs horizontally or vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orientation {
    /// True when the time axis runs along the display width
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Top | Orientation::Bottom)
    }

    /// Index into the `_NET_WM_STRUT` cardinal array
    /// (left, right, top, bottom) for this edge
    pub fn strut_slot(self) -> usize {
        match self {
            Orientation::Left => 0,
            Orientation::Right => 1,
            Orientation::Top => 2,
            Orientation::Bottom => 3,
        }
    }
}

/// Immutable strip settings, built once from the command line and
/// passed by reference into window setup and the render loop
#[derive(Debug, Clone)]
pub struct StripConfig {
    pub orientation: Orientation,
    /// Strip thickness in pixels (perpendicular to the time axis)
    pub size: u16,
    pub background: String,
    pub tickcolor: String,
    pub timecolor: String,
    pub highcolor: String,
}

/// Ordered set of fractional hours to highlight on the axis.
/// Frozen after argument parsing; insertion order is preserved
/// through to draw order.
#[derive(Debug, Clone)]
pub struct HighlightSet {
    hours: Vec<f32>,
}

impl HighlightSet {
    /// Freeze the hours accumulated during argument parsing.
    /// An empty list falls back to the built-in defaults.
    pub fn new(hours: Vec<f32>) -> Self {
        if hours.is_empty() {
            Self::default()
        } else {
            Self { hours }
        }
    }

    pub fn hours(&self) -> &[f32] {
        &self.hours
    }
}

impl Default for HighlightSet {
    fn default() -> Self {
        Self {
            hours: defaults::HIGHLIGHT_HOURS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_highlight_list_falls_back_to_defaults() {
        let set = HighlightSet::new(Vec::new());
        assert_eq!(set.hours(), &[9.0, 12.0, 17.0]);
    }

    #[test]
    fn test_highlight_set_preserves_insertion_order() {
        let set = HighlightSet::new(vec![17.5, 6.25, 13.0]);
        assert_eq!(set.hours(), &[17.5, 6.25, 13.0]);
    }

    #[test]
    fn test_strut_slots_are_distinct() {
        let slots = [
            Orientation::Left.strut_slot(),
            Orientation::Right.strut_slot(),
            Orientation::Top.strut_slot(),
            Orientation::Bottom.strut_slot(),
        ];
        assert_eq!(slots, [0, 1, 2, 3]);
    }

    #[test]
    fn test_axis_direction_per_orientation() {
        assert!(Orientation::Top.is_horizontal());
        assert!(Orientation::Bottom.is_horizontal());
        assert!(!Orientation::Left.is_horizontal());
        assert!(!Orientation::Right.is_horizontal());
    }
}
