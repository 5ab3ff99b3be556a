use clap::Parser;

use crate::config::{HighlightSet, Orientation, StripConfig};
use crate::constants::defaults;

/// A different way of looking at time: a thin dock strip along one
/// screen edge showing the current time against a 24-hour axis.
#[derive(Parser, Debug)]
#[command(name = "pixelclock")]
pub struct Cli {
    /// X11 display to connect to (e.g. host:0)
    #[arg(short = 'd', long)]
    pub display: Option<String>,

    /// Strip thickness in pixels
    #[arg(short = 's', long, default_value_t = defaults::SIZE)]
    pub size: u16,

    /// Dock along the top edge
    #[arg(short = 't', long, group = "orientation")]
    pub top: bool,

    /// Dock along the bottom edge
    #[arg(short = 'b', long, group = "orientation")]
    pub bottom: bool,

    /// Dock along the left edge
    #[arg(short = 'l', long, group = "orientation")]
    pub left: bool,

    /// Dock along the right edge (the default)
    #[arg(short = 'r', long, group = "orientation")]
    pub right: bool,

    /// Window background color name
    #[arg(long, default_value = defaults::BACKGROUND)]
    pub background: String,

    /// Hour-tick color name
    #[arg(long, default_value = defaults::TICK_COLOR)]
    pub tickcolor: String,

    /// Current-time marker color name
    #[arg(long, default_value = defaults::TIME_COLOR)]
    pub timecolor: String,

    /// Highlight-mark color name
    #[arg(long, default_value = defaults::HIGHLIGHT_COLOR)]
    pub highcolor: String,

    /// Times of day to highlight on the axis [default: 9:00 12:00 17:00]
    #[arg(value_name = "H:MM", value_parser = parse_highlight)]
    pub highlights: Vec<f32>,
}

impl Cli {
    /// Resolve the orientation flags; clap's arg group already rejects
    /// more than one, so a plain priority chain is enough
    pub fn orientation(&self) -> Orientation {
        if self.top {
            Orientation::Top
        } else if self.bottom {
            Orientation::Bottom
        } else if self.left {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }

    pub fn strip_config(&self) -> StripConfig {
        StripConfig {
            orientation: self.orientation(),
            size: self.size,
            background: self.background.clone(),
            tickcolor: self.tickcolor.clone(),
            timecolor: self.timecolor.clone(),
            highcolor: self.highcolor.clone(),
        }
    }

    pub fn highlight_set(&self) -> HighlightSet {
        HighlightSet::new(self.highlights.clone())
    }
}

/// Parse a `H:MM` token into a fractional hour.
///
/// Only the digits-colon-digits shape is checked; out-of-range values
/// like `25:99` are accepted on purpose, matching the historic
/// behavior (`25:99` → 26.65, drawn off the end of the axis).
fn parse_highlight(token: &str) -> Result<f32, String> {
    let (hours, minutes) = token
        .split_once(':')
        .filter(|(h, m)| {
            !h.is_empty()
                && !m.is_empty()
                && h.bytes().all(|b| b.is_ascii_digit())
                && m.bytes().all(|b| b.is_ascii_digit())
        })
        .ok_or_else(|| format!("'{token}' is not a H:MM time"))?;

    let h: u32 = hours.parse().map_err(|_| format!("hour out of range in '{token}'"))?;
    let m: u32 = minutes.parse().map_err(|_| format!("minute out of range in '{token}'"))?;

    Ok(h as f32 + m as f32 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_highlight_quarter_hour() {
        assert_eq!(parse_highlight("13:15"), Ok(13.25));
    }

    #[test]
    fn test_parse_highlight_on_the_hour() {
        assert_eq!(parse_highlight("9:00"), Ok(9.0));
        assert_eq!(parse_highlight("0:00"), Ok(0.0));
    }

    #[test]
    fn test_parse_highlight_permissive_out_of_range() {
        // shape-only validation: 25:99 is accepted, not rejected
        let v = parse_highlight("25:99").unwrap();
        assert!((v - (25.0 + 99.0 / 60.0)).abs() < 1e-4);
    }

    #[test]
    fn test_parse_highlight_rejects_malformed_tokens() {
        assert!(parse_highlight("9").is_err());
        assert!(parse_highlight(":30").is_err());
        assert!(parse_highlight("9:").is_err());
        assert!(parse_highlight("a:b").is_err());
        assert!(parse_highlight("9:3 0").is_err());
    }

    #[test]
    fn test_orientation_defaults_to_right() {
        let cli = Cli::try_parse_from(["pixelclock"]).unwrap();
        assert_eq!(cli.orientation(), Orientation::Right);
    }

    #[test]
    fn test_orientation_flags() {
        let cli = Cli::try_parse_from(["pixelclock", "-t"]).unwrap();
        assert_eq!(cli.orientation(), Orientation::Top);
        let cli = Cli::try_parse_from(["pixelclock", "--bottom"]).unwrap();
        assert_eq!(cli.orientation(), Orientation::Bottom);
        let cli = Cli::try_parse_from(["pixelclock", "-l"]).unwrap();
        assert_eq!(cli.orientation(), Orientation::Left);
    }

    #[test]
    fn test_orientation_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["pixelclock", "-t", "-b"]).is_err());
    }

    #[test]
    fn test_highlight_tokens_collected_in_order() {
        let cli = Cli::try_parse_from(["pixelclock", "17:30", "9:00"]).unwrap();
        assert_eq!(cli.highlight_set().hours(), &[17.5, 9.0]);
    }

    #[test]
    fn test_no_highlight_tokens_yields_defaults() {
        let cli = Cli::try_parse_from(["pixelclock", "-s", "5"]).unwrap();
        assert_eq!(cli.highlight_set().hours(), &[9.0, 12.0, 17.0]);
    }

    #[test]
    fn test_color_and_size_defaults() {
        let cli = Cli::try_parse_from(["pixelclock"]).unwrap();
        let config = cli.strip_config();
        assert_eq!(config.size, 3);
        assert_eq!(config.background, "black");
        assert_eq!(config.tickcolor, "royal blue");
        assert_eq!(config.timecolor, "yellow");
        assert_eq!(config.highcolor, "green");
    }
}
