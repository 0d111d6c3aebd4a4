//! Fixed chart styling: palette, line dashing, legend names and axis labels

use crate::error::{PlotError, Result};
use perf_log::SeriesMap;
use plotters::style::RGBColor;

/// Series colours; consecutive pairs of series share one entry
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(0x00, 0x3f, 0x5c), // dark blue
    RGBColor(0x00, 0x64, 0x00), // green
    RGBColor(0x95, 0x51, 0x96), // violet
    RGBColor(0xdd, 0x51, 0x82), // reddish
    RGBColor(0xff, 0x6e, 0x54), // orange
    RGBColor(0xff, 0xa6, 0x00), // yellow-orange
    RGBColor(0xff, 0xdf, 0x10),
    RGBColor(0xff, 0xdf, 0xf0),
];

/// Number of series sharing one palette colour
pub const SERIES_PER_COLOR: usize = 2;

pub const GRID_COLOR: RGBColor = RGBColor(0xC9, 0xC9, 0xC9);
pub const PLOT_BACKGROUND: RGBColor = RGBColor(0xF9, 0xF9, 0xF9);
pub const PAPER_BACKGROUND: RGBColor = RGBColor(0xF6, 0xF8, 0xFA);

/// Label substrings marking a minimal perfect hash variant
pub const MPH_MARKERS: [&str; 2] = ["--chm", "--bpz"];

/// Prefix expected on every label, stripped for the legend
pub const DEFAULT_LABEL_PREFIX: &str = "option:";

/// Title substring selecting the size axis description
pub const SIZES_TITLE_MARKER: &str = "sizes";

/// What to do when there are more series than the palette can colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteOverflow {
    /// Fail the render
    #[default]
    Error,
    /// Wrap around to the first colour
    Cycle,
}

/// Maximum number of series the palette can colour without wrapping
pub const fn palette_capacity() -> usize {
    PALETTE.len() * SERIES_PER_COLOR
}

/// Colour for the series at `index` in drawing order
pub fn series_color(index: usize, overflow: PaletteOverflow) -> Result<RGBColor> {
    let slot = index / SERIES_PER_COLOR;
    match (PALETTE.get(slot), overflow) {
        (Some(color), _) => Ok(*color),
        (None, PaletteOverflow::Cycle) => Ok(PALETTE[slot % PALETTE.len()]),
        (None, PaletteOverflow::Error) => Err(PlotError::PaletteExhausted {
            series: index + 1,
            capacity: palette_capacity(),
        }),
    }
}

/// Check up front that `n_series` can be coloured under `overflow`
pub fn check_palette(n_series: usize, overflow: PaletteOverflow) -> Result<()> {
    if n_series == 0 {
        return Ok(());
    }
    series_color(n_series - 1, overflow).map(|_| ())
}

/// True for labels drawn with a dashed line
pub fn is_mph_variant(label: &str) -> bool {
    MPH_MARKERS.iter().any(|marker| label.contains(marker))
}

/// Legend text for a series label
///
/// Strips `prefix` and the whitespace after it. A label without the prefix is
/// shown in full; [`unprefixed_labels`] lists those so callers can flag them.
pub fn display_name<'a>(label: &'a str, prefix: &str) -> &'a str {
    label
        .strip_prefix(prefix)
        .map_or(label, |rest| rest.trim_start())
}

/// Labels of `map` that do not start with `prefix`, in map order
pub fn unprefixed_labels<'a>(
    map: &'a SeriesMap,
    prefix: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    map.labels().filter(move |label| !label.starts_with(prefix))
}

/// Y axis description: kilobytes for size runs, seconds otherwise
pub fn y_axis_label(title: &str) -> &'static str {
    if title.contains(SIZES_TITLE_MARKER) {
        "kB"
    } else {
        "Seconds"
    }
}

/// How one series is drawn and named in the legend
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle<'a> {
    pub name: &'a str,
    pub color: RGBColor,
    pub dashed: bool,
}

/// Styles for every series of `map`, in drawing order
pub fn series_styles<'a>(
    map: &'a SeriesMap,
    label_prefix: &str,
    overflow: PaletteOverflow,
) -> Result<Vec<SeriesStyle<'a>>> {
    map.iter()
        .enumerate()
        .map(|(idx, series)| {
            Ok(SeriesStyle {
                name: display_name(&series.label, label_prefix),
                color: series_color(idx, overflow)?,
                dashed: is_mph_variant(&series.label),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_share_color() {
        let first = series_color(0, PaletteOverflow::Error).unwrap();
        let second = series_color(1, PaletteOverflow::Error).unwrap();
        let third = series_color(2, PaletteOverflow::Error).unwrap();
        assert_eq!(first, second);
        assert_ne!(second, third);
        assert_eq!(third, PALETTE[1]);
    }

    #[test]
    fn test_palette_limit() {
        assert_eq!(palette_capacity(), 16);
        assert!(series_color(15, PaletteOverflow::Error).is_ok());
        assert!(matches!(
            series_color(16, PaletteOverflow::Error),
            Err(PlotError::PaletteExhausted {
                series: 17,
                capacity: 16
            })
        ));
        assert_eq!(series_color(16, PaletteOverflow::Cycle).unwrap(), PALETTE[0]);
        assert_eq!(series_color(19, PaletteOverflow::Cycle).unwrap(), PALETTE[1]);
    }

    #[test]
    fn test_check_palette() {
        assert!(check_palette(0, PaletteOverflow::Error).is_ok());
        assert!(check_palette(16, PaletteOverflow::Error).is_ok());
        assert!(check_palette(17, PaletteOverflow::Error).is_err());
        assert!(check_palette(40, PaletteOverflow::Cycle).is_ok());
    }

    #[test]
    fn test_mph_variant() {
        assert!(is_mph_variant("beta--chm:"));
        assert!(is_mph_variant("option: -a bdz --bpz -h fnv"));
        assert!(!is_mph_variant("option: -a chm"));
        assert!(!is_mph_variant("alpha:"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("option: -a chm3", "option:"), "-a chm3");
        assert_eq!(display_name("option:", "option:"), "");
        assert_eq!(display_name("alpha:", "option:"), "alpha:");
        assert_eq!(display_name("run: x", "run:"), "x");
    }

    #[test]
    fn test_unprefixed_labels() {
        let map =
            perf_log::parse_lines(&["option: -a chm", "alpha:", "option:x", "beta:"]).unwrap();
        let flagged: Vec<&str> = unprefixed_labels(&map, "option:").collect();
        assert_eq!(flagged, vec!["alpha:", "beta:"]);
        assert_eq!(unprefixed_labels(&map, "").count(), 0);
    }

    #[test]
    fn test_y_axis_label() {
        assert_eq!(y_axis_label("insertion sizes test"), "kB");
        assert_eq!(y_axis_label("insertion time test"), "Seconds");
    }
}
