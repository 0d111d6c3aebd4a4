use crate::style::{GRID_COLOR, PAPER_BACKGROUND, PLOT_BACKGROUND};
use derive_builder::Builder;
use plotters::style::RGBColor;

/// Base plot options containing layout and display settings
///
/// These options are common to all plot types and control the overall
/// appearance and layout of the plot.
///
/// # Example
///
/// ```rust,no_run
/// use perf_plots::options::BasePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let base = BasePlotOptions::new()
///     .width(800u32)
///     .height(600u32)
///     .title("Insertion time")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct BasePlotOptions {
    /// Image width in pixels
    #[builder(default = "740")]
    pub width: u32,

    /// Image height in pixels
    #[builder(default = "650")]
    pub height: u32,

    /// Margin around the chart in pixels
    #[builder(default = "10")]
    pub margin: u32,

    /// Size of the x-axis label area in pixels
    #[builder(default = "50")]
    pub x_label_area_size: u32,

    /// Size of the y-axis label area in pixels
    #[builder(default = "70")]
    pub y_label_area_size: u32,

    /// Chart caption
    #[builder(default = "String::new()")]
    pub title: String,

    /// Caption font size in pixels
    #[builder(default = "20")]
    pub title_font_size: u32,

    /// Fill behind the whole image
    #[builder(default = "PAPER_BACKGROUND")]
    pub paper_color: RGBColor,

    /// Fill behind the plotting area
    #[builder(default = "PLOT_BACKGROUND")]
    pub plot_color: RGBColor,

    /// Colour of the grid lines on both axes
    #[builder(default = "GRID_COLOR")]
    pub grid_color: RGBColor,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            width: 740,
            height: 650,
            margin: 10,
            x_label_area_size: 50,
            y_label_area_size: 70,
            title: String::new(),
            title_font_size: 20,
            paper_color: PAPER_BACKGROUND,
            plot_color: PLOT_BACKGROUND,
            grid_color: GRID_COLOR,
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }
}
