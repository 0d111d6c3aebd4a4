use crate::options::{AxisOptions, BasePlotOptions, PlotOptions};
use crate::style::{DEFAULT_LABEL_PREFIX, PaletteOverflow};
use derive_builder::Builder;
use strum_macros::{Display, EnumIter};

/// Encoded image formats a chart can be rendered to
///
/// `Display` gives the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

/// Options for benchmark line charts
///
/// # Example
///
/// ```rust,no_run
/// use perf_plots::options::{ImageFormat, LineChartOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = LineChartOptions::for_title("insertion sizes test")
///     .format(ImageFormat::Svg)
///     .build()?;
/// assert_eq!(options.y_axis.label, "kB");
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct LineChartOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// X-axis configuration
    #[builder(default = "AxisOptions::size_axis()")]
    pub x_axis: AxisOptions,

    /// Y-axis configuration
    #[builder(default = "AxisOptions::value_axis(\"\")")]
    pub y_axis: AxisOptions,

    /// Line width in pixels
    #[builder(default = "2")]
    pub line_width: u32,

    /// Prefix stripped from labels for the legend
    #[builder(default = "DEFAULT_LABEL_PREFIX.to_string()")]
    pub label_prefix: String,

    /// Behaviour past the palette capacity
    #[builder(default)]
    pub palette_overflow: PaletteOverflow,

    /// Output encoding
    #[builder(default)]
    pub format: ImageFormat,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            x_axis: AxisOptions::size_axis(),
            y_axis: AxisOptions::value_axis(""),
            line_width: 2,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            palette_overflow: PaletteOverflow::default(),
            format: ImageFormat::default(),
        }
    }
}

impl PlotOptions for LineChartOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl LineChartOptions {
    /// Create a new builder for LineChartOptions
    pub fn new() -> LineChartOptionsBuilder {
        LineChartOptionsBuilder::default()
    }

    /// Builder preset with the caption and y-axis description for `title`
    pub fn for_title(title: &str) -> LineChartOptionsBuilder {
        let mut builder = LineChartOptionsBuilder::default();
        builder
            .base(BasePlotOptions {
                title: title.to_string(),
                ..BasePlotOptions::default()
            })
            .y_axis(AxisOptions::value_axis(title));
        builder
    }

    /// The same options rendered to another format
    pub fn with_format(&self, format: ImageFormat) -> Self {
        Self {
            format,
            ..self.clone()
        }
    }
}
