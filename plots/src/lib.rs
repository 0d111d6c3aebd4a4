//! # perf-plots
//!
//! Log-log line charts of benchmark logs: input size on the x axis, elapsed
//! time (or size in kB) on the y axis, one line per series.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use perf_plots::{LineChart, LineChartOptions, Plot, RenderConfig};
//! use perf_plots::options::ImageFormat;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let series = perf_log::read_log("run.log")?;
//! let options = LineChartOptions::for_title("insertion time test")
//!     .format(ImageFormat::Svg)
//!     .build()?;
//! let mut render_config = RenderConfig::default();
//! let bytes = LineChart::new().render(&series, &options, &mut render_config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `options`: Plot configuration types using the builder pattern
//! - `plots`: Plot implementations (currently `LineChart`)
//! - `render`: Drawing and encoding with plotters, progress reporting
//! - `style`: The fixed palette, dash and label rules
//! - `output`: Image file naming next to the input log

pub mod error;
pub mod options;
pub mod output;
pub mod plots;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{PlotError, Result};
pub use options::{AxisOptions, BasePlotOptions, ImageFormat, LineChartOptions, PlotOptions};
pub use output::{OutputPaths, output_paths};
pub use plots::{LineChart, Plot};
pub use render::{ProgressCallback, ProgressInfo, RenderConfig};
pub use style::PaletteOverflow;

// Type aliases
pub type PlotBytes = Vec<u8>;

use itertools::{Itertools, MinMaxResult};
use std::ops::Range;

/// Axis range used when there is nothing positive to plot
pub const DEFAULT_LOG_RANGE: Range<f64> = 1.0..10.0;

/// Log-axis range covering the positive, finite `values`
///
/// Bounds are widened to whole decades. Non-positive values are ignored since
/// they cannot be placed on a log axis.
pub fn log_axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    match values
        .into_iter()
        .filter(|v| v.is_finite() && *v > 0.0)
        .minmax()
    {
        MinMaxResult::NoElements => DEFAULT_LOG_RANGE,
        MinMaxResult::OneElement(v) => decade_bounds(v, v),
        MinMaxResult::MinMax(min, max) => decade_bounds(min, max),
    }
}

fn decade_bounds(min: f64, max: f64) -> Range<f64> {
    let low = 10f64.powf(min.log10().floor());
    let mut high = 10f64.powf(max.log10().ceil());
    if high <= low {
        high = low * 10.0;
    }
    low..high
}

/// Compact tick label: plain integers from 1 up to a million, scientific otherwise
pub fn format_tick(value: f64) -> String {
    if (1.0..1e6).contains(&value) && value.fract() == 0.0 {
        format!("{value:.0}")
    } else if (1.0..1e6).contains(&value) {
        format!("{value:.1}")
    } else {
        format!("{value:.0e}")
    }
}
