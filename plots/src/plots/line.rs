use crate::PlotBytes;
use crate::error::Result;
use crate::options::{LineChartOptions, PlotOptions};
use crate::plots::traits::Plot;
use crate::render::RenderConfig;
use crate::render::plotters_backend::render_series;
use perf_log::SeriesMap;
use tracing::debug;

/// Log-log line chart with one line per benchmark series
///
/// # Example
///
/// ```rust,no_run
/// use perf_plots::{LineChart, LineChartOptions, Plot, RenderConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let series = perf_log::read_log("run.log")?;
/// let options = LineChartOptions::for_title("insertion time test").build()?;
/// let png = LineChart::new().render(&series, &options, &mut RenderConfig::default())?;
/// std::fs::write("run.png", png)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct LineChart;

impl LineChart {
    /// Create a new LineChart instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for LineChart {
    type Options = LineChartOptions;
    type Data = SeriesMap;

    fn render(
        &self,
        data: &Self::Data,
        options: &Self::Options,
        render_config: &mut RenderConfig,
    ) -> Result<PlotBytes> {
        let draw_start = std::time::Instant::now();
        let bytes = render_series(data, options, render_config)?;
        let base = options.base();
        debug!(
            "Rendered {} series to {} at {}x{} in {:?} ({} bytes)",
            data.len(),
            options.format,
            base.width,
            base.height,
            draw_start.elapsed(),
            bytes.len()
        );
        Ok(bytes)
    }
}
