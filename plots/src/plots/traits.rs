use crate::PlotBytes;
use crate::error::Result;
use crate::options::PlotOptions;
use crate::render::RenderConfig;

/// Trait for plot types
///
/// This trait defines the interface that all plot types must implement.
/// Each plot type specifies its own options type and data type.
///
/// # Example
///
/// ```rust,no_run
/// use perf_plots::plots::traits::Plot;
/// use perf_plots::options::{PlotOptions, BasePlotOptions};
/// use perf_plots::render::RenderConfig;
/// use perf_plots::{PlotBytes, Result};
///
/// struct MyPlotOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for MyPlotOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct MyPlot;
///
/// impl Plot for MyPlot {
///     type Options = MyPlotOptions;
///     type Data = Vec<(f64, f64)>;
///
///     fn render(
///         &self,
///         data: &Self::Data,
///         options: &Self::Options,
///         render_config: &mut RenderConfig,
///     ) -> Result<PlotBytes> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait Plot {
    /// The options type for this plot
    type Options: PlotOptions;

    /// The data type this plot accepts
    type Data;

    /// Render the plot with the given data and options
    ///
    /// # Arguments
    ///
    /// * `data` - The data to plot
    /// * `options` - Plot-specific options
    /// * `render_config` - Rendering configuration (progress callbacks, etc.)
    ///
    /// # Returns
    ///
    /// Encoded image bytes
    fn render(
        &self,
        data: &Self::Data,
        options: &Self::Options,
        render_config: &mut RenderConfig,
    ) -> Result<PlotBytes>;
}
