/// Information about plot rendering progress
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressInfo {
    /// Legend name of the series just drawn
    pub series: String,
    /// Number of series drawn so far
    pub series_drawn: usize,
    /// Number of series in the chart
    pub total: usize,
    /// Progress percentage (0.0 to 100.0)
    pub percent: f32,
}

impl ProgressInfo {
    pub fn new(series: impl Into<String>, series_drawn: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            series_drawn as f32 / total as f32 * 100.0
        };
        Self {
            series: series.into(),
            series_drawn,
            total,
            percent,
        }
    }
}

/// Callback function type for reporting plot rendering progress
///
/// The callback receives progress information and returns a result.
/// Errors from the callback are logged but do not stop rendering.
pub type ProgressCallback =
    Box<dyn FnMut(ProgressInfo) -> Result<(), Box<dyn std::error::Error + Send + Sync>>>;
