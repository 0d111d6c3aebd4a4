pub mod plotters_backend;
pub mod progress;

pub use progress::{ProgressCallback, ProgressInfo};

use tracing::warn;

/// Configuration for plot rendering
///
/// This struct allows applications to inject their own progress reporting
/// logic without the library depending on specific frameworks.
#[derive(Default)]
pub struct RenderConfig {
    /// Optional progress callback, called after each series is drawn
    pub progress: Option<ProgressCallback>,
}

impl RenderConfig {
    /// Create a new RenderConfig with no callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RenderConfig reporting to `callback`
    pub fn with_progress(callback: ProgressCallback) -> Self {
        Self {
            progress: Some(callback),
        }
    }

    /// Call the progress callback if present
    pub fn report_progress(&mut self, info: ProgressInfo) {
        if let Some(ref mut callback) = self.progress {
            if let Err(e) = callback(info) {
                warn!("Failed to report progress: {}", e);
            }
        }
    }
}
