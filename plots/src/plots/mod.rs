pub mod line;
pub mod traits;

pub use line::LineChart;
pub use traits::Plot;
