//! Reader and writer for packed size/time benchmark logs
//!
//! A log is a sequence of lines. A line containing a colon names a new
//! series; every following non-empty line until the next label is one
//! sample, two decimal integers packed side by side and split at half the
//! line length:
//!
//! ```text
//! option: -a chm
//!                   20                 4521
//!                  200                51200
//! ```
//!
//! ```rust,no_run
//! use perf_log::read_log;
//!
//! let series = read_log("run.log")?;
//! for s in &series {
//!     println!("{}: {} samples", s.label, s.len());
//! }
//! # Ok::<(), perf_log::PerfLogError>(())
//! ```

pub use error::{Field, PerfLogError, Result};
pub use parse::{LABEL_MARKER, load_lines, parse_data_line, parse_lines, read_log};
pub use series::{Series, SeriesMap, TIME_DIVISOR};
pub use write::{FIELD_WIDTH, format_data_line, raw_time, to_log_string, write_series};

pub mod error;
pub mod parse;
pub mod series;
mod tests;
pub mod write;
