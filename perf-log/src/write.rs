use crate::error::Result;
use crate::series::{SeriesMap, TIME_DIVISOR};
use std::io::Write;

/// Column width of each half of a data line, as written by the benchmark harness
pub const FIELD_WIDTH: usize = 20;

/// Format one data line from a size and a raw (unscaled) time count
///
/// Both fields are right-aligned to [`FIELD_WIDTH`] and separated by a space,
/// so the half-length split lands on the size column.
pub fn format_data_line(size: u64, raw_time: u64) -> String {
    format!("{size:>width$} {raw_time:>width$}", width = FIELD_WIDTH)
}

/// Convert seconds back to the raw time count stored in a log
pub fn raw_time(seconds: f64) -> u64 {
    (seconds * TIME_DIVISOR).round() as u64
}

/// Write every series as a label line followed by its data lines
pub fn write_series<W: Write>(map: &SeriesMap, mut writer: W) -> Result<()> {
    for series in map {
        writeln!(writer, "{}", series.label)?;
        for (size, seconds) in series.points() {
            writeln!(writer, "{}", format_data_line(size, raw_time(seconds)))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Serialize a [`SeriesMap`] to a string in log format
pub fn to_log_string(map: &SeriesMap) -> Result<String> {
    let mut buf = Vec::new();
    write_series(map, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_data_line_width() {
        let line = format_data_line(20, 1234);
        assert_eq!(line.len(), 2 * FIELD_WIDTH + 1);
        assert!(line.starts_with(' '));
        assert!(line.ends_with("1234"));
    }

    #[test]
    fn test_raw_time_rounds() {
        assert_eq!(raw_time(0.000_02), 20);
        assert_eq!(raw_time(1.5), 1_500_000);
    }
}
