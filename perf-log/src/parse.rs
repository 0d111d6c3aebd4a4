use crate::error::{Field, PerfLogError, Result};
use crate::series::{SeriesMap, TIME_DIVISOR};
use std::path::Path;
use tracing::{debug, warn};

/// Character that marks a series label line
pub const LABEL_MARKER: char = ':';

/// Read the whole file and split it into lines
///
/// # Errors
/// Will return `Err` if the file cannot be opened or read, or is not UTF-8
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PerfLogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Load and parse a log file in one step
pub fn read_log(path: impl AsRef<Path>) -> Result<SeriesMap> {
    let lines = load_lines(path)?;
    parse_lines(&lines)
}

/// Group the lines of a benchmark log into labeled series
///
/// A line containing `:` starts a new series named by the whole line. Every
/// other non-empty line is a data line appended to the most recent series;
/// empty lines are skipped.
///
/// # Errors
/// - [`PerfLogError::OrphanDataLine`] for a data line before any label
/// - [`PerfLogError::InvalidField`] for a data line whose halves are not decimal integers
/// - [`PerfLogError::FieldOutOfRange`] for a decimal field larger than `u64::MAX`
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<SeriesMap> {
    let (_, map) = lines.iter().enumerate().try_fold(
        (None, SeriesMap::new()),
        |(cursor, mut map): (Option<usize>, SeriesMap),
         (idx, line)|
         -> Result<(Option<usize>, SeriesMap)> {
            let line = line.as_ref();
            let line_no = idx + 1;

            if line.contains(LABEL_MARKER) {
                if map.contains(line) {
                    warn!("Line {line_no}: label {line:?} repeated, earlier samples discarded");
                }
                let cursor = map.start(line);
                return Ok((Some(cursor), map));
            }
            if line.is_empty() {
                return Ok((cursor, map));
            }

            let Some(current) = cursor else {
                return Err(PerfLogError::OrphanDataLine { line: line_no });
            };
            let (size, time) = parse_numbered(line, line_no)?;
            if let Some(series) = map.get_index_mut(current) {
                series.push(size, time);
            }
            Ok((cursor, map))
        },
    )?;

    debug!("Parsed {} series", map.len());
    Ok(map)
}

/// Split a single data line into `(size, seconds)`
///
/// The line is cut at half its length; the left part is the size and the
/// right part the raw time, which is divided by [`TIME_DIVISOR`]. Padding
/// around either half is ignored.
pub fn parse_data_line(line: &str) -> Result<(u64, f64)> {
    parse_numbered(line, 1)
}

fn parse_numbered(line: &str, line_no: usize) -> Result<(u64, f64)> {
    let half = line.len() / 2;
    let (left, right) = match (line.get(..half), line.get(half..)) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            return Err(PerfLogError::InvalidField {
                line: line_no,
                field: Field::Size,
                value: line.to_string(),
            });
        }
    };

    let size = parse_field(left, Field::Size, line_no)?;
    let raw_time = parse_field(right, Field::Time, line_no)?;
    Ok((size, raw_time as f64 / TIME_DIVISOR))
}

fn parse_field(text: &str, field: Field, line_no: usize) -> Result<u64> {
    let trimmed = text.trim();
    // `u64::from_str` accepts a leading '+', the log format does not
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PerfLogError::InvalidField {
            line: line_no,
            field,
            value: text.to_string(),
        });
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| PerfLogError::FieldOutOfRange {
            line: line_no,
            field,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_split() {
        let (size, time) = parse_data_line("1020").unwrap();
        assert_eq!(size, 10);
        assert_relative_eq!(time, 20.0 / 1e6);
    }

    #[test]
    fn test_odd_length_gives_extra_char_to_time() {
        // half = 2: "12" | "345"
        let (size, time) = parse_data_line("12345").unwrap();
        assert_eq!(size, 12);
        assert_relative_eq!(time, 345.0 / 1e6);
    }

    #[test]
    fn test_padded_harness_line() {
        let line = format!("{:>20} {:>20}", 2000u32, 15_300u64);
        assert_eq!(line.len(), 41);
        let (size, time) = parse_data_line(&line).unwrap();
        assert_eq!(size, 2000);
        assert_relative_eq!(time, 0.0153);
    }

    #[test]
    fn test_single_char_line_is_invalid() {
        let err = parse_data_line("7").unwrap_err();
        assert!(matches!(
            err,
            PerfLogError::InvalidField {
                field: Field::Size,
                ..
            }
        ));
    }

    #[test]
    fn test_non_digit_time_field() {
        let err = parse_data_line("10ab").unwrap_err();
        match err {
            PerfLogError::InvalidField { field, value, .. } => {
                assert_eq!(field, Field::Time);
                assert_eq!(value, "ab");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signed_field_rejected() {
        assert!(parse_data_line("+1+2").is_err());
        assert!(parse_data_line("-1-2").is_err());
    }

    #[test]
    fn test_oversized_field_reports_range() {
        let digits = "123456789012345678901";
        let err = parse_data_line(&format!("{digits}{digits}")).unwrap_err();
        assert!(err.to_string().contains("does not fit in 64 bits"));
        match err {
            PerfLogError::FieldOutOfRange { field, value, .. } => {
                assert_eq!(field, Field::Size);
                assert_eq!(value, digits);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_whitespace_only_line_is_invalid() {
        assert!(parse_data_line("    ").is_err());
    }

    #[test]
    fn test_split_inside_multibyte_char() {
        // "1é2": 4 bytes, half = 2 falls inside 'é'
        assert!(parse_data_line("1\u{e9}2").is_err());
    }
}
