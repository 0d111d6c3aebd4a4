use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfLogError {
    #[error("Failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: data line appears before any series label")]
    OrphanDataLine { line: usize },

    #[error("Line {line}: {field} field {value:?} is not a decimal integer")]
    InvalidField {
        line: usize,
        field: Field,
        value: String,
    },

    #[error("Line {line}: {field} field {value:?} does not fit in 64 bits")]
    FieldOutOfRange {
        line: usize,
        field: Field,
        value: String,
    },

    #[error("Failed to write log: {0}")]
    Write(#[from] std::io::Error),
}

/// Which half of a data line failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Size,
    Time,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Size => write!(f, "size"),
            Field::Time => write!(f, "time"),
        }
    }
}

pub type Result<T> = std::result::Result<T, PerfLogError>;
