use crate::options::ImageFormat;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Extension stripped from the input log name when naming images
pub const DEFAULT_LOG_EXTENSION: &str = ".log";

/// Image paths written next to an input log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    pub svg: PathBuf,
}

impl OutputPaths {
    pub fn get(&self, format: ImageFormat) -> &Path {
        match format {
            ImageFormat::Png => &self.png,
            ImageFormat::Svg => &self.svg,
        }
    }
}

/// Derive the PNG and SVG paths for `input`
///
/// `run.log` becomes `run.png` and `run.svg` in the same directory. An input
/// whose name does not end in `log_extension` keeps its full name and gets the
/// image suffix appended.
pub fn output_paths(input: &Path, log_extension: &str) -> OutputPaths {
    let stem = output_stem(input, log_extension);
    let with_suffix = |format: ImageFormat| {
        let mut name = stem.clone().into_os_string();
        name.push(format!(".{format}"));
        PathBuf::from(name)
    };
    OutputPaths {
        png: with_suffix(ImageFormat::Png),
        svg: with_suffix(ImageFormat::Svg),
    }
}

fn output_stem(input: &Path, log_extension: &str) -> PathBuf {
    let name = input.file_name().map(|n| n.to_string_lossy().into_owned());
    match name.as_deref().and_then(|n| n.strip_suffix(log_extension)) {
        Some(stem) if !stem.is_empty() => input.with_file_name(stem),
        _ => {
            warn!(
                "{} does not end in {:?}, appending image suffixes to the full name",
                input.display(),
                log_extension
            );
            input.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_log_extension() {
        let paths = output_paths(Path::new("results/run.log"), ".log");
        assert_eq!(paths.png, PathBuf::from("results/run.png"));
        assert_eq!(paths.svg, PathBuf::from("results/run.svg"));
    }

    #[test]
    fn test_other_extension_kept() {
        let paths = output_paths(Path::new("bench.txt"), ".log");
        assert_eq!(paths.png, PathBuf::from("bench.txt.png"));
        assert_eq!(paths.get(ImageFormat::Svg), Path::new("bench.txt.svg"));
    }

    #[test]
    fn test_custom_extension() {
        let paths = output_paths(Path::new("size.data"), ".data");
        assert_eq!(paths.png, PathBuf::from("size.png"));
    }
}
