use anyhow::{Context, Result};
use clap::Parser;
use perf_log::SeriesMap;
use perf_plots::output::DEFAULT_LOG_EXTENSION;
use perf_plots::style::{DEFAULT_LABEL_PREFIX, unprefixed_labels};
use perf_plots::{
    ImageFormat, LineChart, LineChartOptions, OutputPaths, PaletteOverflow, Plot, PlotBytes,
    ProgressCallback, ProgressInfo, RenderConfig, output_paths,
};
use std::path::PathBuf;
use std::time::Instant;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace, warn};

/// perf-plot - Log-log charts of benchmark size/time logs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "perf-plot")]
struct Cli {
    /// Benchmark log: label lines containing ':' followed by packed size/time lines
    /// Images are written next to it as <name>.png and <name>.svg
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,

    /// Chart title; a title containing "sizes" labels the y axis in kB instead of seconds
    #[arg(value_name = "TITLE")]
    title: String,

    /// Prefix stripped from series labels in the legend
    #[arg(long, default_value = DEFAULT_LABEL_PREFIX)]
    label_prefix: String,

    /// Extension removed from the log file name when naming images
    #[arg(long, default_value = DEFAULT_LOG_EXTENSION)]
    log_extension: String,

    /// Reuse palette colours instead of failing when there are more than 16 series
    #[arg(long)]
    cycle_palette: bool,

    /// Also write the parsed series as JSON
    #[arg(long, value_name = "JSON_PATH")]
    export_json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Build chart options from the command line
fn chart_options(args: &Cli) -> Result<LineChartOptions> {
    let palette_overflow = if args.cycle_palette {
        PaletteOverflow::Cycle
    } else {
        PaletteOverflow::Error
    };
    let options = LineChartOptions::for_title(&args.title)
        .label_prefix(args.label_prefix.clone())
        .palette_overflow(palette_overflow)
        .build()?;
    Ok(options)
}

/// Render the chart in every image format, in memory
fn render_all(
    series: &SeriesMap,
    options: &LineChartOptions,
) -> Result<Vec<(ImageFormat, PlotBytes)>> {
    let chart = LineChart::new();
    let progress: ProgressCallback = Box::new(
        |info: ProgressInfo| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            trace!(
                "Drew {} ({}/{}, {:.0}%)",
                info.series, info.series_drawn, info.total, info.percent
            );
            Ok(())
        },
    );
    let mut render_config = RenderConfig::with_progress(progress);

    ImageFormat::iter()
        .map(|format| {
            let bytes = chart
                .render(series, &options.with_format(format), &mut render_config)
                .with_context(|| format!("Failed to render {format} chart"))?;
            Ok((format, bytes))
        })
        .collect()
}

/// Write every output in order
///
/// If a write fails, the files already written by this call are removed
/// before the error is returned.
fn write_outputs(outputs: &[(PathBuf, Vec<u8>)]) -> Result<()> {
    for (idx, (path, bytes)) in outputs.iter().enumerate() {
        if let Err(e) = std::fs::write(path, bytes) {
            for (written, _) in &outputs[..idx] {
                if let Err(remove_err) = std::fs::remove_file(written) {
                    warn!("Failed to remove {}: {}", written.display(), remove_err);
                }
            }
            return Err(e).with_context(|| format!("Failed to write {}", path.display()));
        }
        info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    }
    Ok(())
}

/// Load, parse, render and write
///
/// Images and the optional JSON export are produced in memory before anything
/// is written, so a failed run leaves no output behind.
fn run(args: &Cli) -> Result<OutputPaths> {
    let start_time = Instant::now();

    let series = perf_log::read_log(&args.log_file)
        .with_context(|| format!("Failed to parse {}", args.log_file.display()))?;
    info!(
        "Parsed {} series from {}",
        series.len(),
        args.log_file.display()
    );
    for s in &series {
        debug!("  {:?}: {} samples", s.label, s.len());
    }
    for label in unprefixed_labels(&series, &args.label_prefix) {
        warn!(
            "Label {label:?} does not start with {:?}, showing it unchanged",
            args.label_prefix
        );
    }

    let options = chart_options(args)?;
    let images = render_all(&series, &options)?;

    let paths = output_paths(&args.log_file, &args.log_extension);
    let mut outputs: Vec<(PathBuf, Vec<u8>)> = images
        .into_iter()
        .map(|(format, bytes)| (paths.get(format).to_path_buf(), bytes))
        .collect();
    if let Some(ref json_path) = args.export_json {
        let json = serde_json::to_vec_pretty(&series)
            .context("Failed to serialize series to JSON")?;
        outputs.push((json_path.clone(), json));
    }
    write_outputs(&outputs)?;

    debug!("Finished in {:?}", start_time.elapsed());
    Ok(paths)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    run(&args)?;
    Ok(())
}
