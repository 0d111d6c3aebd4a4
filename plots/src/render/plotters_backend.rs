use crate::error::{PlotError, Result};
use crate::options::{ImageFormat, LineChartOptions, PlotOptions};
use crate::render::{ProgressInfo, RenderConfig};
use crate::style::{SeriesStyle, check_palette, series_styles};
use crate::{PlotBytes, format_tick, log_axis_range};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use perf_log::{Series, SeriesMap};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

const DASH_SIZE: i32 = 6;
const DASH_SPACING: i32 = 4;

const LEGEND_COLUMNS: usize = 2;
const LEGEND_ROW_HEIGHT: u32 = 18;
const LEGEND_PADDING: u32 = 8;
const LEGEND_SAMPLE_WIDTH: i32 = 28;
const LEGEND_FONT_SIZE: f64 = 13.0;

/// Draw every series of `map` and encode the chart in `options.format`
///
/// Series are drawn in map order. The palette is checked before anything is
/// drawn, so an oversized map fails without partial output.
pub fn render_series(
    map: &SeriesMap,
    options: &LineChartOptions,
    render_config: &mut RenderConfig,
) -> Result<PlotBytes> {
    check_palette(map.len(), options.palette_overflow)?;

    let base = options.base();
    let (width, height) = (base.width, base.height);

    match options.format {
        ImageFormat::Png => {
            let mut pixels = vec![0u8; width as usize * height as usize * 3];
            {
                let root =
                    BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
                draw_chart(&root, map, options, render_config)?;
                root.present()
                    .map_err(|e| PlotError::Draw(format!("Failed to present bitmap: {:?}", e)))?;
            }
            encode_png(&pixels, width, height)
        }
        ImageFormat::Svg => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
                draw_chart(&root, map, options, render_config)?;
                root.present()
                    .map_err(|e| PlotError::Draw(format!("Failed to present SVG: {:?}", e)))?;
            }
            Ok(svg.into_bytes())
        }
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    map: &SeriesMap,
    options: &LineChartOptions,
    render_config: &mut RenderConfig,
) -> Result<()> {
    let base = options.base();
    root.fill(&base.paper_color)
        .map_err(|e| PlotError::Draw(format!("Failed to fill background: {:?}", e)))?;

    let entries = series_styles(map, &options.label_prefix, options.palette_overflow)?;

    let band = legend_band_height(entries.len(), base.height);
    let (chart_area, legend_area) = root.split_vertically(base.height - band);

    let x_range = log_axis_range(
        map.iter()
            .flat_map(|s| s.sizes().iter().map(|&size| size as f64)),
    );
    let y_range = log_axis_range(map.iter().flat_map(|s| s.times().iter().copied()));
    debug!("Axis ranges: x {:?}, y {:?}", x_range, y_range);

    let mut builder = ChartBuilder::on(&chart_area);
    builder
        .margin(base.margin)
        .x_label_area_size(base.x_label_area_size)
        .y_label_area_size(base.y_label_area_size);
    if !base.title.is_empty() {
        builder.caption(
            &base.title,
            ("sans-serif", f64::from(base.title_font_size)).into_font(),
        );
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
        .map_err(|e| PlotError::Draw(format!("Failed to build chart: {:?}", e)))?;

    chart
        .plotting_area()
        .fill(&base.plot_color)
        .map_err(|e| PlotError::Draw(format!("Failed to fill plot area: {:?}", e)))?;

    let tick_formatter = |value: &f64| format_tick(*value);
    chart
        .configure_mesh()
        .x_desc(options.x_axis.label.as_str())
        .y_desc(options.y_axis.label.as_str())
        .x_labels(options.x_axis.ticks)
        .y_labels(options.y_axis.ticks)
        .x_label_formatter(&tick_formatter)
        .y_label_formatter(&tick_formatter)
        .bold_line_style(base.grid_color.stroke_width(1))
        .light_line_style(base.grid_color.mix(0.4).stroke_width(1))
        .draw()
        .map_err(|e| PlotError::Draw(format!("Failed to draw mesh: {:?}", e)))?;

    let total = entries.len();
    for (idx, (series, entry)) in map.iter().zip(&entries).enumerate() {
        let points = log_points(series);
        let style = entry.color.stroke_width(options.line_width);
        let drawn = if entry.dashed {
            chart.draw_series(DashedLineSeries::new(
                points,
                DASH_SIZE,
                DASH_SPACING,
                style,
            ))
        } else {
            chart.draw_series(LineSeries::new(points, style))
        };
        drawn.map_err(|e| {
            PlotError::Draw(format!("Failed to draw series {:?}: {:?}", series.label, e))
        })?;

        render_config.report_progress(ProgressInfo::new(entry.name, idx + 1, total));
    }

    draw_legend(&legend_area, &entries, options.line_width)
}

/// Points of `series` that can be placed on log axes
///
/// Zero sizes and non-positive times have no logarithm and are left out.
fn log_points(series: &Series) -> Vec<(f64, f64)> {
    let points: Vec<(f64, f64)> = series
        .points()
        .filter(|&(size, time)| size > 0 && time.is_finite() && time > 0.0)
        .map(|(size, time)| (size as f64, time))
        .collect();
    if points.len() < series.len() {
        debug!(
            "Series {:?}: skipped {} non-positive samples",
            series.label,
            series.len() - points.len()
        );
    }
    points
}

/// Height of the legend band below the plot, capped at half the image
fn legend_band_height(n_entries: usize, height: u32) -> u32 {
    if n_entries == 0 {
        return 0;
    }
    let rows = n_entries.div_ceil(LEGEND_COLUMNS) as u32;
    (rows * LEGEND_ROW_HEIGHT + 2 * LEGEND_PADDING).min(height / 2)
}

/// Line segments of a legend sample starting at `(x, y)`
fn legend_sample(x: i32, y: i32, dashed: bool) -> Vec<[(i32, i32); 2]> {
    if !dashed {
        return vec![[(x, y), (x + LEGEND_SAMPLE_WIDTH, y)]];
    }
    (0..LEGEND_SAMPLE_WIDTH)
        .step_by((DASH_SIZE + DASH_SPACING) as usize)
        .map(|start| {
            let end = (start + DASH_SIZE).min(LEGEND_SAMPLE_WIDTH);
            [(x + start, y), (x + end, y)]
        })
        .collect()
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[SeriesStyle<'_>],
    line_width: u32,
) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let (width, _) = area.dim_in_pixel();
    let padding = LEGEND_PADDING as i32;
    let column_width = (width as i32 - 2 * padding) / LEGEND_COLUMNS as i32;
    let row_height = LEGEND_ROW_HEIGHT as i32;
    let font = ("sans-serif", LEGEND_FONT_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (idx, entry) in entries.iter().enumerate() {
        let column = (idx % LEGEND_COLUMNS) as i32;
        let row = (idx / LEGEND_COLUMNS) as i32;
        let x = padding + column * column_width;
        let y = padding + row * row_height + row_height / 2;

        for segment in legend_sample(x, y, entry.dashed) {
            area.draw(&PathElement::new(
                segment.to_vec(),
                entry.color.stroke_width(line_width),
            ))
            .map_err(|e| PlotError::Draw(format!("Failed to draw legend sample: {:?}", e)))?;
        }
        area.draw(&Text::new(
            entry.name,
            (x + LEGEND_SAMPLE_WIDTH + 6, y),
            font.clone(),
        ))
        .map_err(|e| PlotError::Draw(format!("Failed to draw legend text: {:?}", e)))?;
    }

    Ok(())
}

fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<PlotBytes> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| PlotError::Encode(format!("Failed to encode PNG: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_band_height() {
        assert_eq!(legend_band_height(0, 650), 0);
        assert_eq!(legend_band_height(1, 650), LEGEND_ROW_HEIGHT + 2 * LEGEND_PADDING);
        assert_eq!(legend_band_height(4, 650), 2 * LEGEND_ROW_HEIGHT + 2 * LEGEND_PADDING);
        assert_eq!(legend_band_height(1000, 650), 325);
    }

    #[test]
    fn test_legend_sample_segments() {
        assert_eq!(legend_sample(0, 5, false).len(), 1);
        let dashes = legend_sample(0, 5, true);
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], [(0, 5), (6, 5)]);
        assert_eq!(dashes[2], [(20, 5), (26, 5)]);
    }

    #[test]
    fn test_log_points_skip_non_positive() {
        let mut series = Series::new("option: -a chm");
        series.push(0, 0.5);
        series.push(20, 0.0);
        series.push(200, 0.25);
        assert_eq!(log_points(&series), vec![(200.0, 0.25)]);
    }
}
