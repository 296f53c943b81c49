//! Overlaid frequency histogram of two samples.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use meandiff_core::error::check_sample;

use super::{bin_values, Bin, PlotError};
use crate::theme::PlotTheme;

/// Draw overlaid histograms of `x1` and `x2` onto `area`.
///
/// Each sample is binned independently over its own range (`theme.bins`
/// bins) and drawn at `theme.fill_alpha` in its series color; the legend
/// uses the provided series labels. The x-axis spans the union of both
/// ranges.
///
/// # Errors
///
/// Returns [`PlotError::Stats`] if either sample is empty or contains a
/// non-finite value, and [`PlotError::Backend`] for drawing failures.
pub fn render_sample_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x1: &[f64],
    x2: &[f64],
    labels: (&str, &str),
    theme: &PlotTheme,
) -> Result<(), PlotError> {
    check_sample("x1", x1)?;
    check_sample("x2", x2)?;
    draw(area, x1, x2, labels, theme).map_err(|e| PlotError::Backend(e.to_string()))
}

/// Save overlaid histograms of `x1` and `x2` to `path`.
///
/// The backend is chosen from the extension: `.svg` renders vector output,
/// anything else a bitmap sized `theme.size`.
pub fn save_sample_histogram<P: AsRef<Path>>(
    path: P,
    x1: &[f64],
    x2: &[f64],
    labels: (&str, &str),
    theme: &PlotTheme,
) -> Result<(), PlotError> {
    check_sample("x1", x1)?;
    check_sample("x2", x2)?;
    let path = path.as_ref();

    if path.extension().and_then(|e| e.to_str()) == Some("svg") {
        let root = SVGBackend::new(path, theme.size).into_drawing_area();
        render_sample_histogram(&root, x1, x2, labels, theme)?;
        root.present()
            .map_err(|e| PlotError::Backend(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(path, theme.size).into_drawing_area();
        render_sample_histogram(&root, x1, x2, labels, theme)?;
        root.present()
            .map_err(|e| PlotError::Backend(e.to_string()))?;
    }

    tracing::debug!(path = %path.display(), "saved two-sample histogram");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x1: &[f64],
    x2: &[f64],
    labels: (&str, &str),
    theme: &PlotTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    area.fill(&theme.background)?;

    let bins1 = bin_values(x1, theme.bins);
    let bins2 = bin_values(x2, theme.bins);

    let x_min = bins1[0].start.min(bins2[0].start);
    let x_max = bins1.last().unwrap().end.max(bins2.last().unwrap().end);
    let pad = (x_max - x_min) * 0.05;

    let tallest = bins1
        .iter()
        .chain(bins2.iter())
        .map(|b| b.count)
        .max()
        .unwrap_or(1);
    let y_max = (tallest as f64 * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..y_max)?;

    chart.configure_mesh().draw()?;

    for ((bins, color), label) in [bins1, bins2]
        .into_iter()
        .zip(theme.series_colors)
        .zip([labels.0, labels.1])
    {
        let fill = color.mix(theme.fill_alpha).filled();
        chart
            .draw_series(
                bins.iter()
                    .map(|b: &Bin| Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], fill)),
            )?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
