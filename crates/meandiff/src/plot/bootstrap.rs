//! Histogram of the bootstrap distribution with its 95% interval.

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use meandiff_core::constants::{CI_LOWER_PROB, CI_UPPER_PROB};
use meandiff_core::BootstrapDistribution;

use super::{bin_values, Bin, PlotError};
use crate::theme::PlotTheme;

/// Draw the bootstrap distribution onto `area`.
///
/// Renders a `theme.bins`-bin histogram of the recorded differences plus
/// three vertical reference lines: the distribution mean (solid) and the
/// 2.5th/97.5th percentiles (dashed). Each line's legend entry carries its
/// literal numeric value.
///
/// # Errors
///
/// Returns [`PlotError::EmptyDistribution`] if `dist` holds no entries and
/// [`PlotError::Backend`] for drawing failures.
pub fn render_bootstrap_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dist: &BootstrapDistribution,
    theme: &PlotTheme,
) -> Result<(), PlotError> {
    if dist.is_empty() {
        return Err(PlotError::EmptyDistribution);
    }
    draw(area, dist, theme).map_err(|e| PlotError::Backend(e.to_string()))
}

/// Save the bootstrap distribution plot to `path`.
///
/// The backend is chosen from the extension: `.svg` renders vector output,
/// anything else a bitmap sized `theme.size`.
pub fn save_bootstrap_histogram<P: AsRef<Path>>(
    path: P,
    dist: &BootstrapDistribution,
    theme: &PlotTheme,
) -> Result<(), PlotError> {
    if dist.is_empty() {
        return Err(PlotError::EmptyDistribution);
    }
    let path = path.as_ref();

    if path.extension().and_then(|e| e.to_str()) == Some("svg") {
        let root = SVGBackend::new(path, theme.size).into_drawing_area();
        render_bootstrap_histogram(&root, dist, theme)?;
        root.present()
            .map_err(|e| PlotError::Backend(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(path, theme.size).into_drawing_area();
        render_bootstrap_histogram(&root, dist, theme)?;
        root.present()
            .map_err(|e| PlotError::Backend(e.to_string()))?;
    }

    tracing::debug!(path = %path.display(), "saved bootstrap distribution plot");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dist: &BootstrapDistribution,
    theme: &PlotTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    area.fill(&theme.background)?;

    let mean = dist.mean();
    let ci_lower = dist.percentile(CI_LOWER_PROB);
    let ci_upper = dist.percentile(CI_UPPER_PROB);

    let bins = bin_values(dist.as_slice(), theme.bins);
    let x_min = bins[0].start;
    let x_max = bins.last().unwrap().end;
    let pad = (x_max - x_min) * 0.05;

    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(1);
    let y_max = (tallest as f64 * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..y_max)?;

    chart.configure_mesh().draw()?;

    let fill = theme.bootstrap_color.mix(theme.bootstrap_alpha).filled();
    chart.draw_series(
        bins.iter()
            .map(|b: &Bin| Rectangle::new([(b.start, 0.0), (b.end, b.count as f64)], fill)),
    )?;

    let line = theme.reference_color.stroke_width(2);

    chart
        .draw_series(LineSeries::new([(mean, 0.0), (mean, y_max)], line))?
        .label(format!("mean diff: {mean}"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], line));

    for (value, label) in [(ci_lower, "lower CI"), (ci_upper, "upper CI")] {
        chart
            .draw_series(DashedLineSeries::new(
                [(value, 0.0), (value, y_max)],
                6,
                4,
                line,
            ))?
            .label(format!("{label}: {value}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], line));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
