//! Rendering smoke tests against an in-memory SVG backend.
//!
//! SVG keeps text as text, so the assertions can check that legends and
//! reference-line labels actually made it into the figure without needing a
//! font rasterizer or a writable filesystem.

use plotters::prelude::*;

use meandiff::{
    bootstrap_mean_diff, render_bootstrap_histogram, render_sample_histogram,
    BootstrapDistribution, PlotError, PlotTheme, StatError,
};

const X1: [f64; 8] = [1.2, 2.4, 2.9, 3.1, 3.8, 4.2, 4.9, 5.5];
const X2: [f64; 8] = [5.8, 6.3, 6.9, 7.2, 7.7, 8.1, 8.8, 9.4];

#[test]
fn sample_histogram_renders_with_legend() {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (640, 480)).into_drawing_area();
        render_sample_histogram(&root, &X1, &X2, ("control", "treatment"), &PlotTheme::default())
            .unwrap();
        root.present().unwrap();
    }

    assert!(svg.contains("<svg"));
    assert!(svg.contains("<rect"), "histogram bars missing");
    assert!(svg.contains("control"), "first series label missing");
    assert!(svg.contains("treatment"), "second series label missing");
}

#[test]
fn bootstrap_histogram_labels_mean_and_bounds() {
    let dist = bootstrap_mean_diff(&X1, &X2, 2000).unwrap();
    let mean = dist.mean();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (640, 480)).into_drawing_area();
        render_bootstrap_histogram(&root, &dist, &PlotTheme::default()).unwrap();
        root.present().unwrap();
    }

    assert!(svg.contains(&format!("mean diff: {mean}")));
    assert!(svg.contains("lower CI:"));
    assert!(svg.contains("upper CI:"));
}

#[test]
fn small_bin_count_is_respected() {
    let theme = PlotTheme::default().with_bins(5);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (320, 240)).into_drawing_area();
        render_sample_histogram(&root, &X1, &X2, ("x1", "x2"), &theme).unwrap();
        root.present().unwrap();
    }
    assert!(svg.contains("<rect"));
}

#[test]
fn empty_sample_is_rejected_by_name() {
    let mut svg = String::new();
    let root = SVGBackend::with_string(&mut svg, (320, 240)).into_drawing_area();
    let err = render_sample_histogram(&root, &[], &X2, ("x1", "x2"), &PlotTheme::default())
        .unwrap_err();
    match err {
        PlotError::Stats(StatError::EmptySample { name }) => assert_eq!(name, "x1"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_sample_is_rejected() {
    let bad = [1.0, f64::INFINITY];
    let mut svg = String::new();
    let root = SVGBackend::with_string(&mut svg, (320, 240)).into_drawing_area();
    let err = render_sample_histogram(&root, &X1, &bad, ("x1", "x2"), &PlotTheme::default())
        .unwrap_err();
    assert!(matches!(
        err,
        PlotError::Stats(StatError::NonFiniteSample { name: "x2", index: 1 })
    ));
}

#[test]
fn empty_distribution_is_rejected() {
    let dist = BootstrapDistribution::from(Vec::new());
    let mut svg = String::new();
    let root = SVGBackend::with_string(&mut svg, (320, 240)).into_drawing_area();
    let err = render_bootstrap_histogram(&root, &dist, &PlotTheme::default()).unwrap_err();
    assert!(matches!(err, PlotError::EmptyDistribution));
}

#[test]
fn degenerate_distribution_still_renders() {
    // Identical inputs produce an all-zero distribution; the plot falls back
    // to a unit-wide range around zero.
    let dist = bootstrap_mean_diff(&X1, &X1, 100).unwrap();
    assert!(dist.iter().all(|d| d == 0.0));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (320, 240)).into_drawing_area();
        render_bootstrap_histogram(&root, &dist, &PlotTheme::default()).unwrap();
        root.present().unwrap();
    }
    assert!(svg.contains("mean diff: 0"));
}
