//! Plot styling, passed explicitly to every rendering call.
//!
//! There is deliberately no process-wide style registry; a theme is a plain
//! value, so two plots in the same process can use different styles and
//! rendering stays pure.

use plotters::style::RGBColor;

/// Muted red from the ggplot palette.
pub const GGPLOT_RED: RGBColor = RGBColor(0xE2, 0x4A, 0x33);

/// Muted blue from the ggplot palette.
pub const GGPLOT_BLUE: RGBColor = RGBColor(0x34, 0x8A, 0xBD);

/// Muted green from the ggplot palette.
pub const GGPLOT_GREEN: RGBColor = RGBColor(0x8E, 0xBA, 0x42);

/// Styling for the histogram plots.
#[derive(Debug, Clone)]
pub struct PlotTheme {
    /// Figure size in pixels.
    pub size: (u32, u32),
    /// Number of histogram bins.
    pub bins: usize,
    /// Fill opacity of the two overlaid sample histograms.
    pub fill_alpha: f64,
    /// Colors of the first and second sample series.
    pub series_colors: [RGBColor; 2],
    /// Fill color of the bootstrap distribution histogram.
    pub bootstrap_color: RGBColor,
    /// Fill opacity of the bootstrap distribution histogram.
    pub bootstrap_alpha: f64,
    /// Color of the mean and percentile reference lines.
    pub reference_color: RGBColor,
    /// Figure background color.
    pub background: RGBColor,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            size: (1000, 600),
            bins: 30,
            fill_alpha: 0.5,
            series_colors: [GGPLOT_RED, GGPLOT_BLUE],
            bootstrap_color: GGPLOT_GREEN,
            bootstrap_alpha: 0.7,
            reference_color: RGBColor(0, 0, 0),
            background: RGBColor(255, 255, 255),
        }
    }
}

impl PlotTheme {
    /// Same theme with a different bin count.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Same theme with a different figure size.
    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }
}
