use crate::data::histogram::Histogram;
use crate::data::model::DataSeries;

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

/// What to draw, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Line(LineChart),
    Histograms(HistogramGrid),
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

/// Legend placement on a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

/// One curve: `y` plotted against `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    /// Points actually drawn. Lengths are not checked against each other;
    /// the longer side is cut to the shorter.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }

    pub fn lengths_match(&self) -> bool {
        self.x.len() == self.y.len()
    }
}

/// Several curves sharing one pair of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub curves: Vec<Curve>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend: LegendPosition,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            curves: Vec::new(),
            x_label: None,
            y_label: None,
            legend: LegendPosition::UpperRight,
        }
    }
}

impl LineChart {
    /// Add `series` as a curve over `x`.
    pub fn plot(&mut self, x: &[f64], series: &DataSeries) {
        if x.len() != series.len() {
            log::warn!(
                "{}: {} values plotted against an x-axis of {} points",
                series.label,
                series.len(),
                x.len()
            );
        }
        self.curves.push(Curve {
            label: series.label.clone(),
            x: x.to_vec(),
            y: series.values.clone(),
        });
    }

    /// Set the horizontal-axis label, replacing any previous one.
    pub fn set_x_label(&mut self, label: &str) {
        self.x_label = Some(label.to_string());
    }

    pub fn set_legend(&mut self, position: LegendPosition) {
        self.legend = position;
    }
}

// ---------------------------------------------------------------------------
// Histogram grid
// ---------------------------------------------------------------------------

/// One subplot of a histogram grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPanel {
    pub label: String,
    pub histogram: Histogram,
    /// Counts grow downward instead of upward.
    pub inverted_y: bool,
}

/// Independent histogram subplots laid out left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramGrid {
    pub panels: Vec<HistogramPanel>,
}

impl HistogramGrid {
    /// One panel per series, binned automatically, none inverted.
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a DataSeries>) -> Self {
        let panels = series
            .into_iter()
            .map(|s| HistogramPanel {
                label: s.label.clone(),
                histogram: Histogram::auto(&s.values),
                inverted_y: false,
            })
            .collect();
        Self { panels }
    }

    /// Reverse the vertical axis of panel `index`. Out-of-range indices are ignored.
    pub fn invert_y(&mut self, index: usize) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.inverted_y = true;
        }
    }
}
