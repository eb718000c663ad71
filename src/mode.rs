use std::path::Path;

use crate::chart::{Chart, HistogramGrid, LegendPosition, LineChart};
use crate::data::loader::{LoadError, load_sigma_set};
use crate::data::model::{FileNaming, linspace};

/// Number of samples the smoothing exercise writes per file.
pub const SAMPLES: usize = 128;

// ---------------------------------------------------------------------------
// Mode – one per binary
// ---------------------------------------------------------------------------

/// The three viewers. Each binary runs exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All three series as curves over `[0, 255]`.
    LineOverlay,
    /// The sigma 1 series over `[0, 0.5]`.
    SingleSeries,
    /// One histogram per series, side by side.
    HistogramGrid,
}

impl Mode {
    pub fn naming(self) -> FileNaming {
        match self {
            Mode::LineOverlay | Mode::HistogramGrid => FileNaming::Plain,
            Mode::SingleSeries => FileNaming::Hyphenated,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::LineOverlay => "Gaussian smoothing – sigma 1 / 5 / 11",
            Mode::SingleSeries => "Gaussian smoothing – sigma 1",
            Mode::HistogramGrid => "Gaussian smoothing – histograms",
        }
    }

    /// Load this mode's input files from `dir` and describe the chart.
    ///
    /// Every file is read before anything is built, so a load error means
    /// no chart exists.
    pub fn prepare(self, dir: &Path) -> Result<Chart, LoadError> {
        let set = load_sigma_set(dir, self.naming())?;
        log::info!(
            "Loaded sigma=1 ({}), sigma=5 ({}), sigma=11 ({}) values",
            set.sigma1.len(),
            set.sigma5.len(),
            set.sigma11.len()
        );

        let chart = match self {
            Mode::LineOverlay => {
                let x = linspace(0.0, 255.0, SAMPLES);
                let mut chart = LineChart::default();
                for series in [&set.sigma1, &set.sigma5, &set.sigma11] {
                    chart.plot(&x, series);
                }
                chart.set_legend(LegendPosition::UpperLeft);
                // Both calls target the horizontal axis; the second wins and
                // the vertical axis stays unlabelled.
                chart.set_x_label("x");
                chart.set_x_label("G(x)");
                Chart::Line(chart)
            }
            Mode::SingleSeries => {
                log::debug!("sigma=5 and sigma=11 loaded but not plotted");
                let x = linspace(0.0, 0.5, SAMPLES);
                let mut chart = LineChart::default();
                chart.plot(&x, &set.sigma1);
                Chart::Line(chart)
            }
            Mode::HistogramGrid => {
                let mut grid = HistogramGrid::from_series([&set.sigma1, &set.sigma5, &set.sigma11]);
                grid.invert_y(0);
                Chart::Histograms(grid)
            }
        };
        Ok(chart)
    }
}
