use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Sigma – which smoothing width a file belongs to
// ---------------------------------------------------------------------------

/// The three Gaussian widths the upstream smoothing exercise writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sigma {
    One,
    Five,
    Eleven,
}

impl Sigma {
    /// Load order used by every mode.
    pub const ALL: [Sigma; 3] = [Sigma::One, Sigma::Five, Sigma::Eleven];

    pub fn value(self) -> u32 {
        match self {
            Sigma::One => 1,
            Sigma::Five => 5,
            Sigma::Eleven => 11,
        }
    }

    /// Legend label, e.g. `sigma=5`.
    pub fn label(self) -> String {
        format!("sigma={}", self.value())
    }
}

impl fmt::Display for Sigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// FileNaming – sigma1.txt vs sigma-1.txt
// ---------------------------------------------------------------------------

/// Input file naming convention. A mode picks one and never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `sigma1.txt`, `sigma5.txt`, `sigma11.txt`
    Plain,
    /// `sigma-1.txt`, `sigma-5.txt`, `sigma-11.txt`
    Hyphenated,
}

impl FileNaming {
    pub fn file_name(self, sigma: Sigma) -> String {
        match self {
            FileNaming::Plain => format!("sigma{sigma}.txt"),
            FileNaming::Hyphenated => format!("sigma-{sigma}.txt"),
        }
    }

    /// Full path of the file for `sigma` inside `dir`.
    pub fn path_in(self, dir: &Path, sigma: Sigma) -> PathBuf {
        dir.join(self.file_name(sigma))
    }
}

// ---------------------------------------------------------------------------
// DataSeries – one loaded file
// ---------------------------------------------------------------------------

/// A flat sequence of samples loaded verbatim from one text file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    /// Legend label (`sigma=1`, ...).
    pub label: String,
    pub values: Vec<f64>,
}

impl DataSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The three series of one run, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct SigmaSet {
    pub sigma1: DataSeries,
    pub sigma5: DataSeries,
    pub sigma11: DataSeries,
}

// ---------------------------------------------------------------------------
// X-axis construction
// ---------------------------------------------------------------------------

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// The last element is exactly `stop` rather than an accumulated sum, so
/// `linspace(0.0, 255.0, 128)` ends on `255.0` bit-for-bit.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}
