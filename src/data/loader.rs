use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{DataSeries, FileNaming, Sigma, SigmaSet};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: value #{index} '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }

    /// Whether this is an I/O failure because the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one whitespace-separated file of floats.
///
/// Tokens may be separated by any mix of spaces, tabs and newlines; there is
/// no header and no other delimiter. An empty file gives an empty series.
pub fn load_series(path: &Path, label: impl Into<String>) -> Result<DataSeries, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_values(&text).map_err(|(index, token, source)| LoadError::Parse {
        path: path.to_path_buf(),
        index,
        token,
        source,
    })?;

    log::debug!("Loaded {} values from {}", values.len(), path.display());
    Ok(DataSeries::new(label, values))
}

/// Load sigma 1, 5 and 11 from `dir`, in that order, stopping at the first failure.
pub fn load_sigma_set(dir: &Path, naming: FileNaming) -> Result<SigmaSet, LoadError> {
    let load = |sigma: Sigma| load_series(&naming.path_in(dir, sigma), sigma.label());

    Ok(SigmaSet {
        sigma1: load(Sigma::One)?,
        sigma5: load(Sigma::Five)?,
        sigma11: load(Sigma::Eleven)?,
    })
}

fn parse_values(text: &str) -> Result<Vec<f64>, (usize, String, ParseFloatError)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, tok)| tok.parse::<f64>().map_err(|e| (i, tok.to_string(), e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_load_series_mixed_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "s.txt", "1.5\n-2e3  0\t4\n\n  255\n");

        let series = load_series(&dir.path().join("s.txt"), "sigma=1").unwrap();
        assert_eq!(series.label, "sigma=1");
        assert_eq!(series.values, vec![1.5, -2000.0, 0.0, 4.0, 255.0]);
    }

    #[test]
    fn test_load_series_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "empty.txt", "");

        let series = load_series(&dir.path().join("empty.txt"), "e").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_load_series_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigma5.txt");

        let err = load_series(&path, "sigma=5").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), path);
        assert!(err.to_string().contains("sigma5.txt"));
    }

    #[test]
    fn test_load_series_bad_token() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.txt", "1.0\n2.0\nabc\n4.0\n");

        let err = load_series(&dir.path().join("bad.txt"), "bad").unwrap_err();
        match &err {
            LoadError::Parse { index, token, .. } => {
                assert_eq!(*index, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_load_sigma_set_naming() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sigma-1.txt", "1");
        write(dir.path(), "sigma-5.txt", "5");
        write(dir.path(), "sigma-11.txt", "11");

        let set = load_sigma_set(dir.path(), FileNaming::Hyphenated).unwrap();
        assert_eq!(set.sigma1.values, vec![1.0]);
        assert_eq!(set.sigma5.values, vec![5.0]);
        assert_eq!(set.sigma11.values, vec![11.0]);
        assert_eq!(set.sigma11.label, "sigma=11");

        // The plain names are not there, so the other convention must fail.
        let err = load_sigma_set(dir.path(), FileNaming::Plain).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.path().ends_with("sigma1.txt"));
    }

    #[test]
    fn test_load_sigma_set_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sigma1.txt", "1");
        write(dir.path(), "sigma5.txt", "x");

        // sigma11.txt is also missing, but the parse error comes first.
        let err = load_sigma_set(dir.path(), FileNaming::Plain).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.path().ends_with("sigma5.txt"));
    }
}
