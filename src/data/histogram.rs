// ---------------------------------------------------------------------------
// Equal-width binning
// ---------------------------------------------------------------------------

/// Bin count used when none is requested.
pub const DEFAULT_BINS: usize = 10;

/// Frequency counts over equal-width bins.
///
/// `edges` has one more element than `counts`. Every bin is half-open
/// `[lo, hi)` except the last, which also takes values equal to its upper
/// edge so the series maximum is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Automatic binning: [`DEFAULT_BINS`] bins over the data range.
    pub fn auto(values: &[f64]) -> Self {
        Self::with_bins(values, DEFAULT_BINS)
    }

    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Non-finite values are skipped. A constant series is centred in a
    /// range of width 1, an empty one gets empty bins over `[0, 1]`.
    pub fn with_bins(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite = values.iter().copied().filter(|v| v.is_finite());

        let (min, max) = finite
            .clone()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));

        let (lo, hi) = if max > min {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };

        let span = hi - lo;
        let width = if span.is_finite() {
            span / bins as f64
        } else {
            // Span wider than f64::MAX: divide before subtracting.
            hi / bins as f64 - lo / bins as f64
        };
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + i as f64 * width })
            .collect();

        let mut counts = vec![0u64; bins];
        for v in finite {
            counts[bin_index(&edges, lo, width, v)] += 1;
        }

        Histogram { edges, counts }
    }

    /// Total number of values counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(centre, width, count)` for each bin, in order.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(e, &c)| ((e[0] + e[1]) / 2.0, e[1] - e[0], c))
    }
}

/// Bin holding `v`, checked against the stored edges so a value equal to
/// an interior edge always opens the upper bin.
fn bin_index(edges: &[f64], lo: f64, width: f64, v: f64) -> usize {
    let bins = edges.len() - 1;
    let mut pos = (v - lo) / width;
    if !pos.is_finite() {
        pos = v / width - lo / width;
    }
    let mut idx = (pos.floor().max(0.0) as usize).min(bins - 1);
    if idx > 0 && v < edges[idx] {
        idx -= 1;
    } else if idx < bins - 1 && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_uses_ten_bins_over_range() {
        let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        let h = Histogram::auto(&values);

        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.edges.len(), 11);
        assert_eq!(h.edges[0], 0.0);
        assert_eq!(h.edges[10], 100.0);
        assert_eq!(h.total(), 101);
        // 0..=9 in the first bin, 90..=100 in the last (max is inclusive).
        assert_eq!(h.counts[0], 10);
        assert_eq!(h.counts[9], 11);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let h = Histogram::with_bins(&[0.0, 1.0, 2.0, 4.0], 4);
        assert_eq!(h.counts, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_constant_series() {
        let h = Histogram::auto(&[3.0; 7]);
        assert_eq!(h.edges[0], 2.5);
        assert_eq!(h.edges[10], 3.5);
        assert_eq!(h.total(), 7);
        assert_eq!(h.counts.iter().max(), Some(&7));
    }

    #[test]
    fn test_empty_and_non_finite() {
        let h = Histogram::auto(&[]);
        assert_eq!(h.counts.len(), 10);
        assert_eq!(h.total(), 0);
        assert_eq!((h.edges[0], h.edges[10]), (0.0, 1.0));

        let h = Histogram::with_bins(&[f64::NAN, 1.0, f64::INFINITY, 2.0], 2);
        assert_eq!(h.total(), 2);
        assert_eq!(h.counts, vec![1, 1]);
    }

    #[test]
    fn test_zero_bins_means_one() {
        let h = Histogram::with_bins(&[1.0, 2.0, 3.0], 0);
        assert_eq!(h.counts, vec![3]);
    }

    #[test]
    fn test_bars_centres_and_widths() {
        let h = Histogram::with_bins(&[0.0, 10.0], 2);
        let bars: Vec<_> = h.bars().collect();
        assert_eq!(bars, vec![(2.5, 5.0, 1), (7.5, 5.0, 1)]);
    }

    #[test]
    fn test_value_on_interior_edge_opens_upper_bin() {
        for (lo, hi) in [(0.1, 0.9), (0.2, 1.1)] {
            let edges = Histogram::auto(&[lo, hi]).edges;
            for k in 1..10 {
                let h = Histogram::auto(&[lo, hi, edges[k]]);
                assert_eq!(h.edges, edges);
                let expected = if k == 9 { 2 } else { 1 };
                assert_eq!(h.counts[k], expected, "edge {k} ({}) of [{lo}, {hi}]", edges[k]);
            }
        }
    }

    #[test]
    fn test_edge_values_from_literals() {
        for value in [0.18, 0.34] {
            let h = Histogram::auto(&[0.1, 0.9, value]);
            let bin = h
                .edges
                .windows(2)
                .position(|e| value >= e[0] && value < e[1])
                .unwrap();
            let baseline = Histogram::auto(&[0.1, 0.9]);
            assert_eq!(h.edges, baseline.edges);
            assert_eq!(h.counts[bin], baseline.counts[bin] + 1, "{value} in bin {bin}");
        }
    }

    #[test]
    fn test_span_wider_than_f64_max() {
        let h = Histogram::auto(&[-1e308, 1e308]);
        assert!(h.edges.iter().all(|e| e.is_finite()));
        assert_eq!(h.edges[0], -1e308);
        assert_eq!(h.edges[10], 1e308);
        assert_eq!(h.counts[0], 1);
        assert_eq!(h.counts[9], 1);
        assert_eq!(h.total(), 2);
    }
}
