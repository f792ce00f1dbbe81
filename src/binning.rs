//! Altitude binning of profile quantities.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BinningError {
    #[error("invalid bin range: start {start}, stop {stop}, width {width}")]
    InvalidRange { start: f64, stop: f64, width: f64 },

    #[error("at least two bin edges are required, got {0}")]
    TooFewEdges(usize),

    #[error("bin edges must be strictly increasing")]
    UnorderedEdges,

    #[error("values ({values}) and altitude ({altitude}) have different lengths")]
    MismatchedLengths { values: usize, altitude: usize },
}

/// Mean of the samples falling in `(lower, upper]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedValue {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub mean: Option<f64>,
}

/// Upper limit on the number of edges `uniform` will generate
pub const MAX_BINS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AltitudeBins {
    edges: Vec<f64>,
}

impl AltitudeBins {
    pub fn new(edges: Vec<f64>) -> Result<Self, BinningError> {
        if edges.len() < 2 {
            return Err(BinningError::TooFewEdges(edges.len()));
        }
        if edges.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(BinningError::UnorderedEdges);
        }
        Ok(Self { edges })
    }

    /// Edges `start, start + width, ...` strictly below `stop`, at most
    /// [`MAX_BINS`] of them.
    pub fn uniform(start: f64, stop: f64, width: f64) -> Result<Self, BinningError> {
        let valid = start.is_finite() && stop.is_finite() && width.is_finite();
        if !valid || width <= 0.0 || stop <= start {
            return Err(BinningError::InvalidRange { start, stop, width });
        }

        let count = ((stop - start) / width).ceil();
        if count > MAX_BINS as f64 {
            return Err(BinningError::InvalidRange { start, stop, width });
        }
        let count = count as usize;
        let edges = (0..count)
            .map(|i| start + i as f64 * width)
            .filter(|&edge| edge < stop)
            .collect();
        Self::new(edges)
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Averages `values` per altitude bin. Samples outside the outer edges and
    /// NaN values are dropped.
    pub fn mean_by_bin(
        &self,
        values: &[f64],
        altitude: &[f64],
    ) -> Result<Vec<BinnedValue>, BinningError> {
        if values.len() != altitude.len() {
            return Err(BinningError::MismatchedLengths {
                values: values.len(),
                altitude: altitude.len(),
            });
        }

        let mut sums = vec![0.0; self.len()];
        let mut counts = vec![0usize; self.len()];

        for (&value, &z) in values.iter().zip(altitude) {
            if value.is_nan() {
                continue;
            }
            if let Some(bin) = self.bin_index(z) {
                sums[bin] += value;
                counts[bin] += 1;
            }
        }

        Ok(self
            .edges
            .windows(2)
            .zip(sums.iter().zip(&counts))
            .map(|(edge, (&sum, &count))| BinnedValue {
                lower: edge[0],
                upper: edge[1],
                count,
                mean: (count > 0).then(|| sum / count as f64),
            })
            .collect())
    }

    fn bin_index(&self, z: f64) -> Option<usize> {
        let first = self.edges[0];
        let last = self.edges[self.edges.len() - 1];
        if !(z > first && z <= last) {
            return None;
        }
        // first edge >= z closes the bin
        let upper = self.edges.partition_point(|&edge| edge < z);
        Some(upper - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_edges_follow_arange() {
        let bins = AltitudeBins::uniform(0.0, 15000.0, 100.0).unwrap();
        assert_eq!(bins.edges().len(), 150);
        assert_eq!(bins.edges()[0], 0.0);
        assert_eq!(bins.edges()[149], 14900.0);
        assert_eq!(bins.len(), 149);

        let bins = AltitudeBins::uniform(0.0, 350.0, 100.0).unwrap();
        assert_eq!(bins.edges(), &[0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            AltitudeBins::uniform(0.0, 1000.0, 0.0),
            Err(BinningError::InvalidRange { .. })
        ));
        assert!(AltitudeBins::uniform(1000.0, 0.0, 100.0).is_err());
        assert_eq!(
            AltitudeBins::uniform(0.0, 50.0, 100.0),
            Err(BinningError::TooFewEdges(1))
        );
        assert_eq!(
            AltitudeBins::new(vec![0.0, 100.0, 100.0]),
            Err(BinningError::UnorderedEdges)
        );
    }

    #[test]
    fn test_uniform_rejects_excessive_bin_count() {
        assert_eq!(
            AltitudeBins::uniform(0.0, 1e12, 1e-3),
            Err(BinningError::InvalidRange {
                start: 0.0,
                stop: 1e12,
                width: 1e-3
            })
        );
        assert!(AltitudeBins::uniform(0.0, 1e300, f64::MIN_POSITIVE).is_err());

        let bins = AltitudeBins::uniform(0.0, MAX_BINS as f64, 1.0).unwrap();
        assert_eq!(bins.edges().len(), MAX_BINS);
    }

    #[test]
    fn test_mean_by_bin_is_right_closed() {
        let bins = AltitudeBins::new(vec![0.0, 100.0, 200.0, 300.0]).unwrap();
        let altitude = [0.0, 50.0, 100.0, 150.0, 180.0, 400.0];
        let values = [9.0, 1.0, 3.0, 4.0, 8.0, 7.0];

        let binned = bins.mean_by_bin(&values, &altitude).unwrap();
        assert_eq!(binned.len(), 3);

        // 0 m sits on the open lower edge, 400 m above the last edge
        assert_eq!(binned[0].count, 2);
        assert_eq!(binned[0].mean, Some(2.0));
        assert_eq!(binned[1].count, 2);
        assert_eq!(binned[1].mean, Some(6.0));
        assert_eq!(binned[2].count, 0);
        assert_eq!(binned[2].mean, None);
        assert_eq!((binned[1].lower, binned[1].upper), (100.0, 200.0));
    }

    #[test]
    fn test_mean_by_bin_skips_nan() {
        let bins = AltitudeBins::new(vec![0.0, 100.0]).unwrap();
        let binned = bins
            .mean_by_bin(&[f64::NAN, 2.0], &[10.0, 20.0])
            .unwrap();
        assert_eq!(binned[0].count, 1);
        assert_eq!(binned[0].mean, Some(2.0));
    }

    #[test]
    fn test_mean_by_bin_rejects_mismatched_lengths() {
        let bins = AltitudeBins::new(vec![0.0, 100.0]).unwrap();
        assert_eq!(
            bins.mean_by_bin(&[1.0, 2.0], &[10.0]),
            Err(BinningError::MismatchedLengths {
                values: 2,
                altitude: 1
            })
        );
    }
}
