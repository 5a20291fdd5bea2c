//! Uniform sample grid along the span.
//!
//! Positions run from 0 to L inclusive with spacing dx = L/N, giving N + 1
//! samples. Sample `i` sits at `L * i / N`, so the last sample is exactly L.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default number of intervals along the span
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Largest accepted number of intervals
pub const MAX_RESOLUTION: usize = 10_000_000;

/// Ordered sample positions (in) from the left support to the right support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    /// Span length (in)
    pub span_in: f64,
    /// Number of intervals N
    pub resolution: usize,
    /// Sample positions, N + 1 of them
    pub positions: Vec<f64>,
}

impl SampleGrid {
    /// Build a grid of `resolution` intervals over `span_in`.
    pub fn new(span_in: f64, resolution: usize) -> CalcResult<Self> {
        if !span_in.is_finite() || span_in <= 0.0 {
            return Err(CalcError::degenerate_span(span_in));
        }
        if resolution == 0 {
            return Err(CalcError::invalid_input(
                "resolution",
                resolution.to_string(),
                "Resolution must be at least 1 interval",
            ));
        }
        if resolution > MAX_RESOLUTION {
            return Err(CalcError::invalid_input(
                "resolution",
                resolution.to_string(),
                format!("Resolution must not exceed {} intervals", MAX_RESOLUTION),
            ));
        }

        let positions = (0..=resolution)
            .map(|i| span_in * i as f64 / resolution as f64)
            .collect();

        Ok(SampleGrid {
            span_in,
            resolution,
            positions,
        })
    }

    /// Grid spacing dx (in)
    pub fn dx(&self) -> f64 {
        self.span_in / self.resolution as f64
    }

    /// Number of samples (N + 1)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Index of the sample nearest to `x_in`, clamped to the grid.
    pub fn nearest_index(&self, x_in: f64) -> usize {
        let raw = (x_in / self.dx()).round();
        if raw <= 0.0 || raw.is_nan() {
            0
        } else {
            (raw as usize).min(self.resolution)
        }
    }
}
