//! Shear and bending moment sampled along the span.
//!
//! Each sample is compared against the load positions in their literal order
//! (P1@a, then P2@b, then P3@c) using `x <= position`. The first position the
//! sample does not exceed selects the segment, and every load before it in
//! that order is subtracted:
//!
//! | segment        | shear            | moment                              |
//! |----------------|------------------|-------------------------------------|
//! | x ≤ a          | Ra               | Ra·x                                |
//! | a < x ≤ b      | Ra − P1          | Ra·x − P1(x−a)                      |
//! | b < x ≤ c      | Ra − P1 − P2     | Ra·x − P1(x−a) − P2(x−b)            |
//! | x > c          | Ra − P1 − P2 − P3| … − P3(x−c)                         |
//!
//! A sample exactly at a load position takes the state before the jump.
//! Positions are never reordered: with a > b, say, the chain still tests a
//! first, which no longer matches a correct superposition of the loads.
//! [`BeamConfig::validate`](super::beam::BeamConfig::validate) flags that case.

use serde::{Deserialize, Serialize};

use super::grid::SampleGrid;
use super::reactions::PointLoad;

/// Shear (lb) and moment (in-lb), index-aligned with the sample grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalForceField {
    pub shear: Vec<f64>,
    pub moment: Vec<f64>,
}

/// Evaluate shear and moment at every grid sample.
///
/// `left_reaction_lb` is Ra; `loads` are taken in the order given.
pub fn evaluate_forces(
    grid: &SampleGrid,
    left_reaction_lb: f64,
    loads: &[PointLoad],
) -> InternalForceField {
    let mut shear = Vec::with_capacity(grid.len());
    let mut moment = Vec::with_capacity(grid.len());

    for &x in &grid.positions {
        // Loads before the first position x does not pass
        let active = loads
            .iter()
            .position(|load| x <= load.position_in)
            .unwrap_or(loads.len());

        let mut v = left_reaction_lb;
        let mut m = left_reaction_lb * x;
        for load in &loads[..active] {
            v -= load.magnitude_lb;
            m -= load.magnitude_lb * (x - load.position_in);
        }

        shear.push(v);
        moment.push(m);
    }

    log::debug!("evaluated shear and moment at {} samples", grid.len());

    InternalForceField { shear, moment }
}
