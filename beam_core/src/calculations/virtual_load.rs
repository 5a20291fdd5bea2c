//! Virtual (unit-load) moment fields used as integration kernels.
//!
//! A unit downward force at X on a simply-supported span L produces the
//! triangular moment diagram
//!
//! ```text
//! m(x) = x (L - X) / L     for x <  X
//! m(x) = X (L - x) / L     for x >= X
//! ```
//!
//! continuous at X with peak `X (L - X) / L`. Its derivative with respect to
//! the load point X is the moment diagram of a unit clockwise couple at X,
//!
//! ```text
//! m'(x) = -x / L           for x <  X
//! m'(x) = (L - x) / L      for x >= X
//! ```
//!
//! which is the kernel for rotation. It jumps by 1 at X.

use serde::{Deserialize, Serialize};

use super::grid::SampleGrid;

/// Which unit action produced a virtual moment field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VirtualAction {
    /// Unit transverse force; kernel for deflection
    UnitForce,
    /// Unit couple; kernel for rotation
    UnitCouple,
}

/// Virtual moment values, index-aligned with the sample grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMomentField {
    pub action: VirtualAction,
    /// Point X (in) where the unit action is applied
    pub point_in: f64,
    pub values: Vec<f64>,
}

impl VirtualMomentField {
    /// Closed-form value of the field at an arbitrary position
    pub fn value_at(action: VirtualAction, x: f64, point_in: f64, span_in: f64) -> f64 {
        match action {
            VirtualAction::UnitForce => {
                if x < point_in {
                    x * (span_in - point_in) / span_in
                } else {
                    point_in * (span_in - x) / span_in
                }
            }
            VirtualAction::UnitCouple => {
                if x < point_in {
                    -x / span_in
                } else {
                    (span_in - x) / span_in
                }
            }
        }
    }

    /// Peak of the unit-force diagram, X(L - X)/L
    pub fn unit_force_peak(point_in: f64, span_in: f64) -> f64 {
        point_in * (span_in - point_in) / span_in
    }

    fn sample(grid: &SampleGrid, action: VirtualAction, point_in: f64, span_in: f64) -> Self {
        let values = grid
            .positions
            .iter()
            .map(|&x| Self::value_at(action, x, point_in, span_in))
            .collect();

        VirtualMomentField {
            action,
            point_in,
            values,
        }
    }
}

/// Moment field of a unit transverse load at `point_in`.
pub fn unit_load_moment(grid: &SampleGrid, point_in: f64, span_in: f64) -> VirtualMomentField {
    VirtualMomentField::sample(grid, VirtualAction::UnitForce, point_in, span_in)
}

/// Moment field of a unit couple at `point_in`.
pub fn unit_couple_moment(grid: &SampleGrid, point_in: f64, span_in: f64) -> VirtualMomentField {
    VirtualMomentField::sample(grid, VirtualAction::UnitCouple, point_in, span_in)
}
