//! Support reactions of a simply-supported span under point loads.
//!
//! Moment equilibrium about the left support gives
//! `Rb = Σ Pᵢ·aᵢ / L`; vertical force equilibrium gives `Ra = Σ Pᵢ − Rb`.
//! Loads are positive downward, reactions positive upward.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A concentrated load: magnitude (lb, positive downward) at a position
/// (in from the left support).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    pub magnitude_lb: f64,
    pub position_in: f64,
}

impl PointLoad {
    pub fn new(magnitude_lb: f64, position_in: f64) -> Self {
        PointLoad {
            magnitude_lb,
            position_in,
        }
    }
}

/// Vertical support reactions (lb), positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionPair {
    /// Left support reaction Ra
    pub left_lb: f64,
    /// Right support reaction Rb
    pub right_lb: f64,
}

impl ReactionPair {
    /// Ra + Rb, equal to the total applied load
    pub fn total_lb(&self) -> f64 {
        self.left_lb + self.right_lb
    }
}

/// Solve the reactions for three point loads P1@a, P2@b, P3@c on span L.
pub fn solve_reactions(
    p1: f64,
    p2: f64,
    p3: f64,
    a: f64,
    b: f64,
    c: f64,
    span_in: f64,
) -> CalcResult<ReactionPair> {
    solve_reactions_for(
        &[PointLoad::new(p1, a), PointLoad::new(p2, b), PointLoad::new(p3, c)],
        span_in,
    )
}

/// Solve the reactions for any set of point loads on span L.
pub fn solve_reactions_for(loads: &[PointLoad], span_in: f64) -> CalcResult<ReactionPair> {
    if !span_in.is_finite() || span_in <= 0.0 {
        return Err(CalcError::degenerate_span(span_in));
    }

    let total: f64 = loads.iter().map(|l| l.magnitude_lb).sum();
    let moment_about_left: f64 = loads.iter().map(|l| l.magnitude_lb * l.position_in).sum();

    let right_lb = moment_about_left / span_in;
    let left_lb = total - right_lb;

    if !left_lb.is_finite() || !right_lb.is_finite() {
        return Err(CalcError::non_finite(
            "reaction solve",
            format!("Ra = {}, Rb = {}", left_lb, right_lb),
        ));
    }

    log::debug!("reactions: Ra = {:.6} lb, Rb = {:.6} lb", left_lb, right_lb);

    Ok(ReactionPair { left_lb, right_lb })
}
