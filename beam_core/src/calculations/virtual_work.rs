//! Deflection and rotation by the unit-load (virtual work) method.
//!
//! For a point X on the span,
//!
//! ```text
//! Δ(X) = ∫₀ᴸ M(x) m(x) dx / EI        m  = unit-force moment at X
//! θ(X) = ∫₀ᴸ M(x) m'(x) dx / EI       m' = unit-couple moment at X
//! ```
//!
//! Both integrals are evaluated with the trapezoidal rule over the sample
//! grid. Positive deflection is downward for downward loads; positive
//! rotation means downward deflection grows to the right.
//!
//! Two policies are available:
//!
//! - [`IntegrationPolicy::FullSpan`] evaluates the definite integrals over the
//!   whole span. Only the two scalars are produced.
//! - [`IntegrationPolicy::Cumulative`] keeps the running integral at every
//!   sample, producing deflection and rotation curves that start at exactly
//!   zero, and reads the scalars at the sample nearest X. The running
//!   integral only reaches the full-span value at x = L.

use serde::{Deserialize, Serialize};

use super::grid::SampleGrid;
use super::virtual_load::{VirtualAction, VirtualMomentField};
use crate::errors::{CalcError, CalcResult};
use crate::units::FlexuralRigidity;

/// How the virtual-work integrals are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationPolicy {
    /// Definite integral over [0, L]; scalars only
    FullSpan,
    /// Running integral at every sample; scalars read at the sample nearest X
    #[default]
    Cumulative,
}

impl IntegrationPolicy {
    pub const ALL: [IntegrationPolicy; 2] = [IntegrationPolicy::FullSpan, IntegrationPolicy::Cumulative];

    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationPolicy::FullSpan => "Full-span definite integral",
            IntegrationPolicy::Cumulative => "Cumulative integral",
        }
    }
}

impl std::fmt::Display for IntegrationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Deflection and rotation at the point of interest, with curves when the
/// policy produces them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionRotationResult {
    pub policy: IntegrationPolicy,
    /// Point of interest X (in)
    pub evaluation_point_in: f64,
    /// Grid index the scalars were read at (last sample under FullSpan)
    pub evaluation_index: usize,
    /// Deflection at X (in), positive downward
    pub deflection_at_x_in: f64,
    /// Rotation at X (rad)
    pub rotation_at_x_rad: f64,
    /// Running deflection integral (in), Cumulative policy only
    pub deflection_curve: Option<Vec<f64>>,
    /// Running rotation integral (rad), Cumulative policy only
    pub rotation_curve: Option<Vec<f64>>,
}

/// Trapezoidal integral of `ys` sampled at `xs`.
///
/// Extra trailing samples in the longer slice are ignored.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}

/// Running trapezoidal integral of `ys` sampled at `xs`.
///
/// The result has one entry per sample; entry 0 is exactly zero.
pub fn cumulative_trapezoid(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n);
    let mut running = 0.0;
    out.push(running);
    for k in 1..n {
        running += 0.5 * (ys[k - 1] + ys[k]) * (xs[k] - xs[k - 1]);
        out.push(running);
    }
    out
}

fn check_length(field: &str, len: usize, expected: usize) -> CalcResult<()> {
    if len != expected {
        return Err(CalcError::invalid_input(
            field,
            len.to_string(),
            format!("Expected {} samples to match the grid", expected),
        ));
    }
    Ok(())
}

fn check_action(field: &str, field_value: &VirtualMomentField, expected: VirtualAction) -> CalcResult<()> {
    if field_value.action != expected {
        return Err(CalcError::invalid_input(
            field,
            format!("{:?}", field_value.action),
            format!("Expected a {:?} virtual moment field", expected),
        ));
    }
    Ok(())
}

fn ensure_finite(stage: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::non_finite(stage, format!("integral evaluated to {}", value)))
    }
}

/// Integrate real moment against the unit-force and unit-couple kernels.
///
/// `real_moment`, `unit_load` and `unit_couple` must all be aligned with
/// `grid`. The point of interest is taken from `unit_load`.
pub fn integrate_virtual_work(
    grid: &SampleGrid,
    real_moment: &[f64],
    unit_load: &VirtualMomentField,
    unit_couple: &VirtualMomentField,
    rigidity: FlexuralRigidity,
    policy: IntegrationPolicy,
) -> CalcResult<DeflectionRotationResult> {
    let ei = rigidity.0;
    if !ei.is_finite() || ei <= 0.0 {
        return Err(CalcError::non_positive_rigidity("ei", ei));
    }

    check_action("unit_load", unit_load, VirtualAction::UnitForce)?;
    check_action("unit_couple", unit_couple, VirtualAction::UnitCouple)?;
    check_length("real_moment", real_moment.len(), grid.len())?;
    check_length("unit_load", unit_load.values.len(), grid.len())?;
    check_length("unit_couple", unit_couple.values.len(), grid.len())?;

    let deflection_integrand: Vec<f64> = real_moment
        .iter()
        .zip(&unit_load.values)
        .map(|(m_real, m_virtual)| m_real * m_virtual / ei)
        .collect();
    let rotation_integrand: Vec<f64> = real_moment
        .iter()
        .zip(&unit_couple.values)
        .map(|(m_real, m_virtual)| m_real * m_virtual / ei)
        .collect();

    let point_in = unit_load.point_in;

    let result = match policy {
        IntegrationPolicy::FullSpan => {
            let deflection = trapezoid(&grid.positions, &deflection_integrand);
            let rotation = trapezoid(&grid.positions, &rotation_integrand);

            DeflectionRotationResult {
                policy,
                evaluation_point_in: point_in,
                evaluation_index: grid.len() - 1,
                deflection_at_x_in: ensure_finite("deflection integral", deflection)?,
                rotation_at_x_rad: ensure_finite("rotation integral", rotation)?,
                deflection_curve: None,
                rotation_curve: None,
            }
        }
        IntegrationPolicy::Cumulative => {
            let deflection_curve = cumulative_trapezoid(&grid.positions, &deflection_integrand);
            let rotation_curve = cumulative_trapezoid(&grid.positions, &rotation_integrand);

            let index = grid.nearest_index(point_in);
            let deflection = deflection_curve[index];
            let rotation = rotation_curve[index];

            // Every partial sum is finite iff the final one is
            ensure_finite("deflection integral", deflection_curve[grid.len() - 1])?;
            ensure_finite("rotation integral", rotation_curve[grid.len() - 1])?;

            DeflectionRotationResult {
                policy,
                evaluation_point_in: point_in,
                evaluation_index: index,
                deflection_at_x_in: deflection,
                rotation_at_x_rad: rotation,
                deflection_curve: Some(deflection_curve),
                rotation_curve: Some(rotation_curve),
            }
        }
    };

    log::debug!(
        "virtual work ({}): deflection = {:.6e} in, rotation = {:.6e} rad at index {}",
        policy,
        result.deflection_at_x_in,
        result.rotation_at_x_rad,
        result.evaluation_index
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::internal_forces::evaluate_forces;
    use crate::calculations::reactions::{solve_reactions_for, PointLoad};
    use crate::calculations::virtual_load::{unit_couple_moment, unit_load_moment};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    /// Single point load P at `load_in` on span L, integrated at `point_in`
    fn single_load(
        p: f64,
        load_in: f64,
        span: f64,
        point_in: f64,
        resolution: usize,
        policy: IntegrationPolicy,
    ) -> DeflectionRotationResult {
        let grid = SampleGrid::new(span, resolution).unwrap();
        let loads = [PointLoad::new(p, load_in)];
        let r = solve_reactions_for(&loads, span).unwrap();
        let forces = evaluate_forces(&grid, r.left_lb, &loads);
        let unit = unit_load_moment(&grid, point_in, span);
        let couple = unit_couple_moment(&grid, point_in, span);
        integrate_virtual_work(
            &grid,
            &forces.moment,
            &unit,
            &couple,
            FlexuralRigidity::from_parts(29_000_000.0, 100.0),
            policy,
        )
        .unwrap()
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 2.0, 4.0, 6.0];
        assert!((trapezoid(&xs, &ys) - 9.0).abs() < 1e-12);
        assert_eq!(cumulative_trapezoid(&xs, &ys), vec![0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_cumulative_empty_and_single() {
        assert!(cumulative_trapezoid(&[], &[]).is_empty());
        assert_eq!(cumulative_trapezoid(&[1.0], &[5.0]), vec![0.0]);
    }

    #[test]
    fn test_full_span_midspan_deflection_matches_closed_form() {
        // Δ = PL³ / 48EI
        let (p, l) = (1000.0, 120.0);
        let result = single_load(p, 60.0, l, 60.0, 1000, IntegrationPolicy::FullSpan);
        let expected = p * l.powi(3) / (48.0 * 2.9e9);

        assert!(approx_eq(result.deflection_at_x_in, expected, 1e-4));
        assert!(result.deflection_curve.is_none());
        assert!(result.rotation_curve.is_none());
    }

    #[test]
    fn test_full_span_end_rotation_matches_closed_form() {
        // θ at the left support = PL² / 16EI for a midspan load
        let (p, l) = (1000.0, 120.0);
        let result = single_load(p, 60.0, l, 0.0, 1000, IntegrationPolicy::FullSpan);
        let expected = p * l * l / (16.0 * 2.9e9);

        assert!(approx_eq(result.rotation_at_x_rad, expected, 1e-4));
    }

    #[test]
    fn test_full_span_midspan_rotation_vanishes_for_symmetric_load() {
        let result = single_load(1000.0, 60.0, 120.0, 60.0, 1000, IntegrationPolicy::FullSpan);
        let end = single_load(1000.0, 60.0, 120.0, 0.0, 1000, IntegrationPolicy::FullSpan);
        // First-order error from the couple's jump at X, far below the end slope
        assert!(result.rotation_at_x_rad.abs() < 1e-2 * end.rotation_at_x_rad);
    }

    #[test]
    fn test_cumulative_curve_starts_at_zero_and_ends_at_full_span() {
        let cumulative = single_load(500.0, 40.0, 100.0, 30.0, 1000, IntegrationPolicy::Cumulative);
        let full = single_load(500.0, 40.0, 100.0, 30.0, 1000, IntegrationPolicy::FullSpan);

        let deflection = cumulative.deflection_curve.as_ref().unwrap();
        let rotation = cumulative.rotation_curve.as_ref().unwrap();
        assert_eq!(deflection.len(), 1001);
        assert_eq!(deflection[0], 0.0);
        assert_eq!(rotation[0], 0.0);

        assert!(approx_eq(deflection[1000], full.deflection_at_x_in, 1e-12));
        assert!(approx_eq(rotation[1000], full.rotation_at_x_rad, 1e-12));
    }

    #[test]
    fn test_cumulative_reads_nearest_sample() {
        let result = single_load(500.0, 40.0, 100.0, 30.04, 1000, IntegrationPolicy::Cumulative);
        assert_eq!(result.evaluation_index, 300);
        let curve = result.deflection_curve.as_ref().unwrap();
        assert_eq!(result.deflection_at_x_in, curve[300]);
    }

    #[test]
    fn test_deflection_converges_with_resolution() {
        for policy in IntegrationPolicy::ALL {
            let coarse = single_load(1000.0, 35.0, 120.0, 60.0, 1000, policy);
            let fine = single_load(1000.0, 35.0, 120.0, 60.0, 2000, policy);
            assert!(approx_eq(coarse.deflection_at_x_in, fine.deflection_at_x_in, 1e-4));
        }
    }

    #[test]
    fn test_zero_moment_gives_zero_response() {
        let grid = SampleGrid::new(10.0, 100).unwrap();
        let moment = vec![0.0; grid.len()];
        let unit = unit_load_moment(&grid, 5.0, 10.0);
        let couple = unit_couple_moment(&grid, 5.0, 10.0);
        let result = integrate_virtual_work(
            &grid,
            &moment,
            &unit,
            &couple,
            FlexuralRigidity(2.9e9),
            IntegrationPolicy::Cumulative,
        )
        .unwrap();

        assert_eq!(result.deflection_at_x_in, 0.0);
        assert_eq!(result.rotation_at_x_rad, 0.0);
        assert!(result.deflection_curve.unwrap().iter().all(|&d| d == 0.0));
        assert!(result.rotation_curve.unwrap().iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_rejects_non_positive_rigidity() {
        let grid = SampleGrid::new(10.0, 10).unwrap();
        let moment = vec![1.0; grid.len()];
        let unit = unit_load_moment(&grid, 5.0, 10.0);
        let couple = unit_couple_moment(&grid, 5.0, 10.0);

        for ei in [0.0, -1.0] {
            let err = integrate_virtual_work(
                &grid,
                &moment,
                &unit,
                &couple,
                FlexuralRigidity(ei),
                IntegrationPolicy::FullSpan,
            )
            .unwrap_err();
            assert_eq!(err.error_code(), "NON_POSITIVE_RIGIDITY");
        }
    }

    #[test]
    fn test_rejects_misaligned_inputs() {
        let grid = SampleGrid::new(10.0, 10).unwrap();
        let unit = unit_load_moment(&grid, 5.0, 10.0);
        let couple = unit_couple_moment(&grid, 5.0, 10.0);

        let err = integrate_virtual_work(
            &grid,
            &[0.0; 3],
            &unit,
            &couple,
            FlexuralRigidity(1.0),
            IntegrationPolicy::Cumulative,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // Kernels swapped
        let err = integrate_virtual_work(
            &grid,
            &vec![0.0; grid.len()],
            &couple,
            &unit,
            FlexuralRigidity(1.0),
            IntegrationPolicy::Cumulative,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&IntegrationPolicy::FullSpan).unwrap();
        assert_eq!(json, "\"full_span\"");
        let policy: IntegrationPolicy = serde_json::from_str("\"cumulative\"").unwrap();
        assert_eq!(policy, IntegrationPolicy::Cumulative);
    }
}
