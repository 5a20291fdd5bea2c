//! # Simply-Supported Beam Analysis
//!
//! Runs the full pipeline for a simply-supported span under three point loads:
//! reactions, shear and moment diagrams, then deflection and rotation at a
//! point of interest by virtual work.
//!
//! ## Assumptions
//!
//! - Pin-roller supports at x = 0 and x = L
//! - Exactly three concentrated loads P1@a, P2@b, P3@c (any may be zero)
//! - Constant EI along the span
//! - Units: lb, in, psi, in^4
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{analyze, AnalysisOptions, BeamConfig};
//!
//! let config = BeamConfig::default(); // 3 x 100 lb at 3, 4, 5 in on a 10 in span
//! let result = analyze(&config, &AnalysisOptions::default()).unwrap();
//!
//! assert!((result.reactions.left_lb - 180.0).abs() < 1e-9);
//! assert!((result.reactions.right_lb - 120.0).abs() < 1e-9);
//! for line in result.summary_lines() {
//!     println!("{}", line);
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::grid::{SampleGrid, DEFAULT_RESOLUTION};
use super::internal_forces::{evaluate_forces, InternalForceField};
use super::reactions::{solve_reactions, PointLoad, ReactionPair};
use super::virtual_load::{unit_couple_moment, unit_load_moment};
use super::virtual_work::{integrate_virtual_work, DeflectionRotationResult, IntegrationPolicy};
use crate::errors::{AnalysisWarning, CalcError, CalcResult};
use crate::units::{FlexuralRigidity, InchPounds, Inches, Pounds, Radians};

/// Input parameters for the beam.
///
/// Missing fields in JSON fall back to [`BeamConfig::default`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_in": 10.0,
///   "p1_lb": 100.0, "p2_lb": 100.0, "p3_lb": 100.0,
///   "a_in": 3.0, "b_in": 4.0, "c_in": 5.0,
///   "x_in": 5.0,
///   "e_psi": 29000000.0,
///   "i_in4": 100.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Span length L (in)
    pub span_in: f64,
    /// First load magnitude P1 (lb, positive downward)
    pub p1_lb: f64,
    /// Second load magnitude P2 (lb)
    pub p2_lb: f64,
    /// Third load magnitude P3 (lb)
    pub p3_lb: f64,
    /// Position of P1 from the left support (in)
    pub a_in: f64,
    /// Position of P2 (in)
    pub b_in: f64,
    /// Position of P3 (in)
    pub c_in: f64,
    /// Point of interest X for deflection and rotation (in)
    pub x_in: f64,
    /// Modulus of elasticity E (psi)
    pub e_psi: f64,
    /// Moment of inertia I (in^4)
    pub i_in4: f64,
}

impl Default for BeamConfig {
    fn default() -> Self {
        BeamConfig {
            span_in: 10.0,
            p1_lb: 100.0,
            p2_lb: 100.0,
            p3_lb: 100.0,
            a_in: 3.0,
            b_in: 4.0,
            c_in: 5.0,
            x_in: 5.0,
            e_psi: 29_000_000.0,
            i_in4: 100.0,
        }
    }
}

impl BeamConfig {
    /// The three loads in literal order: P1@a, P2@b, P3@c
    pub fn loads(&self) -> [PointLoad; 3] {
        [
            PointLoad::new(self.p1_lb, self.a_in),
            PointLoad::new(self.p2_lb, self.b_in),
            PointLoad::new(self.p3_lb, self.c_in),
        ]
    }

    /// Total applied load (lb)
    pub fn total_load_lb(&self) -> f64 {
        self.p1_lb + self.p2_lb + self.p3_lb
    }

    /// Flexural rigidity EI (lb-in^2)
    pub fn rigidity(&self) -> FlexuralRigidity {
        FlexuralRigidity::from_parts(self.e_psi, self.i_in4)
    }

    fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("span_in", self.span_in),
            ("p1_lb", self.p1_lb),
            ("p2_lb", self.p2_lb),
            ("p3_lb", self.p3_lb),
            ("a_in", self.a_in),
            ("b_in", self.b_in),
            ("c_in", self.c_in),
            ("x_in", self.x_in),
            ("e_psi", self.e_psi),
            ("i_in4", self.i_in4),
        ]
    }

    /// Validate input parameters.
    ///
    /// Fails on non-finite values, a non-positive span, non-positive E or I,
    /// or a product E·I that overflows.
    /// Positions outside the span and unordered load positions are returned
    /// as warnings; the analysis can still run.
    pub fn validate(&self) -> CalcResult<Vec<AnalysisWarning>> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        if self.span_in <= 0.0 {
            return Err(CalcError::degenerate_span(self.span_in));
        }
        if self.e_psi <= 0.0 {
            return Err(CalcError::non_positive_rigidity("e_psi", self.e_psi));
        }
        if self.i_in4 <= 0.0 {
            return Err(CalcError::non_positive_rigidity("i_in4", self.i_in4));
        }
        let ei = self.rigidity().0;
        if !ei.is_finite() {
            return Err(CalcError::invalid_input(
                "ei",
                ei.to_string(),
                "E * I overflows; flexural rigidity must be finite",
            ));
        }

        let mut warnings = Vec::new();
        for (field, value) in [
            ("a_in", self.a_in),
            ("b_in", self.b_in),
            ("c_in", self.c_in),
            ("x_in", self.x_in),
        ] {
            if value < 0.0 || value > self.span_in {
                warnings.push(AnalysisWarning::OutOfRangeParameter {
                    field: field.to_string(),
                    value,
                    span: self.span_in,
                });
            }
        }
        if self.a_in > self.b_in || self.b_in > self.c_in {
            warnings.push(AnalysisWarning::UnorderedLoadPositions {
                a: self.a_in,
                b: self.b_in,
                c: self.c_in,
            });
        }

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        Ok(warnings)
    }
}

/// Numerical settings for an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Number of grid intervals N (N + 1 samples)
    pub resolution: usize,
    /// How deflection and rotation integrals are evaluated
    pub policy: IntegrationPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            resolution: DEFAULT_RESOLUTION,
            policy: IntegrationPolicy::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_policy(mut self, policy: IntegrationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Peak diagram values and where they occur
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramExtremes {
    /// Largest shear magnitude (lb)
    pub max_shear_lb: f64,
    pub max_shear_position_in: f64,
    /// Largest (most positive) moment (in-lb)
    pub max_moment_inlb: f64,
    pub max_moment_position_in: f64,
    /// Smallest (most negative) moment (in-lb)
    pub min_moment_inlb: f64,
    pub min_moment_position_in: f64,
}

impl DiagramExtremes {
    fn from_forces(grid: &SampleGrid, forces: &InternalForceField) -> Self {
        let mut extremes = DiagramExtremes {
            max_shear_lb: 0.0,
            max_shear_position_in: 0.0,
            max_moment_inlb: f64::NEG_INFINITY,
            max_moment_position_in: 0.0,
            min_moment_inlb: f64::INFINITY,
            min_moment_position_in: 0.0,
        };

        for ((&x, &v), &m) in grid.positions.iter().zip(&forces.shear).zip(&forces.moment) {
            if v.abs() > extremes.max_shear_lb {
                extremes.max_shear_lb = v.abs();
                extremes.max_shear_position_in = x;
            }
            if m > extremes.max_moment_inlb {
                extremes.max_moment_inlb = m;
                extremes.max_moment_position_in = x;
            }
            if m < extremes.min_moment_inlb {
                extremes.min_moment_inlb = m;
                extremes.min_moment_position_in = x;
            }
        }

        extremes
    }
}

/// Everything a presentation layer needs to chart and report one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysisResult {
    pub config: BeamConfig,
    pub options: AnalysisOptions,
    pub reactions: ReactionPair,
    pub grid: SampleGrid,
    pub forces: InternalForceField,
    pub response: DeflectionRotationResult,
    pub extremes: DiagramExtremes,
    pub warnings: Vec<AnalysisWarning>,
}

fn pairs(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

impl BeamAnalysisResult {
    /// (x, shear) points for plotting
    pub fn shear_diagram(&self) -> Vec<(f64, f64)> {
        pairs(&self.grid.positions, &self.forces.shear)
    }

    /// (x, moment) points for plotting
    pub fn moment_diagram(&self) -> Vec<(f64, f64)> {
        pairs(&self.grid.positions, &self.forces.moment)
    }

    /// (x, deflection) points, when the policy produced a curve
    pub fn deflection_diagram(&self) -> Option<Vec<(f64, f64)>> {
        self.response
            .deflection_curve
            .as_ref()
            .map(|curve| pairs(&self.grid.positions, curve))
    }

    /// (x, rotation) points, when the policy produced a curve
    pub fn rotation_diagram(&self) -> Option<Vec<(f64, f64)>> {
        self.response
            .rotation_curve
            .as_ref()
            .map(|curve| pairs(&self.grid.positions, curve))
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Human-readable report of reactions, extremes and the readout at X
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Ra = {}", Pounds(self.reactions.left_lb)),
            format!("Rb = {}", Pounds(self.reactions.right_lb)),
            format!(
                "|V|max = {} at x = {:.6} in",
                Pounds(self.extremes.max_shear_lb),
                self.extremes.max_shear_position_in
            ),
            format!(
                "Mmax = {} at x = {:.6} in",
                InchPounds(self.extremes.max_moment_inlb),
                self.extremes.max_moment_position_in
            ),
            format!(
                "Mmin = {} at x = {:.6} in",
                InchPounds(self.extremes.min_moment_inlb),
                self.extremes.min_moment_position_in
            ),
            format!(
                "Deflection at X = {:.6} in: {}",
                self.config.x_in,
                Inches(self.response.deflection_at_x_in)
            ),
            format!(
                "Rotation at X = {:.6} in: {}",
                self.config.x_in,
                Radians(self.response.rotation_at_x_rad)
            ),
            format!(
                "EI = {}, N = {}, {}",
                self.config.rigidity(),
                self.options.resolution,
                self.options.policy
            ),
        ];
        for warning in &self.warnings {
            lines.push(format!("Warning: {}", warning));
        }
        lines
    }
}

/// Analyze a beam configuration.
///
/// Validation failures stop the run before any array is computed.
pub fn analyze(config: &BeamConfig, options: &AnalysisOptions) -> CalcResult<BeamAnalysisResult> {
    let warnings = config.validate()?;

    let grid = SampleGrid::new(config.span_in, options.resolution)?;
    log::debug!(
        "analyzing L = {} in over {} samples ({})",
        config.span_in,
        grid.len(),
        options.policy
    );

    let reactions = solve_reactions(
        config.p1_lb,
        config.p2_lb,
        config.p3_lb,
        config.a_in,
        config.b_in,
        config.c_in,
        config.span_in,
    )?;

    let forces = evaluate_forces(&grid, reactions.left_lb, &config.loads());
    if forces.moment.iter().chain(&forces.shear).any(|v| !v.is_finite()) {
        return Err(CalcError::non_finite(
            "internal forces",
            "shear or moment evaluated to NaN or infinity",
        ));
    }

    let unit_load = unit_load_moment(&grid, config.x_in, config.span_in);
    let unit_couple = unit_couple_moment(&grid, config.x_in, config.span_in);

    let response = integrate_virtual_work(
        &grid,
        &forces.moment,
        &unit_load,
        &unit_couple,
        config.rigidity(),
        options.policy,
    )?;

    let extremes = DiagramExtremes::from_forces(&grid, &forces);

    Ok(BeamAnalysisResult {
        config: *config,
        options: *options,
        reactions,
        grid,
        forces,
        response,
        extremes,
        warnings,
    })
}
