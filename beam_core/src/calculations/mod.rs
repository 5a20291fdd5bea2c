//! # Beam Calculations
//!
//! The analysis engine, one module per stage. Data flows forward only:
//!
//! ```text
//! BeamConfig -> reactions -> {shear, moment} -> virtual moment -> {deflection, rotation}
//! ```
//!
//! - [`grid`] - Uniform sample positions along the span
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`internal_forces`] - Piecewise shear and moment
//! - [`virtual_load`] - Unit-force and unit-couple moment kernels
//! - [`virtual_work`] - Trapezoidal virtual-work integration
//! - [`beam`] - Input validation and the full `analyze` pipeline
//!
//! Every stage is a pure function of its inputs; results can be computed on
//! any number of threads at once.

pub mod beam;
pub mod grid;
pub mod internal_forces;
pub mod reactions;
pub mod virtual_load;
pub mod virtual_work;

// Re-export commonly used types
pub use beam::{analyze, AnalysisOptions, BeamAnalysisResult, BeamConfig, DiagramExtremes};
pub use grid::SampleGrid;
pub use internal_forces::{evaluate_forces, InternalForceField};
pub use reactions::{solve_reactions, PointLoad, ReactionPair};
pub use virtual_load::{unit_couple_moment, unit_load_moment, VirtualAction, VirtualMomentField};
pub use virtual_work::{integrate_virtual_work, DeflectionRotationResult, IntegrationPolicy};
