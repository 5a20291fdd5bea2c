//! # beam_core - Simply-Supported Beam Diagram Engine
//!
//! `beam_core` computes reactions, shear and bending-moment diagrams, and
//! deflection and rotation by the unit-load (virtual work) method for a
//! simply-supported span carrying up to three point loads. All inputs and
//! outputs are JSON-serializable so a form, CLI or web front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not NaN propagated into plots
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, AnalysisOptions, BeamConfig, IntegrationPolicy};
//!
//! let config = BeamConfig {
//!     span_in: 120.0,
//!     p1_lb: 1000.0, a_in: 60.0,
//!     p2_lb: 0.0, b_in: 60.0,
//!     p3_lb: 0.0, c_in: 60.0,
//!     x_in: 60.0,
//!     ..BeamConfig::default()
//! };
//! let options = AnalysisOptions::default().with_policy(IntegrationPolicy::FullSpan);
//! let result = analyze(&config, &options).unwrap();
//!
//! let json = serde_json::to_string(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The analysis stages and pipeline
//! - [`units`] - Unit wrappers used for reporting
//! - [`errors`] - Structured errors and warnings
//! - [`file_io`] - JSON analysis requests

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisOptions, BeamAnalysisResult, BeamConfig, IntegrationPolicy};
pub use errors::{AnalysisWarning, CalcError, CalcResult};
pub use file_io::{load_request, parse_request, AnalysisRequest};
