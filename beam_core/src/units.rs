//! # Unit Types
//!
//! Lightweight newtype wrappers used when presenting analysis results. The
//! engine itself computes on plain `f64` in a single consistent unit system:
//!
//! - Length: inches (in)
//! - Force: pounds (lb)
//! - Modulus of elasticity: pounds per square inch (psi)
//! - Moment of inertia: in^4
//! - Moment: inch-pounds (in-lb)
//! - Rotation: radians
//!
//! Each wrapper serializes as a bare number and formats with its unit suffix.
//! Forces and moments print with 6 decimals; deflection and rotation are tiny
//! for realistic stiffness, so they print with 6 significant digits.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Inches, Pounds};
//!
//! assert_eq!(Pounds(180.0).to_string(), "180.000000 lb");
//! assert_eq!(Inches(7.183908e-7).to_string(), "7.183908e-7 in");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Moment in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InchPounds(pub f64);

/// Length or displacement in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Rotation in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Flexural rigidity EI in lb-in^2
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlexuralRigidity(pub f64);

impl FlexuralRigidity {
    /// Combine modulus of elasticity (psi) and moment of inertia (in^4)
    pub fn from_parts(e_psi: f64, i_in4: f64) -> Self {
        FlexuralRigidity(e_psi * i_in4)
    }
}

impl fmt::Display for Pounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} lb", self.0)
    }
}

impl fmt::Display for InchPounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} in-lb", self.0)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6e} in", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6e} rad", self.0)
    }
}

impl fmt::Display for FlexuralRigidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6e} lb-in^2", self.0)
    }
}
