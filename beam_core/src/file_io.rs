//! # File I/O Module
//!
//! Reads analysis requests from JSON. The engine never writes anything back;
//! results are handed to the caller, which decides how to present them.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "beam": { "span_in": 10.0, "p1_lb": 100.0, "a_in": 3.0, "x_in": 5.0 },
//!   "options": { "resolution": 10000, "policy": "full_span" }
//! }
//! ```
//!
//! Both sections are optional; missing fields take their defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::load_request;
//! use std::path::Path;
//!
//! let request = load_request(Path::new("beam.json")).unwrap();
//! let result = request.run().unwrap();
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{analyze, AnalysisOptions, BeamAnalysisResult, BeamConfig};
use crate::errors::{CalcError, CalcResult};

/// A beam configuration together with the numerical options to run it with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub beam: BeamConfig,
    pub options: AnalysisOptions,
}

impl AnalysisRequest {
    pub fn new(beam: BeamConfig, options: AnalysisOptions) -> Self {
        AnalysisRequest { beam, options }
    }

    /// Run the analysis described by this request
    pub fn run(&self) -> CalcResult<BeamAnalysisResult> {
        analyze(&self.beam, &self.options)
    }
}

/// Parse a request from a JSON string
pub fn parse_request(json: &str) -> CalcResult<AnalysisRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a request from a JSON file
pub fn load_request(path: &Path) -> CalcResult<AnalysisRequest> {
    let content = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let request = parse_request(&content)?;
    log::debug!("loaded analysis request from {}", path.display());
    Ok(request)
}
