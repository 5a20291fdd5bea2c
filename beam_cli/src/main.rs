//! # Beam Diagram CLI
//!
//! Terminal front end for `beam_core`. Collects the ten beam parameters from
//! flags and/or a JSON request file, runs the analysis and prints the
//! reactions and the deflection/rotation readout at X.
//!
//! ```text
//! beam_cli --p1 100 --p2 100 --p3 100 -a 3 -b 4 -c 5 --span 10 -x 5
//! beam_cli --config beam.json --policy full-span --json
//! beam_cli --diagram moment > moment.csv
//! ```
//!
//! Set `RUST_LOG=debug` to trace each stage.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use beam_core::{load_request, AnalysisRequest, BeamAnalysisResult, CalcResult, IntegrationPolicy};

#[derive(Parser, Debug)]
#[command(name = "beam_cli")]
#[command(about = "Shear, moment, deflection and rotation of a simply-supported beam under three point loads")]
#[command(version)]
struct Args {
    /// JSON analysis request to start from; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// P1 (lb)
    #[arg(long, allow_negative_numbers = true)]
    p1: Option<f64>,

    /// P2 (lb)
    #[arg(long, allow_negative_numbers = true)]
    p2: Option<f64>,

    /// P3 (lb)
    #[arg(long, allow_negative_numbers = true)]
    p3: Option<f64>,

    /// Position of P1 from the left support (in)
    #[arg(short = 'a', long = "pos-a", allow_negative_numbers = true)]
    a: Option<f64>,

    /// Position of P2 (in)
    #[arg(short = 'b', long = "pos-b", allow_negative_numbers = true)]
    b: Option<f64>,

    /// Position of P3 (in)
    #[arg(short = 'c', long = "pos-c", allow_negative_numbers = true)]
    c: Option<f64>,

    /// Span length L (in)
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    span: Option<f64>,

    /// Location of interest X (in)
    #[arg(short = 'x', long = "at", allow_negative_numbers = true)]
    x: Option<f64>,

    /// Modulus of elasticity E (psi)
    #[arg(short = 'E', long, allow_negative_numbers = true)]
    modulus: Option<f64>,

    /// Moment of inertia I (in^4)
    #[arg(short = 'I', long, allow_negative_numbers = true)]
    inertia: Option<f64>,

    /// Number of grid intervals
    #[arg(short = 'n', long)]
    resolution: Option<usize>,

    /// Integration policy for deflection and rotation
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Print the full result bundle as JSON
    #[arg(long)]
    json: bool,

    /// Print one diagram as `x,value` lines instead of the summary
    #[arg(long, value_enum, conflicts_with = "json")]
    diagram: Option<DiagramArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    FullSpan,
    Cumulative,
}

impl From<PolicyArg> for IntegrationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FullSpan => IntegrationPolicy::FullSpan,
            PolicyArg::Cumulative => IntegrationPolicy::Cumulative,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DiagramArg {
    Shear,
    Moment,
    Deflection,
    Rotation,
}

impl Args {
    /// Start from the request file (or defaults) and apply every given flag
    fn to_request(&self) -> CalcResult<AnalysisRequest> {
        let mut request = match &self.config {
            Some(path) => load_request(path)?,
            None => AnalysisRequest::default(),
        };

        let beam = &mut request.beam;
        let overrides = [
            (&mut beam.p1_lb, self.p1),
            (&mut beam.p2_lb, self.p2),
            (&mut beam.p3_lb, self.p3),
            (&mut beam.a_in, self.a),
            (&mut beam.b_in, self.b),
            (&mut beam.c_in, self.c),
            (&mut beam.span_in, self.span),
            (&mut beam.x_in, self.x),
            (&mut beam.e_psi, self.modulus),
            (&mut beam.i_in4, self.inertia),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(resolution) = self.resolution {
            request.options.resolution = resolution;
        }
        if let Some(policy) = self.policy {
            request.options.policy = policy.into();
        }

        Ok(request)
    }
}

/// Look up the `(x, value)` pairs for one diagram, if the policy produced it
fn diagram_points(result: &BeamAnalysisResult, diagram: DiagramArg) -> Option<Vec<(f64, f64)>> {
    match diagram {
        DiagramArg::Shear => Some(result.shear_diagram()),
        DiagramArg::Moment => Some(result.moment_diagram()),
        DiagramArg::Deflection => result.deflection_diagram(),
        DiagramArg::Rotation => result.rotation_diagram(),
    }
}

fn print_diagram(result: &BeamAnalysisResult, diagram: DiagramArg) -> ExitCode {
    match diagram_points(result, diagram) {
        Some(points) => {
            for (x, value) in points {
                println!("{},{}", x, value);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!(
                "Error: no {:?} curve under the {} policy; use --policy cumulative",
                diagram, result.options.policy
            );
            ExitCode::FAILURE
        }
    }
}

fn print_summary(result: &BeamAnalysisResult) {
    println!("═══════════════════════════════════════");
    println!("  SIMPLY-SUPPORTED BEAM");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    let beam = &result.config;
    println!("  L = {} in, X = {} in", beam.span_in, beam.x_in);
    for (i, load) in beam.loads().iter().enumerate() {
        println!("  P{} = {} lb at {} in", i + 1, load.magnitude_lb, load.position_in);
    }
    println!("  E = {} psi, I = {} in^4", beam.e_psi, beam.i_in4);
    println!();
    println!("Results:");
    for line in result.summary_lines() {
        println!("  {}", line);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outcome = args.to_request().and_then(|request| request.run());

    match outcome {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else if let Some(diagram) = args.diagram {
                return print_diagram(&result, diagram);
            } else {
                print_summary(&result);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("analysis failed: {}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["beam_cli"]);
        let request = args.to_request().unwrap();
        assert_eq!(request, AnalysisRequest::default());
    }

    #[test]
    fn test_flags_override_fields() {
        let args = Args::parse_from([
            "beam_cli", "--p2", "-40", "-L", "12", "-x", "6", "-n", "500", "--policy", "full-span",
        ]);
        let request = args.to_request().unwrap();

        assert_eq!(request.beam.p2_lb, -40.0);
        assert_eq!(request.beam.span_in, 12.0);
        assert_eq!(request.beam.x_in, 6.0);
        assert_eq!(request.beam.p1_lb, 100.0);
        assert_eq!(request.options.resolution, 500);
        assert_eq!(request.options.policy, IntegrationPolicy::FullSpan);
    }

    #[test]
    fn test_zero_span_reports_typed_error() {
        let args = Args::parse_from(["beam_cli", "--span", "0"]);
        let err = args.to_request().and_then(|r| r.run()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_SPAN");
    }

    #[test]
    fn test_json_conflicts_with_diagram() {
        let parsed = Args::try_parse_from(["beam_cli", "--json", "--diagram", "shear"]);
        assert_eq!(
            parsed.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
        assert!(Args::try_parse_from(["beam_cli", "--diagram", "shear"]).is_ok());
    }

    #[test]
    fn test_missing_curve_under_full_span() {
        let args = Args::parse_from(["beam_cli", "--policy", "full-span", "--diagram", "deflection"]);
        let result = args.to_request().and_then(|r| r.run()).unwrap();

        assert!(diagram_points(&result, DiagramArg::Deflection).is_none());
        assert!(diagram_points(&result, DiagramArg::Rotation).is_none());
        assert_eq!(diagram_points(&result, DiagramArg::Shear).unwrap().len(), 1001);
        assert_eq!(print_diagram(&result, DiagramArg::Deflection), ExitCode::FAILURE);
    }
}
