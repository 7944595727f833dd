//! blockmat demo
//!
//! Runs worked block-matrix examples and prints the results.
//!
//! Demos:
//! - compose: 3x3 grid of optional blocks laid out into an 8x9 matrix
//! - decompose: the same grid, copied back out of its composition
//! - tiles: a 2x4 grid reusing the same block in several positions
//!
//! Usage: `blockmat-demo [compose|decompose|tiles|all]`
//!
//! Environment:
//! - BLOCKMAT_KIND: `dense` (default) or `sparse`
//! - BLOCKMAT_FORMAT: `text` (default) or `json`
//! - RUST_LOG: tracing filter, `info` when unset

use std::env;
use std::process::ExitCode;

use blockmat::{Factory2D, Matrix2D, MatrixError, MatrixKind, Result};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEMOS: [&str; 3] = ["compose", "decompose", "tiles"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_env() -> Result<Self> {
        match env::var("BLOCKMAT_FORMAT").as_deref() {
            Err(_) | Ok("text") => Ok(OutputFormat::Text),
            Ok("json") => Ok(OutputFormat::Json),
            Ok(other) => Err(MatrixError::invalid_argument(
                "BLOCKMAT_FORMAT",
                format!("unknown output format '{}', expected text or json", other),
            )),
        }
    }
}

/// Settings read from the environment
#[derive(Debug, Clone, Copy)]
struct Config {
    kind: MatrixKind,
    format: OutputFormat,
}

impl Config {
    fn from_env() -> Result<Self> {
        let kind = match env::var("BLOCKMAT_KIND") {
            Ok(name) => name.parse()?,
            Err(_) => MatrixKind::default(),
        };
        Ok(Config {
            kind,
            format: OutputFormat::from_env()?,
        })
    }
}

/// A demo's named output matrices, in print order
type Labeled = Vec<(&'static str, Matrix2D<f64>)>;

fn main() -> ExitCode {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            report_error(&err, OutputFormat::Text);
            return ExitCode::FAILURE;
        }
    };
    let selected = env::args().nth(1).unwrap_or_else(|| "all".to_string());

    match run(config, &selected) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, config.format);
            ExitCode::FAILURE
        }
    }
}

/// Print `err` to stderr in the configured format
fn report_error(err: &MatrixError, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&err.report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("Error: {}", err),
        },
        OutputFormat::Text => {
            eprintln!("Error [{}]: {}", err.code(), err);
            eprintln!("  suggestion: {}", err.suggestion());
        }
    }
}

fn run(config: Config, selected: &str) -> Result<()> {
    let factory: Factory2D<f64> = Factory2D::new(config.kind);
    info!(kind = %config.kind, demo = selected, "blockmat demo");

    let names: Vec<&str> = match selected {
        "all" => DEMOS.to_vec(),
        name if DEMOS.contains(&name) => vec![name],
        other => {
            return Err(MatrixError::invalid_argument(
                "demo",
                format!("unknown demo '{}', expected one of {} or all", other, DEMOS.join(", ")),
            ))
        }
    };

    for name in names {
        let output = match name {
            "compose" => demo_compose(&factory)?,
            "decompose" => demo_decompose(&factory)?,
            _ => demo_tiles(&factory)?,
        };
        print_demo(name, &output, config.format);
    }
    Ok(())
}

/// The four blocks of the sparse 3x3 grid, each filled with its own value
fn grid_blocks(factory: &Factory2D<f64>) -> [Matrix2D<f64>; 4] {
    [
        factory.make_filled(2, 2, 1.0),
        factory.make_filled(4, 4, 2.0),
        factory.make_filled(4, 3, 3.0),
        factory.make_filled(2, 2, 4.0),
    ]
}

fn demo_compose(factory: &Factory2D<f64>) -> Result<Labeled> {
    let [a, b, c, d] = grid_blocks(factory);
    let parts = vec![
        vec![None, Some(&a), None],
        vec![Some(&b), None, Some(&c)],
        vec![None, Some(&d), None],
    ];
    let matrix = factory.compose(&parts)?;
    debug!(rows = matrix.rows(), cols = matrix.cols(), "composed grid");
    Ok(vec![("matrix", matrix)])
}

fn demo_decompose(factory: &Factory2D<f64>) -> Result<Labeled> {
    let [a, b, c, d] = grid_blocks(factory);
    let matrix = factory.compose(&[
        vec![None, Some(&a), None],
        vec![Some(&b), None, Some(&c)],
        vec![None, Some(&d), None],
    ])?;

    let [mut a, mut b, mut c, mut d] = grid_blocks(factory);
    for part in [&mut a, &mut b, &mut c, &mut d] {
        part.fill(9.0);
    }
    {
        let mut parts = vec![
            vec![None, Some(&mut a), None],
            vec![Some(&mut b), None, Some(&mut c)],
            vec![None, Some(&mut d), None],
        ];
        factory.decompose(&mut parts, &matrix)?;
    }
    Ok(vec![("matrix", matrix), ("A", a), ("B", b), ("C", c), ("D", d)])
}

fn demo_tiles(factory: &Factory2D<f64>) -> Result<Labeled> {
    let a = factory.ascending(2, 2);
    let b = factory.descending(2, 2);
    let matrix = factory.compose(&[
        vec![Some(&a), None, Some(&a), None],
        vec![None, Some(&a), None, Some(&b)],
    ])?;
    Ok(vec![("matrix", matrix)])
}

fn print_demo(name: &str, output: &Labeled, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("== {} ==", name);
            for (label, matrix) in output {
                println!("{}:\n{}\n", label, matrix);
            }
        }
        OutputFormat::Json => {
            let matrices: serde_json::Map<String, JsonValue> = output
                .iter()
                .map(|(label, matrix)| (label.to_string(), json!(matrix.snapshot())))
                .collect();
            println!("{}", json!({ "demo": name, "matrices": matrices }));
        }
    }
}
