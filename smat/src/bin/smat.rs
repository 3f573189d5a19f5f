//! smat command line
//!
//! Combines two matrix files and writes the result. Without an operation
//! argument it asks for the operation and both input paths interactively.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use smat::{FileConfig, Job, MultiplyStrategy, Operation, OpsConfig, ParseOptions};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply sparse matrices stored as text files")]
struct Cli {
    /// Operation: add, subtract (sub) or multiply (mul); prompts when omitted
    operation: Option<Operation>,

    /// Left operand file [default: sample_inputs/matrix1.txt]
    #[arg(long)]
    left: Option<PathBuf>,

    /// Right operand file [default: sample_inputs/matrix2.txt]
    #[arg(long)]
    right: Option<PathBuf>,

    /// Result file [default: output_<op>.txt]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Directory holding the default input files
    #[arg(long, default_value = "sample_inputs")]
    input_dir: PathBuf,

    /// Multiplication algorithm: row-indexed or column-scan
    #[arg(long, default_value_t = MultiplyStrategy::RowIndexed)]
    strategy: MultiplyStrategy,

    /// Reject entries outside the declared dimensions
    #[arg(long)]
    strict_bounds: bool,

    /// Also print the result as JSON on stdout
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct Summary<'a> {
    operation: Operation,
    output: &'a std::path::Path,
    result: &'a smat::SparseMatrix,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), smat::Error> {
    let files = FileConfig::default().with_input_dir(&cli.input_dir);
    let interactive = cli.operation.is_none();

    let operation = match cli.operation {
        Some(op) => op,
        None => prompt_operation()?,
    };

    let left = match cli.left {
        Some(path) => path,
        None if interactive => prompt_path("Matrix 1", files.left_path())?,
        None => files.left_path(),
    };
    let right = match cli.right {
        Some(path) => path,
        None if interactive => prompt_path("Matrix 2", files.right_path())?,
        None => files.right_path(),
    };
    let output = cli.output.unwrap_or_else(|| files.output_path(operation));

    let job = Job::new(operation, left, right, &output)
        .with_ops_config(OpsConfig::new().with_multiply_strategy(cli.strategy))
        .with_parse_options(ParseOptions::new().with_strict_bounds(cli.strict_bounds));
    let result = job.run()?;

    #[cfg(feature = "serde")]
    if cli.json {
        let summary = Summary {
            operation,
            output: &output,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    println!(
        "Operation \"{}\" complete ({}x{}, {} non-zeros). Result saved to \"{}\"",
        operation.label(),
        result.nrows(),
        result.ncols(),
        result.nnz(),
        output.display()
    );
    Ok(())
}

fn prompt_operation() -> Result<Operation, smat::Error> {
    println!("=== Sparse Matrix Operations ===");
    for (index, op) in Operation::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, op.label());
    }
    println!();

    let answer = prompt("Choose an operation (1/2/3): ")?;
    answer.parse()
}

fn prompt_path(name: &str, default: PathBuf) -> Result<PathBuf, smat::Error> {
    let answer = prompt(&format!(
        "Enter path to {name} [Default: {}]: ",
        default.display()
    ))?;
    if answer.is_empty() {
        Ok(default)
    } else {
        Ok(PathBuf::from(answer))
    }
}

/// Print `query` and read one trimmed line from stdin
fn prompt(query: &str) -> Result<String, smat::Error> {
    let stdin_err = |e| smat::Error::Io {
        path: PathBuf::from("<stdin>"),
        source: e,
    };

    print!("{query}");
    io::stdout().flush().map_err(stdin_err)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(stdin_err)?;
    Ok(line.trim().to_string())
}
