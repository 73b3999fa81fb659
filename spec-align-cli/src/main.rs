//! spec-align command line tool
//!
//! Aligns two JSON documents and reports where they disagree.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use spec_align::{
    ingest, AlignConfig, Aligner, Alignment, HtmlRenderer, Renderer, TextRenderer,
    DEFAULT_FUZZY_THRESHOLD,
};

/// Structural alignment of two documents
#[derive(Parser)]
#[command(name = "spec-align")]
#[command(version)]
#[command(about = "Aligns two document trees and reports their differences", long_about = None)]
struct Cli {
    /// Log alignment decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and print a report
    #[command(visible_alias = "c")]
    Compare {
        /// Left document (JSON)
        left: String,
        /// Right document (JSON)
        right: String,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Relative edit distance below which a key counts as misspelled
        #[arg(short, long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
        threshold: f64,
    },

    /// Print only the number of errors and warnings
    Count {
        /// Left document (JSON)
        left: String,
        /// Right document (JSON)
        right: String,

        /// Relative edit distance below which a key counts as misspelled
        #[arg(short, long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
        threshold: f64,

        /// Print the counts as a JSON object
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compare {
            left,
            right,
            format,
            output,
            threshold,
        } => run_compare(&left, &right, format, output.as_deref(), threshold),
        Commands::Count {
            left,
            right,
            threshold,
            json,
        } => run_count(&left, &right, threshold, json),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Sets up logging on stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default = if verbose {
        "spec_align=debug"
    } else {
        "spec_align=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

/// Parses both documents and aligns them.
fn align_files(
    left_path: &str,
    right_path: &str,
    threshold: f64,
) -> Result<Alignment, Box<dyn std::error::Error>> {
    let config = AlignConfig::new().with_fuzzy_threshold(threshold)?;

    tracing::info!(path = left_path, "parsing left document");
    let left = ingest::parse_file(left_path)?;

    tracing::info!(path = right_path, "parsing right document");
    let right = ingest::parse_file(right_path)?;

    Ok(Aligner::with_config(config).align_documents(&left, &right)?)
}

/// Writes the report. Returns true when the documents have no errors.
fn run_compare(
    left_path: &str,
    right_path: &str,
    format: Format,
    output_path: Option<&str>,
    threshold: f64,
) -> Result<bool, Box<dyn std::error::Error>> {
    let alignment = align_files(left_path, right_path, threshold)?;

    let renderer: Box<dyn Renderer> = match format {
        Format::Text => Box::new(TextRenderer),
        Format::Html => Box::new(HtmlRenderer),
    };

    let mut output: Box<dyn Write> = match output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    renderer.render_to(&alignment, &mut output)?;
    output.flush()?;

    if alignment.is_success() {
        eprintln!("Documents align {}.", alignment.counts);
    } else {
        eprintln!("Documents differ {}.", alignment.counts);
    }
    Ok(alignment.is_success())
}

/// Prints the error and warning counts.
fn run_count(
    left_path: &str,
    right_path: &str,
    threshold: f64,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let alignment = align_files(left_path, right_path, threshold)?;

    if json {
        println!("{}", serde_json::to_string(&alignment.counts)?);
    } else {
        println!("{} {}", alignment.counts.errors, alignment.counts.warnings);
    }
    Ok(alignment.is_success())
}
