//! Command-line interface for flat_toml.
//!
//! Usage:
//!   flat-toml `<input.toml>` `<output.csv>` `<diagram.dot>` [--delimiter `<d>`] [--quote]
//!
//! Parses the input, writes its entries as CSV and writes the parser state
//! diagram. Exits with status 1 on any failure.

use clap::{Parser, ValueEnum};
use flat_toml::{diagram, from_path, write_csv_file_with_options, CsvOptions, Delimiter, Quoting};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

const USAGE: &str = "usage: flat-toml <input.toml> <output.csv> <diagram.dot>";

#[derive(Parser)]
#[command(
    name = "flat-toml",
    version,
    about = "Convert a flat TOML file to CSV and emit the parser state diagram"
)]
struct Cli {
    /// Flat TOML file to parse
    input: PathBuf,
    /// CSV destination
    csv: PathBuf,
    /// Graphviz DOT destination for the state diagram
    diagram: PathBuf,
    /// CSV field separator
    #[arg(short, long, value_enum, default_value_t = DelimiterArg::Comma)]
    delimiter: DelimiterArg,
    /// Quote CSV fields that contain the separator or a double quote
    #[arg(short, long)]
    quote: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    Comma,
    Tab,
    Pipe,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Pipe => Delimiter::Pipe,
        }
    }
}

impl Cli {
    fn csv_options(&self) -> CsvOptions {
        let quoting = if self.quote {
            Quoting::Rfc4180
        } else {
            Quoting::Raw
        };
        CsvOptions::new()
            .with_delimiter(self.delimiter.into())
            .with_quoting(quoting)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // One diagnostic line and status 1, instead of clap's usage block and 2.
            eprintln!(
                "Error: {}; {}",
                e.kind().as_str().unwrap_or("invalid arguments"),
                USAGE
            );
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    match run(&cli) {
        Ok(()) => {
            println!("Parsing completed successfully!");
            println!("State diagram has been generated!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> flat_toml::Result<()> {
    let document = from_path(&cli.input)?;
    info!(entries = document.len(), "parsed {}", cli.input.display());

    write_csv_file_with_options(&cli.csv, &document, &cli.csv_options())?;
    diagram::write_state_diagram_file(&cli.diagram)?;
    Ok(())
}
