//! Print the tokens of a Quirk source file, one per line:
//!
//! ```text
//! line:column<TAB>KIND<TAB>text
//! ```
//!
//! ```ignore
//! quirk-lex program.qk
//! quirk-lex --keywords --combine-operators - <program.qk
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quirk::{write_listing, ScanConfig, ScanError, Scanner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quirk-lex", version, about = "Tokenize Quirk source")]
struct Args {
    /// Input file; `-` reads standard input.
    #[arg(default_value = "Quirk.test")]
    input: PathBuf,

    /// Scan `==`, `>=` and `<=` as single tokens.
    #[arg(long)]
    combine_operators: bool,

    /// Scan reserved words as keywords rather than identifiers.
    #[arg(long)]
    keywords: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ScanConfig::default()
        .with_combined_operators(args.combine_operators)
        .with_reserved_keywords(args.keywords);

    let input: Box<dyn Read> = if args.input.as_os_str() == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        match File::open(&args.input) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("error: could not open {}: {e}", args.input.display());
                return ExitCode::FAILURE;
            }
        }
    };

    let mut scanner = Scanner::with_config(input, config);
    let mut stdout = std::io::stdout().lock();
    let result = write_listing(&mut scanner, &mut stdout).and_then(|count| {
        stdout.flush().map_err(ScanError::Write)?;
        Ok(count)
    });
    match result {
        Ok(count) => {
            tracing::info!("{} tokens from {}", count, args.input.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}: {e}", args.input.display());
            ExitCode::FAILURE
        }
    }
}
