//! Command execution for the typedcsv CLI
//!
//! Opens the input file, builds the schema and configuration from the
//! arguments, and streams records to stdout with positioned error reporting
//! on stderr.

use std::fs::File;
use std::io::BufReader;

use colored::Colorize;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::parser::{RecordReader, Schema};
use crate::{Error, Result};

/// Run the reader over the configured input file.
///
/// Records print one per line as `(v1, v2, ...)`. The first malformed record
/// aborts with an error unless `--lenient` was given, in which case every
/// bad record is reported on stderr, parsing continues with the next line,
/// and the run still exits successfully.
pub fn run(args: &Args) -> Result<()> {
    let schema = Schema::parse_list(&args.types)?;
    let config = args.parser_config();

    info!(
        "parsing {} with {} field(s) per record",
        args.input.display(),
        schema.arity()
    );

    let file = File::open(&args.input)
        .map_err(|e| Error::io(format!("failed to open {}", args.input.display()), e))?;
    let reader = RecordReader::new(BufReader::new(file), schema, config)?;

    let mut produced = 0usize;
    let mut rejected = 0usize;

    for result in reader {
        match result {
            Ok(record) => {
                println!("{}", record);
                produced += 1;
            }
            Err(error) => {
                if !args.lenient {
                    return Err(error);
                }
                rejected += 1;
                report_error(&error);
            }
        }
    }

    debug!("finished: {} produced, {} rejected", produced, rejected);
    if rejected > 0 {
        eprintln!(
            "{} {} record(s) rejected",
            "warning:".yellow().bold(),
            rejected
        );
    }
    Ok(())
}

/// Print an error to stderr, with position context for parse failures
pub fn report_error(error: &Error) {
    match error {
        Error::Parse(e) => eprintln!("{} {}", "parse error:".red().bold(), e),
        other => eprintln!("{} {}", "error:".red().bold(), other),
    }
}

/// Set up structured logging from the CLI log level
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("typedcsv={}", args.log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("logging initialized at level: {}", args.log_level);
    Ok(())
}
