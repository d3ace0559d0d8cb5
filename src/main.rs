//! CLI tool to tokenize STA source files.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stalex::{Error, Limits, Summary};

const DEFAULT_INPUT: &str = "code.sta";

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: stalex <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex [INPUT] [OUTPUT]  Write the token report for INPUT to OUTPUT");
    eprintln!("  check FILES...        Report diagnostics counts, fail if any");
    eprintln!();
    eprintln!("INPUT defaults to {DEFAULT_INPUT}, OUTPUT to INPUT with a .lex");
    eprintln!("extension. Use - as OUTPUT to print the report to stdout.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  stalex lex");
    eprintln!("  stalex lex program.sta -");
    eprintln!("  stalex check a.sta b.sta");
    ExitCode::from(2)
}

fn describe(summary: &Summary) -> String {
    let comment = if summary.unclosed_comment {
        ", unclosed comment"
    } else {
        ""
    };
    format!(
        "{} line(s), {} token(s), {} diagnostic(s){comment}",
        summary.lines, summary.tokens, summary.diagnostics
    )
}

fn lex(args: &[String]) -> ExitCode {
    if args.len() > 2 {
        eprintln!("Error: too many arguments");
        return ExitCode::from(2);
    }
    let input = PathBuf::from(args.first().map_or(DEFAULT_INPUT, String::as_str));
    let output = args.get(1).map_or_else(|| input.with_extension("lex"), PathBuf::from);

    let result = if output == Path::new("-") {
        File::open(&input)
            .map_err(|source| Error::OpenInput {
                path: input.clone(),
                source,
            })
            .and_then(|file| {
                stalex::analyze(BufReader::new(file), io::stdout().lock(), Limits::default())
            })
    } else {
        stalex::analyze_file(&input, &output, Limits::default())
    };

    match result {
        Ok(summary) => {
            eprintln!("{}: {}", input.display(), describe(&summary));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check(files: &[String]) -> ExitCode {
    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match stalex::analyze(BufReader::new(file), io::sink(), Limits::default()) {
            Ok(summary) => {
                eprintln!("{path}: {}", describe(&summary));
                if !summary.is_clean() {
                    had_error = true;
                }
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "lex" => lex(rest),
        "check" => check(rest),
        _ => {
            eprintln!("Unknown command: {command}");
            ExitCode::from(2)
        }
    }
}
