use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use clap::{Arg, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use examtab::output;
use examtab::parsing;
use examtab::problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("examtab")
        .version(VERSION)
        .propagate_version(true)
        .about("Convert flat exam transcriptions into structured question tables.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("extract")
                .about("Parse a transcription and write the question table as CSV")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the table to this file instead of standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the exam transcription to convert."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a transcription and report how many questions were recovered")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the exam transcription to examine."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let output = submatches.get_one::<String>("output");
            extract(Path::new(filename), output.map(Path::new));
        }
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            check(Path::new(filename));
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: examtab [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn extract(filename: &Path, target: Option<&Path>) {
    let content = load_or_exit(filename);
    let records = parsing::parse(&content);

    let result = match target {
        Some(path) => match File::create(path) {
            Ok(file) => output::write_table(records, BufWriter::new(file)),
            Err(error) => {
                eprintln!(
                    "{}",
                    problem::concise_output_error(&error.into())
                );
                std::process::exit(1);
            }
        },
        None => output::write_table(records, std::io::stdout()),
    };

    match result {
        Ok(count) => {
            info!("Extracted {} questions from {}", count, filename.display());
        }
        Err(error) => {
            eprintln!("{}", problem::concise_output_error(&error));
            std::process::exit(1);
        }
    }
}

fn check(filename: &Path) {
    let content = load_or_exit(filename);
    let count = parsing::parse(&content).count();

    println!(
        "{}: {} question{}",
        filename.display(),
        count,
        if count == 1 { "" } else { "s" }
    );
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
