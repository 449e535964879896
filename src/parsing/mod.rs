//! parser for flat exam transcriptions

use std::path::Path;
use std::str::Lines;
use tracing::debug;

use crate::language::LoadingError;
use crate::parsing::assembler::Records;

pub mod assembler;
pub mod classifier;

/// Read a transcription file and return an owned String. Ownership passes
/// back to the caller so the record iterator borrowing it can live as long
/// as needed.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse transcription text into a lazy sequence of question records. The
/// iterator is finite and forward-only; each pull consumes lines until the
/// next question completes. Malformed questions produce no record and no
/// error.
pub fn parse(content: &str) -> Records<Lines<'_>> {
    Records::new(content.lines())
}
