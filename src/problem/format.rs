use owo_colors::OwoColorize;

use crate::language::{LoadingError, OutputError};

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format an OutputError with concise single-line output
pub fn concise_output_error(error: &OutputError) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .problem
            .bold(),
        error.details
    )
}
