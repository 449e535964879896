use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

#[derive(Debug)]
pub struct OutputError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl From<csv::Error> for OutputError {
    fn from(error: csv::Error) -> OutputError {
        OutputError {
            problem: "Failed writing table".to_string(),
            details: error.to_string(),
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(error: std::io::Error) -> OutputError {
        OutputError {
            problem: "Failed writing output".to_string(),
            details: error
                .kind()
                .to_string(),
        }
    }
}
