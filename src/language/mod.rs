// Types representing questions extracted from an exam transcription

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
