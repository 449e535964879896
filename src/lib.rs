//! Turn a flat text transcription of a multiple-choice exam into structured
//! question records, one row per question with its five lettered answers.

pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
