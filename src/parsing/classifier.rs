//! Line classification for exam transcriptions
//!
//! A transcription is a flat stream of lines. Each line either opens a new
//! question, opens a lettered answer option, delimits an "item set" region,
//! or is plain continuation text belonging to whatever came before it.

use crate::language::Label;

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// The structural marker recognized at the front of a line. At most one
/// marker is recognized per line; lines carrying none are `Plain`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Marker {
    /// Digits followed by ". " at the start of the line, e.g. "12. "
    QuestionStart(String),
    /// A letter A-E as "B. " or "(B) " at the start of the line
    AnswerStart(Label),
    /// "Items N.N", opening a grouped item set
    SetStart(String),
    /// The phrase "END OF SET", anywhere in the line
    SetEnd,
    /// No marker; the whole line is continuation text
    Plain,
}

/// A line with its marker split off and its residual text normalized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedLine {
    pub marker: Marker,
    pub text: String,
}

/// Classify one raw line. Patterns are tried in order and the first match
/// wins; the matched marker is removed from the line before the remainder is
/// normalized by [`clean_line`].
pub fn classify(line: &str) -> ClassifiedLine {
    let re = regex!(r"^(\d+)\. ");
    if let Some(cap) = re.captures(line) {
        let number = cap[1].to_string();
        let rest = &line[cap[0].len()..];
        return ClassifiedLine {
            marker: Marker::QuestionStart(number),
            text: clean_line(rest),
        };
    }

    // Answer options come in two transcription forms, "B. " and "(B) "
    for re in [regex!(r"^([A-E])\. "), regex!(r"^\(([A-E])\) ")] {
        if let Some(cap) = re.captures(line) {
            // the capture group admits only A-E
            let letter = cap[1]
                .chars()
                .next()
                .and_then(Label::from_char)
                .unwrap();
            let rest = &line[cap[0].len()..];
            return ClassifiedLine {
                marker: Marker::AnswerStart(letter),
                text: clean_line(rest),
            };
        }
    }

    let re = regex!(r"^Items (\d+\.\d+)");
    if let Some(cap) = re.captures(line) {
        let range = cap[1].to_string();
        let rest = &line[cap[0].len()..];
        return ClassifiedLine {
            marker: Marker::SetStart(range),
            text: clean_line(rest),
        };
    }

    let re = regex!(r"END OF SET");
    if let Some(zero) = re.find(line) {
        let mut rest = String::with_capacity(line.len());
        rest.push_str(&line[..zero.start()]);
        rest.push_str(&line[zero.end()..]);
        return ClassifiedLine {
            marker: Marker::SetEnd,
            text: clean_line(&rest),
        };
    }

    ClassifiedLine {
        marker: Marker::Plain,
        text: clean_line(line),
    }
}

/// Normalize residual line text so that consecutive fragments concatenate
/// cleanly: trim surrounding whitespace, re-join words broken by a trailing
/// hyphen, and otherwise leave exactly one joining space at the end.
///
/// Any line ending in a word character plus "-" is assumed to be a mid-word
/// wrap. A hyphenated compound that happens to end a line is re-joined too;
/// that ambiguity comes with the source format.
pub fn clean_line(line: &str) -> String {
    let trimmed = line.trim();

    let re = regex!(r"\w-$");
    if re.is_match(trimmed) {
        trimmed
            .trim_end_matches('-')
            .to_string()
    } else if trimmed.is_empty() {
        String::new()
    } else {
        let mut text = trimmed.to_string();
        text.push(' ');
        text
    }
}
