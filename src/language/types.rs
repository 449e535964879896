//! Types representing the questions recovered from a transcription

use serde::Serialize;
use std::fmt;

/// One of the five answer options a question is expected to carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Label {
    A,
    B,
    C,
    D,
    E,
}

impl Label {
    pub fn from_char(c: char) -> Option<Label> {
        match c {
            'A' => Some(Label::A),
            'B' => Some(Label::B),
            'C' => Some(Label::C),
            'D' => Some(Label::D),
            'E' => Some(Label::E),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::A => write!(f, "A"),
            Label::B => write!(f, "B"),
            Label::C => write!(f, "C"),
            Label::D => write!(f, "D"),
            Label::E => write!(f, "E"),
        }
    }
}

/// A fully assembled question: its marker number, the stem text, and the
/// text of each lettered answer option. An option the source never supplied
/// stays `None` and serializes as an empty cell.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub number: String,
    pub question_text: String,
    #[serde(rename = "A_ans")]
    pub a_ans: Option<String>,
    #[serde(rename = "B_ans")]
    pub b_ans: Option<String>,
    #[serde(rename = "C_ans")]
    pub c_ans: Option<String>,
    #[serde(rename = "D_ans")]
    pub d_ans: Option<String>,
    #[serde(rename = "E_ans")]
    pub e_ans: Option<String>,
}

impl QuestionRecord {
    pub fn new(number: String) -> QuestionRecord {
        QuestionRecord {
            number,
            question_text: String::new(),
            a_ans: None,
            b_ans: None,
            c_ans: None,
            d_ans: None,
            e_ans: None,
        }
    }

    pub fn answer(&self, label: Label) -> Option<&str> {
        match label {
            Label::A => self
                .a_ans
                .as_deref(),
            Label::B => self
                .b_ans
                .as_deref(),
            Label::C => self
                .c_ans
                .as_deref(),
            Label::D => self
                .d_ans
                .as_deref(),
            Label::E => self
                .e_ans
                .as_deref(),
        }
    }

    pub fn set_answer(&mut self, label: Label, text: String) {
        match label {
            Label::A => self.a_ans = Some(text),
            Label::B => self.b_ans = Some(text),
            Label::C => self.c_ans = Some(text),
            Label::D => self.d_ans = Some(text),
            Label::E => self.e_ans = Some(text),
        }
    }
}
