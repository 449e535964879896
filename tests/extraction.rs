//! End-to-end tests driving the public parsing and output API with whole
//! transcriptions.

use examtab::language::QuestionRecord;
use examtab::output::write_table;
use examtab::parsing::parse;

fn trim(s: &str) -> &str {
    s.strip_prefix('\n')
        .unwrap_or(s)
}

const TWO_QUESTIONS: &str = "1. What is the capital of France?
A. Berlin
B. Paris
C. Madrid
D. Rome
E. Lisbon
2. What is 2+2?
A. 3
B. 4
C. 5
D. 6
E. 7
";

#[test]
fn two_question_transcription() {
    let records: Vec<QuestionRecord> = parse(TWO_QUESTIONS).collect();

    assert_eq!(
        records,
        vec![
            QuestionRecord {
                number: "1".to_string(),
                question_text: "What is the capital of France? ".to_string(),
                a_ans: Some("Berlin ".to_string()),
                b_ans: Some("Paris ".to_string()),
                c_ans: Some("Madrid ".to_string()),
                d_ans: Some("Rome ".to_string()),
                e_ans: Some("Lisbon ".to_string()),
            },
            QuestionRecord {
                number: "2".to_string(),
                question_text: "What is 2+2? ".to_string(),
                a_ans: Some("3 ".to_string()),
                b_ans: Some("4 ".to_string()),
                c_ans: Some("5 ".to_string()),
                d_ans: Some("6 ".to_string()),
                e_ans: Some("7 ".to_string()),
            },
        ],
    );
}

#[test]
fn record_count_matches_question_markers() {
    // well-formed input: every question carries exactly options A through E
    let mut content = String::new();
    for n in 1..=17 {
        content.push_str(&format!("{}. Question number {}\n", n, n));
        for letter in ["A", "B", "C", "D", "E"] {
            content.push_str(&format!("{}. choice {}\n", letter, letter));
        }
    }

    let records: Vec<QuestionRecord> = parse(&content).collect();
    assert_eq!(records.len(), 17);
    for (i, record) in records
        .iter()
        .enumerate()
    {
        assert_eq!(record.number, (i + 1).to_string());
    }
}

#[test]
fn reruns_are_identical() {
    let first: Vec<QuestionRecord> = parse(TWO_QUESTIONS).collect();
    let second: Vec<QuestionRecord> = parse(TWO_QUESTIONS).collect();
    assert_eq!(first, second);
}

#[test]
fn hyphenation_law() {
    // a trailing <wordchar>- re-joins with no space; an unbroken wrap joins
    // with exactly one space
    let records: Vec<QuestionRecord> = parse(trim(
        r#"
1. The enzyme glucu-
ronidase acts on
substrates
A. a
B. b
C. c
D. d
E. e
"#,
    ))
    .collect();

    assert_eq!(
        records[0].question_text,
        "The enzyme glucuronidase acts on substrates "
    );
}

#[test]
fn set_skip_law() {
    let records: Vec<QuestionRecord> = parse(trim(
        r#"
1. Standalone
A. a
B. b
C. c
D. d
E. e
Items 2.4 refer to the shared passage below
Some shared preamble text.
2. First grouped question
A. a
B. b
C. c
D. d
E. e
4. Last grouped question
A. a
B. b
C. c
D. d
E. e
END OF SET
5. Resumes here
A. a
B. b
C. c
D. d
E. e
"#,
    ))
    .collect();

    let numbers: Vec<&str> = records
        .iter()
        .map(|record| record.number.as_str())
        .collect();
    assert!(!numbers.contains(&"2"));
    assert!(!numbers.contains(&"4"));
    assert!(numbers.contains(&"5"));

    let resumed = records
        .iter()
        .find(|record| record.number == "5")
        .unwrap();
    assert_eq!(resumed.question_text, "Resumes here ");
}

#[test]
fn option_form_equivalence() {
    let dotted: Vec<QuestionRecord> = parse(trim(
        r#"
1. Pick one
A. only choice
B. b
C. c
D. d
E. e
"#,
    ))
    .collect();

    let wrapped: Vec<QuestionRecord> = parse(trim(
        r#"
1. Pick one
(A) only choice
B. b
C. c
D. d
E. e
"#,
    ))
    .collect();

    assert_eq!(dotted, wrapped);
}

#[test]
fn truncated_question_yields_nothing() {
    let records: Vec<QuestionRecord> = parse(trim(
        r#"
1. Cut short by the end of the page
A. a
B. b
C. c
"#,
    ))
    .collect();

    assert_eq!(records, vec![]);
}

#[test]
fn empty_input_yields_nothing() {
    let records: Vec<QuestionRecord> = parse("").collect();
    assert_eq!(records, vec![]);
}

#[test]
fn csv_table_end_to_end() {
    let mut sink = Vec::new();
    let count = write_table(parse(TWO_QUESTIONS), &mut sink).unwrap();
    assert_eq!(count, 2);

    let table = String::from_utf8(sink).unwrap();
    let mut lines = table.lines();
    assert_eq!(
        lines.next(),
        Some("number,question_text,A_ans,B_ans,C_ans,D_ans,E_ans")
    );
    assert_eq!(
        lines.next(),
        Some("1,What is the capital of France? ,Berlin ,Paris ,Madrid ,Rome ,Lisbon ")
    );
    assert_eq!(lines.next(), Some("2,What is 2+2? ,3 ,4 ,5 ,6 ,7 "));
    assert_eq!(lines.next(), None);
}
