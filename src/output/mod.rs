//! Output generation for the examtab CLI application

use std::io::Write;
use tracing::{debug, info};

use crate::language::{OutputError, QuestionRecord};

/// Serialize records as a CSV table, one row per question, in emission
/// order. The header row carries the column names
/// `number,question_text,A_ans,B_ans,C_ans,D_ans,E_ans`. Returns the number
/// of rows written.
pub fn write_table<W, I>(records: I, sink: W) -> Result<usize, OutputError>
where
    W: Write,
    I: Iterator<Item = QuestionRecord>,
{
    let mut writer = csv::Writer::from_writer(sink);

    let mut count = 0;
    for record in records {
        debug!("Writing question {}", record.number);
        writer.serialize(&record)?;
        count += 1;
    }
    writer.flush()?;

    info!("Wrote {} question{}", count, if count == 1 { "" } else { "s" });
    Ok(count)
}

#[cfg(test)]
mod check {
    use super::*;

    fn record(number: &str) -> QuestionRecord {
        let mut record = QuestionRecord::new(number.to_string());
        record.question_text = "What? ".to_string();
        record.a_ans = Some("a ".to_string());
        record.b_ans = Some("b ".to_string());
        record.c_ans = Some("c ".to_string());
        record.d_ans = Some("d ".to_string());
        record.e_ans = Some("e ".to_string());
        record
    }

    #[test]
    fn header_and_rows() {
        let mut sink = Vec::new();
        let count = write_table(vec![record("1"), record("2")].into_iter(), &mut sink).unwrap();
        assert_eq!(count, 2);

        let table = String::from_utf8(sink).unwrap();
        let mut lines = table.lines();
        assert_eq!(
            lines.next(),
            Some("number,question_text,A_ans,B_ans,C_ans,D_ans,E_ans")
        );
        assert_eq!(lines.next(), Some("1,What? ,a ,b ,c ,d ,e "));
        assert_eq!(lines.next(), Some("2,What? ,a ,b ,c ,d ,e "));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn absent_options_serialize_empty() {
        let mut incomplete = record("7");
        incomplete.c_ans = None;

        let mut sink = Vec::new();
        write_table(std::iter::once(incomplete), &mut sink).unwrap();

        let table = String::from_utf8(sink).unwrap();
        assert_eq!(
            table
                .lines()
                .nth(1),
            Some("7,What? ,a ,b ,,d ,e ")
        );
    }
}
