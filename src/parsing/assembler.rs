//! Assembly of classified lines into question records
//!
//! Two pull-based iterators run in sequence. [`Events`] walks the raw lines
//! with one line of lookahead, turning them into classified-line events and
//! synthesizing a flush event at every field boundary. [`Records`] feeds
//! those events through an explicit accumulation state and yields a finished
//! [`QuestionRecord`] each time an E option is flushed.

use tracing::debug;

use crate::language::{Label, QuestionRecord};
use crate::parsing::classifier::{classify, ClassifiedLine, Marker};

/// One step of the assembly stream: either a classified input line, or the
/// boundary signal that finalizes whichever field is currently open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Line(ClassifiedLine),
    Flush,
}

/// Lookahead iterator over classified lines.
///
/// Yields every line in order, inserting a [`Event::Flush`] whenever the
/// upcoming line opens a new question or answer, and once more after the
/// last line so the final field is still finalized. Item set regions are
/// consumed here and never reach the event stream; their lines are
/// classified only far enough to find the closing marker.
pub struct Events<I> {
    lines: I,
    lookahead: Option<ClassifiedLine>,
    queued: Option<Event>,
}

impl<I> Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(mut lines: I) -> Events<I> {
        let lookahead = lines
            .next()
            .map(|line| classify(line.as_ref()));
        Events {
            lines,
            lookahead,
            queued: None,
        }
    }

    /// Discard lines from the set-start line up to and including the line
    /// carrying the END OF SET marker, then re-prime the lookahead from the
    /// line after it. Returns false if input ran out inside the region, in
    /// which case the whole stream ends (truncation, with no final flush).
    fn skip_set(&mut self) -> bool {
        self.lookahead = None;
        loop {
            match self.lines.next() {
                Some(line) => {
                    if classify(line.as_ref()).marker == Marker::SetEnd {
                        self.lookahead = self
                            .lines
                            .next()
                            .map(|line| classify(line.as_ref()));
                        return true;
                    }
                }
                None => {
                    debug!("Set region not terminated before end of input");
                    return false;
                }
            }
        }
    }
}

impl<I> Iterator for Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(event) = self.queued.take() {
            return Some(event);
        }

        // Set regions are excluded wholesale. No flush is synthesized across
        // a skip, so a field left open just before a set-start stays
        // unflushed; the question it belongs to is dropped with the set.
        while matches!(
            &self.lookahead,
            Some(line) if matches!(line.marker, Marker::SetStart(_))
        ) {
            if !self.skip_set() {
                return None;
            }
        }

        let current = self.lookahead.take()?;

        match self.lines.next() {
            Some(line) => {
                let upcoming = classify(line.as_ref());
                match upcoming.marker {
                    Marker::QuestionStart(_) | Marker::AnswerStart(_) => {
                        self.queued = Some(Event::Flush);
                    }
                    _ => {}
                }
                self.lookahead = Some(upcoming);
            }
            None => {
                // end of input finalizes the last open field
                self.queued = Some(Event::Flush);
            }
        }

        Some(Event::Line(current))
    }
}

/// Which field of the record under construction is receiving text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Field {
    Question,
    Answer(Label),
}

/// The accumulation state for the question currently being assembled: the
/// open field, the text gathered for it so far, and the partial record the
/// flushed fields land in. Reset whenever a record is emitted.
#[derive(Debug, Default)]
pub struct Accumulation {
    field: Option<Field>,
    buffer: String,
    record: Option<QuestionRecord>,
}

impl Accumulation {
    pub fn new() -> Accumulation {
        Accumulation::default()
    }

    /// Advance the state by one event. Returns the completed record when the
    /// event flushes an E option; every other event returns None.
    pub fn apply(&mut self, event: Event) -> Option<QuestionRecord> {
        match event {
            Event::Line(line) => {
                match line.marker {
                    Marker::QuestionStart(number) => {
                        if let Some(partial) = self.record.take() {
                            debug!("Dropping incomplete question {}", partial.number);
                        }
                        self.record = Some(QuestionRecord::new(number));
                        self.field = Some(Field::Question);
                        self.buffer = line.text;
                    }
                    Marker::AnswerStart(label) => {
                        self.field = Some(Field::Answer(label));
                        self.buffer = line.text;
                    }
                    Marker::Plain | Marker::SetEnd | Marker::SetStart(_) => {
                        // continuation text; a stray set marker reaching this
                        // point is treated the same way. Text arriving before
                        // any field is open has nowhere to go.
                        if self.field.is_some() {
                            self.buffer
                                .push_str(&line.text);
                        }
                    }
                }
                None
            }
            Event::Flush => {
                let text = std::mem::take(&mut self.buffer);
                let field = self.field.take()?;
                let record = self.record.as_mut()?;
                match field {
                    Field::Question => {
                        record.question_text = text;
                        None
                    }
                    Field::Answer(label) => {
                        record.set_answer(label, text);
                        // the E option is always the last; flushing it
                        // completes the record
                        if label == Label::E {
                            self.record.take()
                        } else {
                            None
                        }
                    }
                }
            }
        }
    }

    fn into_partial(self) -> Option<QuestionRecord> {
        self.record
    }
}

/// The finished-record iterator: lazy, finite, forward-only. One record is
/// yielded per completed question, in input order.
pub struct Records<I> {
    events: Events<I>,
    state: Accumulation,
}

impl<I> Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: I) -> Records<I> {
        Records {
            events: Events::new(lines),
            state: Accumulation::new(),
        }
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = QuestionRecord;

    fn next(&mut self) -> Option<QuestionRecord> {
        loop {
            match self
                .events
                .next()
            {
                Some(event) => {
                    if let Some(record) = self
                        .state
                        .apply(event)
                    {
                        return Some(record);
                    }
                }
                None => {
                    if let Some(partial) = std::mem::take(&mut self.state).into_partial() {
                        debug!("Dropping incomplete question {}", partial.number);
                    }
                    return None;
                }
            }
        }
    }
}
