use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    ESCAPED_NEWLINE,
    parser::{BlockReader, Field, LineReader, ParserError, RawEventBlock},
    types::parse_until,
};

/// One class meeting read from an event block, before it is placed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEvent {
    pub title: String,
    /// Combined "room instructor" text.
    pub location: Option<String>,
    /// Free text with escaped line breaks restored. May carry a period hint and, on its
    /// second and third line, the room and the instructor.
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Date of the last weekly occurrence. `None` for a single meeting.
    pub recurrence_until: Option<NaiveDate>,
}

impl ClassEvent {
    pub fn from_block(block: &RawEventBlock) -> Result<Self, ParserError> {
        // REQUIRED: summary / dtstart / dtend
        let title: String = block.get_required(Field::Summary)?;
        if title.is_empty() {
            return Err(ParserError::EmptyTitle);
        }
        let start = block.get_required(Field::DtStart)?;
        let end = block.get_required(Field::DtEnd)?;

        // OPTIONAL: rrule / location / description
        let recurrence_until = block.get(Field::RRule).and_then(|rrule| {
            parse_until(rrule)
                .inspect_err(|err| tracing::debug!(%title, %err, "ignoring recurrence end"))
                .ok()
                .flatten()
        });
        let location = block.get_optional(Field::Location)?;
        let description = block
            .get(Field::Description)
            .map(|text| text.replace(ESCAPED_NEWLINE, "\n").trim().to_owned());

        Ok(ClassEvent {
            title,
            location,
            description,
            start,
            end,
            recurrence_until,
        })
    }

    /// Last date the class meets on: the recurrence end, or the end of the single meeting.
    pub fn last_date(&self) -> NaiveDate {
        self.recurrence_until.unwrap_or(self.end.date())
    }
}

/// Reader returning a `ClassEvent` or the reason for rejecting it, one per event block.
pub struct EventParser<'a> {
    blocks: BlockReader<'a>,
}

impl<'a> EventParser<'a> {
    pub fn new(blocks: BlockReader<'a>) -> Self {
        EventParser { blocks }
    }

    pub fn from_text(text: &'a str) -> Self {
        EventParser::new(BlockReader::new(LineReader::from_text(text)))
    }
}

impl Iterator for EventParser<'_> {
    type Item = Result<ClassEvent, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.blocks.next()?;
        let event = ClassEvent::from_block(&block);
        if let Err(err) = &event {
            tracing::debug!(line = block.number(), %err, "rejected event block");
        }
        Some(event)
    }
}
