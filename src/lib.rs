//! Convert timetable exports (a small subset of iCalendar) into weekly class schedules.
//!
//! The pipeline runs in three forward-only stages:
//!
//! * [`BlockReader`] splits the text into `BEGIN:VEVENT`/`END:VEVENT` field maps.
//! * [`EventParser`] turns every field map into a typed [`ClassEvent`] or rejects it.
//! * [`ScheduleResolver`] anchors all events to the semester's first Monday and derives
//!   weeks, periods, room, instructor and color for each [`ScheduleEntry`].
//!
//! # Examples
//!
//! ```rust
//! let input = "BEGIN:VEVENT\n\
//!              SUMMARY:Linear Algebra\n\
//!              DTSTART:20240902T080000\n\
//!              DTEND:20240902T093000\n\
//!              LOCATION:A102 Zhao\n\
//!              END:VEVENT\n";
//!
//! let entries = coursecal::parse(input);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].room, "A102");
//! assert_eq!((entries[0].period_start, entries[0].period_end), (1, 2));
//! ```

const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";
const ESCAPED_NEWLINE: &str = "\\n";
const UTC_DESIGNATOR: char = 'Z';

pub mod component;
pub use component::{ClassEvent, EventParser};

pub mod parser;
pub use parser::{
    BlockReader, ContentLine, ContentLineParser, LineReader, ParserError, ParserOptions,
    RawEventBlock,
};

pub mod schedule;
pub use schedule::{OccurrencePattern, ScheduleEntry, ScheduleResolver};

pub mod types;

/// Parse a timetable export with the default period table and palette.
///
/// Blocks that fail to parse and events without a derivable period are dropped, so an
/// input without any usable event yields an empty list.
pub fn parse(input: &str) -> Vec<ScheduleEntry> {
    parse_with_options(input, &ParserOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParserOptions) -> Vec<ScheduleEntry> {
    let events = EventParser::from_text(input)
        .filter_map(Result::ok)
        .collect::<Vec<_>>();

    ScheduleResolver::new(options).resolve(&events)
}
