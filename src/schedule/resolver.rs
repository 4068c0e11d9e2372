use chrono::{Datelike, Days, NaiveDate};

use crate::{
    ClassEvent, ParserError, ParserOptions,
    schedule::{OccurrencePattern, ScheduleEntry},
    types::find_period_hint,
};

const INSTRUCTOR_MARK: char = '*';

/// Places class events on the weekly timetable.
pub struct ScheduleResolver<'o> {
    options: &'o ParserOptions,
}

impl<'o> ScheduleResolver<'o> {
    pub fn new(options: &'o ParserOptions) -> Self {
        ScheduleResolver { options }
    }

    /// Resolve all events against a shared week 1. Events without a period are left out.
    pub fn resolve(&self, events: &[ClassEvent]) -> Vec<ScheduleEntry> {
        let Some(reference) = reference_monday(events) else {
            return vec![];
        };
        tracing::trace!(%reference, events = events.len(), "resolving schedule");

        events
            .iter()
            .filter_map(|event| match self.resolve_one(event, reference) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!(%err, "dropping event");
                    None
                }
            })
            .collect()
    }

    /// Resolve a single event, with `reference` as the Monday of week 1.
    pub fn resolve_one(
        &self,
        event: &ClassEvent,
        reference: NaiveDate,
    ) -> Result<ScheduleEntry, ParserError> {
        let periods = event
            .description
            .as_deref()
            .and_then(find_period_hint)
            .or_else(|| {
                self.options.period_table.derive(
                    event.start.time(),
                    event.end.time(),
                    self.options.period_minutes,
                )
            })
            .ok_or_else(|| ParserError::NoPeriod(event.title.clone()))?;

        let week_start = week_number(reference, event.start.date());
        let week_end = week_number(reference, event.last_date()).max(week_start);

        let (room, instructor) =
            split_room_and_instructor(event.location.as_deref(), event.description.as_deref());

        Ok(ScheduleEntry {
            title: event.title.clone(),
            room,
            instructor,
            note: event.description.clone().unwrap_or_default(),
            day_of_week: event.start.weekday().number_from_monday(),
            period_start: periods.start(),
            period_end: periods.end(),
            week_start: clamp_week(week_start),
            week_end: clamp_week(week_end),
            occurrence: OccurrencePattern::EveryWeek,
            color: self.options.palette.pick(&event.title),
            credit: 0.0,
        })
    }
}

/// The Monday on or before the earliest start date, `None` without events.
pub fn reference_monday(events: &[ClassEvent]) -> Option<NaiveDate> {
    events
        .iter()
        .map(|event| event.start.date())
        .min()
        .map(monday_of)
}

/// 1-based number of the week containing `date`, counted from the week starting at the
/// Monday `reference`. Dates before `reference` give numbers below 1.
pub fn week_number(reference: NaiveDate, date: NaiveDate) -> i64 {
    (monday_of(date) - reference).num_days().div_euclid(7) + 1
}

#[inline]
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

#[inline]
fn clamp_week(week: i64) -> u32 {
    u32::try_from(week.max(1)).unwrap_or(u32::MAX)
}

/// Split room and instructor out of an event's location and description.
///
/// A description of at least three lines names the room on its second line and the
/// instructor on its third. Otherwise the location is split at its last space, a location
/// without a space being just a room. Blank description values fall back to the location.
pub fn split_room_and_instructor(
    location: Option<&str>,
    description: Option<&str>,
) -> (String, String) {
    let lines = description
        .map(|text| text.lines().collect::<Vec<_>>())
        .unwrap_or_default();
    let (described_room, described_instructor) = match lines.as_slice() {
        [_, room, instructor, ..] => (
            room.trim(),
            instructor.trim().trim_matches(INSTRUCTOR_MARK),
        ),
        _ => ("", ""),
    };

    let (located_room, located_instructor) = match location.map(str::trim) {
        Some(location) => match location.rsplit_once(' ') {
            Some((room, instructor)) => (
                room.trim(),
                instructor.trim().trim_matches(INSTRUCTOR_MARK),
            ),
            None => (location, ""),
        },
        None => ("", ""),
    };

    let pick = |described: &str, located: &str| {
        if described.trim().is_empty() {
            located.to_owned()
        } else {
            described.to_owned()
        }
    };
    (
        pick(described_room, located_room),
        pick(described_instructor, located_instructor),
    )
}
