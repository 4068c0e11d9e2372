use derive_more::Display;
use itertools::Itertools;
use std::fmt;

use crate::types::Argb;

mod resolver;
pub use resolver::{ScheduleResolver, reference_monday, split_room_and_instructor, week_number};

pub mod sample;
pub use sample::sample_entries;

/// Number of weeks shown when there is nothing to derive it from.
pub const DEFAULT_MAX_WEEK: u32 = 20;

/// Which weeks of its range a class meets in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum OccurrencePattern {
    #[default]
    #[display("every week")]
    EveryWeek,
    #[display("odd weeks")]
    OddWeeks,
    #[display("even weeks")]
    EvenWeeks,
}

impl OccurrencePattern {
    pub fn code(self) -> u8 {
        match self {
            Self::EveryWeek => 0,
            Self::OddWeeks => 1,
            Self::EvenWeeks => 2,
        }
    }

    pub fn matches(self, week: u32) -> bool {
        match self {
            Self::EveryWeek => true,
            Self::OddWeeks => week % 2 == 1,
            Self::EvenWeeks => week % 2 == 0,
        }
    }
}

/// A class on the weekly timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub title: String,
    pub room: String,
    pub instructor: String,
    pub note: String,
    /// 1 = Monday … 7 = Sunday.
    pub day_of_week: u32,
    pub period_start: u32,
    pub period_end: u32,
    pub week_start: u32,
    pub week_end: u32,
    pub occurrence: OccurrencePattern,
    pub color: Argb,
    pub credit: f32,
}

impl ScheduleEntry {
    /// Number of periods the class occupies.
    pub fn span(&self) -> u32 {
        self.period_end - self.period_start + 1
    }

    pub fn is_in_week(&self, week: u32) -> bool {
        (self.week_start..=self.week_end).contains(&week) && self.occurrence.matches(week)
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} day {} periods {}-{} weeks {}-{} ({})",
            self.title,
            self.day_of_week,
            self.period_start,
            self.period_end,
            self.week_start,
            self.week_end,
            self.occurrence,
        )?;
        let place = [&self.room, &self.instructor]
            .into_iter()
            .filter(|part| !part.is_empty())
            .join(" / ");
        if !place.is_empty() {
            write!(f, " @ {place}")?;
        }
        Ok(())
    }
}

/// Entries meeting in `week`, in their original order.
pub fn entries_in_week(entries: &[ScheduleEntry], week: u32) -> Vec<&ScheduleEntry> {
    entries.iter().filter(|entry| entry.is_in_week(week)).collect()
}

/// The last week any entry meets in, or [`DEFAULT_MAX_WEEK`] without entries.
pub fn max_week(entries: &[ScheduleEntry]) -> u32 {
    entries
        .iter()
        .map(|entry| entry.week_end)
        .max()
        .unwrap_or(DEFAULT_MAX_WEEK)
}
