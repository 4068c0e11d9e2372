//! A fixed demonstration timetable.
//!
//! Callers show it when an import yields no entries. Unlike parsed entries it uses odd and
//! even week patterns and carries credits.

use crate::{
    schedule::{OccurrencePattern, ScheduleEntry},
    types::{Argb, DEFAULT_PALETTE},
};

struct SampleClass {
    title: &'static str,
    day_of_week: u32,
    room: &'static str,
    instructor: &'static str,
    periods: (u32, u32),
    weeks: (u32, u32),
    occurrence: OccurrencePattern,
    credit: f32,
    color: Argb,
}

const SAMPLE_CLASSES: [SampleClass; 11] = [
    SampleClass {
        title: "Advanced Mathematics",
        day_of_week: 1,
        room: "A101",
        instructor: "Prof. Zhang",
        periods: (1, 2),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 4.0,
        color: DEFAULT_PALETTE[0],
    },
    SampleClass {
        title: "College English",
        day_of_week: 1,
        room: "B203",
        instructor: "Ms. Li",
        periods: (3, 4),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 3.0,
        color: DEFAULT_PALETTE[1],
    },
    SampleClass {
        title: "Physical Education",
        day_of_week: 1,
        room: "Sports Field",
        instructor: "Coach Wang",
        periods: (9, 10),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 1.0,
        color: DEFAULT_PALETTE[2],
    },
    SampleClass {
        title: "Programming Fundamentals",
        day_of_week: 2,
        room: "C301",
        instructor: "Prof. Liu",
        periods: (1, 3),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 4.0,
        color: DEFAULT_PALETTE[3],
    },
    SampleClass {
        title: "Data Structures",
        day_of_week: 2,
        room: "C302",
        instructor: "Mr. Chen",
        periods: (5, 6),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 3.5,
        color: DEFAULT_PALETTE[10],
    },
    SampleClass {
        title: "Linear Algebra",
        day_of_week: 3,
        room: "A102",
        instructor: "Prof. Zhao",
        periods: (1, 2),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 3.0,
        color: DEFAULT_PALETTE[4],
    },
    SampleClass {
        title: "Computer Networks",
        day_of_week: 3,
        room: "D201",
        instructor: "Mr. Sun",
        periods: (3, 4),
        weeks: (1, 10),
        occurrence: OccurrencePattern::OddWeeks,
        credit: 3.0,
        color: DEFAULT_PALETTE[5],
    },
    SampleClass {
        title: "Operating Systems",
        day_of_week: 4,
        room: "C303",
        instructor: "Prof. Zhou",
        periods: (1, 2),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 4.0,
        color: DEFAULT_PALETTE[6],
    },
    SampleClass {
        title: "Database Systems",
        day_of_week: 4,
        room: "C304",
        instructor: "Ms. Wu",
        periods: (5, 7),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 3.5,
        color: DEFAULT_PALETTE[9],
    },
    SampleClass {
        title: "Software Engineering",
        day_of_week: 5,
        room: "D301",
        instructor: "Prof. Zheng",
        periods: (1, 2),
        weeks: (1, 16),
        occurrence: OccurrencePattern::EveryWeek,
        credit: 3.0,
        color: DEFAULT_PALETTE[7],
    },
    SampleClass {
        title: "Algorithm Design",
        day_of_week: 5,
        room: "C305",
        instructor: "Mr. Qian",
        periods: (3, 4),
        weeks: (2, 16),
        occurrence: OccurrencePattern::EvenWeeks,
        credit: 3.0,
        color: DEFAULT_PALETTE[8],
    },
];

pub fn sample_entries() -> Vec<ScheduleEntry> {
    SAMPLE_CLASSES
        .iter()
        .map(|class| ScheduleEntry {
            title: class.title.to_owned(),
            room: class.room.to_owned(),
            instructor: class.instructor.to_owned(),
            note: String::new(),
            day_of_week: class.day_of_week,
            period_start: class.periods.0,
            period_end: class.periods.1,
            week_start: class.weeks.0,
            week_end: class.weeks.1,
            occurrence: class.occurrence,
            color: class.color,
            credit: class.credit,
        })
        .collect()
}
