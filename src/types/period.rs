//! Class periods: the numbered slots a teaching day is divided into.

use chrono::NaiveTime;
use derive_more::Display;

/// Start times of the default twelve-period day.
const DEFAULT_PERIOD_STARTS: [(u32, u32); 12] = [
    (8, 0),
    (8, 55),
    (10, 10),
    (11, 5),
    (14, 0),
    (14, 55),
    (16, 10),
    (17, 5),
    (18, 30),
    (19, 25),
    (20, 30),
    (21, 25),
];

const HINT_OPEN: char = '第';
const HINT_CLOSE: char = '节';
const HINT_DASHES: [char; 4] = ['-', '~', '—', '–'];

/// An inclusive range of periods, `1 <= start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{start}-{end}")]
pub struct PeriodRange {
    start: u32,
    end: u32,
}

impl PeriodRange {
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start >= 1 && end >= start).then_some(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }
}

/// Maps the exact start time of a period to its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTable(Vec<(NaiveTime, u32)>);

impl Default for PeriodTable {
    fn default() -> Self {
        Self(
            DEFAULT_PERIOD_STARTS
                .iter()
                .zip(1..)
                .filter_map(|(&(hour, min), period)| {
                    NaiveTime::from_hms_opt(hour, min, 0).map(|time| (time, period))
                })
                .collect(),
        )
    }
}

impl PeriodTable {
    pub fn new(slots: impl IntoIterator<Item = (NaiveTime, u32)>) -> Self {
        Self(slots.into_iter().collect())
    }

    /// The period starting exactly at `time`. Times between two periods do not match.
    pub fn lookup(&self, time: NaiveTime) -> Option<u32> {
        self.0
            .iter()
            .find(|(start, _)| *start == time)
            .map(|(_, period)| *period)
    }

    /// Periods covered by a class from `start` to `end`.
    ///
    /// The class spans one period per full `period_minutes`, and at least one.
    pub fn derive(
        &self,
        start: NaiveTime,
        end: NaiveTime,
        period_minutes: u32,
    ) -> Option<PeriodRange> {
        let first = self.lookup(start)?;
        let count = ((end - start).num_minutes() / i64::from(period_minutes.max(1))).max(1);
        let last = u32::try_from(count - 1).ok()?.checked_add(first)?;
        PeriodRange::new(first, last)
    }
}

/// Look for a `第N-M节` period hint, line by line. The first line holding a usable hint wins.
pub fn find_period_hint(text: &str) -> Option<PeriodRange> {
    text.lines().find_map(|line| {
        let (start, end) = line
            .match_indices(HINT_OPEN)
            .find_map(|(idx, open)| scan_hint(&line[idx + open.len()..]))?;
        PeriodRange::new(start.parse().ok()?, end.parse().ok()?)
    })
}

/// Match `\s*digits\s*dash\s*digits节` at the start of `text`, returning both digit runs.
fn scan_hint(text: &str) -> Option<(&str, &str)> {
    let (start, rest) = take_digits(skip_whitespace(text))?;
    let rest = skip_whitespace(rest).strip_prefix(HINT_DASHES)?;
    let (end, rest) = take_digits(skip_whitespace(rest))?;
    rest.starts_with(HINT_CLOSE).then_some((start, end))
}

#[inline]
fn skip_whitespace(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

#[inline]
fn take_digits(text: &str) -> Option<(&str, &str)> {
    let len = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    (len > 0).then(|| text.split_at(len))
}
