mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineReader};

mod content_line;
pub use content_line::{ContentLine, ContentLineError, ContentLineParser};

mod property;
pub use property::{Field, ParseProp};

mod block;
pub use block::{BlockReader, RawEventBlock};

use crate::types::{Palette, PeriodTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Start times of the class periods, used when an event carries no period hint.
    pub period_table: PeriodTable,
    /// Length of one period in minutes when counting how many periods an event spans.
    pub period_minutes: u32,
    /// Colors handed out by title.
    pub palette: Palette,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            period_table: PeriodTable::default(),
            period_minutes: 45,
            palette: Palette::default(),
        }
    }
}

impl ParserOptions {
    pub fn with_period_table(mut self, period_table: PeriodTable) -> Self {
        self.period_table = period_table;
        self
    }

    pub fn with_period_minutes(mut self, period_minutes: u32) -> Self {
        self.period_minutes = period_minutes;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
