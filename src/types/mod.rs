mod color;
pub use color::{Argb, DEFAULT_PALETTE, Palette, title_hash};

mod period;
pub use period::{PeriodRange, PeriodTable, find_period_hint};

mod timestamp;
pub use timestamp::{TimestampError, parse_timestamp, parse_until};
