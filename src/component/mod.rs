mod event;
pub use event::{ClassEvent, EventParser};
