use coursecal::schedule::{entries_in_week, max_week, sample_entries};
use std::{env, fs::read_to_string};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "./tests/resources/wakeup_export.ics".to_owned());
    let buf = read_to_string(&path).unwrap();

    let mut entries = coursecal::parse(&buf);
    if entries.is_empty() {
        println!("{path}: no classes found, showing the sample timetable");
        entries = sample_entries();
    }

    for week in 1..=max_week(&entries) {
        println!("--- week {week} ---");
        for entry in entries_in_week(&entries, week) {
            println!("{entry} [{}]", entry.color);
        }
    }
}
