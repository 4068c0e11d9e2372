use coursecal::ScheduleEntry;
use itertools::Itertools;

fn event_block(title: &str, start: &str, end: &str, extra: &[&str]) -> String {
    [
        "BEGIN:VEVENT".to_owned(),
        format!("SUMMARY:{title}"),
        format!("DTSTART:{start}"),
        format!("DTEND:{end}"),
    ]
    .into_iter()
    .chain(extra.iter().map(|line| (*line).to_owned()))
    .chain(["END:VEVENT".to_owned()])
    .join("\n")
}

fn calendar(blocks: &[String]) -> String {
    format!(
        "BEGIN:VCALENDAR\nVERSION:2.0\n{}\nEND:VCALENDAR\n",
        blocks.join("\n")
    )
}

fn render(entries: &[ScheduleEntry]) -> String {
    entries.iter().join("\n")
}

pub mod export {
    use crate::render;
    use coursecal::{OccurrencePattern, ScheduleEntry, types::Argb};

    fn expected() -> Vec<ScheduleEntry> {
        let entry = |title: &str, day_of_week, periods: (u32, u32), weeks: (u32, u32)| ScheduleEntry {
            title: title.to_owned(),
            room: String::new(),
            instructor: String::new(),
            note: String::new(),
            day_of_week,
            period_start: periods.0,
            period_end: periods.1,
            week_start: weeks.0,
            week_end: weeks.1,
            occurrence: OccurrencePattern::EveryWeek,
            color: Argb(0),
            credit: 0.0,
        };
        vec![
            ScheduleEntry {
                room: "A101".to_owned(),
                instructor: "Zhang".to_owned(),
                note: "第1 - 2节\nA101\nZhang".to_owned(),
                color: Argb(0xFF4DB6AC),
                ..entry("Advanced Mathematics", 1, (1, 2), (1, 16))
            },
            ScheduleEntry {
                room: "B203".to_owned(),
                instructor: "Li".to_owned(),
                color: Argb(0xFFF06292),
                ..entry("College English", 2, (3, 4), (1, 10))
            },
            ScheduleEntry {
                room: "Gym".to_owned(),
                color: Argb(0xFFF06292),
                ..entry("Physical Education", 3, (9, 10), (2, 2))
            },
            ScheduleEntry {
                room: "C303".to_owned(),
                instructor: "Zhou".to_owned(),
                note: "第5-7节\nC303\n*Zhou*".to_owned(),
                color: Argb(0xFF64B5F6),
                ..entry("Operating Systems", 4, (5, 7), (1, 1))
            },
        ]
    }

    #[test]
    fn parse_export() {
        let input = include_str!("./resources/wakeup_export.ics");
        similar_asserts::assert_eq!(coursecal::parse(input), expected());
    }

    #[test]
    fn crlf_line_endings() {
        let input = include_str!("./resources/wakeup_export.ics").replace('\n', "\r\n");
        similar_asserts::assert_eq!(coursecal::parse(&input), expected());
    }

    #[test]
    fn cr_line_endings() {
        let input = include_str!("./resources/wakeup_export.ics").replace('\n', "\r");
        similar_asserts::assert_eq!(coursecal::parse(&input), expected());
    }

    #[test]
    fn summary() {
        let input = include_str!("./resources/wakeup_export.ics");
        insta::assert_snapshot!(render(&coursecal::parse(input)), @r"
        Advanced Mathematics day 1 periods 1-2 weeks 1-16 (every week) @ A101 / Zhang
        College English day 2 periods 3-4 weeks 1-10 (every week) @ B203 / Li
        Physical Education day 3 periods 9-10 weeks 2-2 (every week) @ Gym
        Operating Systems day 4 periods 5-7 weeks 1-1 (every week) @ C303 / Zhou
        ");
    }

    #[test]
    fn event_parser_reports_rejects() {
        let input = include_str!("./resources/wakeup_export.ics");
        let (accepted, rejected): (Vec<_>, Vec<_>) =
            coursecal::EventParser::from_text(input).partition(Result::is_ok);
        assert_eq!(accepted.len(), 5);
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn empty_inputs() {
        assert!(coursecal::parse("").is_empty());
        assert!(coursecal::parse(include_str!("./resources/empty_calendar.ics")).is_empty());
        assert!(coursecal::parse("BEGIN:VEVENT\nSUMMARY:Unfinished\n").is_empty());
    }
}

pub mod properties {
    use crate::{calendar, event_block};
    use coursecal::{OccurrencePattern, ParserOptions, parse, parse_with_options};
    use rstest::rstest;
    use std::collections::HashMap;

    fn semester() -> Vec<String> {
        vec![
            event_block(
                "Linear Algebra",
                "20240904T080000",
                "20240904T093500",
                &["RRULE:FREQ=WEEKLY;UNTIL=20241225T000000Z", "LOCATION:A102 Zhao"],
            ),
            event_block(
                "Computer Networks",
                "20240918T101000",
                "20240918T114500",
                &["RRULE:FREQ=WEEKLY;UNTIL=20241106T000000Z", "LOCATION:D201 Sun"],
            ),
            event_block(
                "Database Systems",
                "20240905T140000",
                "20240905T162500",
                &["DESCRIPTION:第5-7节\\nC304\\nWu"],
            ),
            event_block(
                "Linear Algebra",
                "20240906T080000",
                "20240906T093500",
                &["LOCATION:A102 Zhao"],
            ),
        ]
    }

    #[test]
    fn idempotent() {
        let input = calendar(&semester());
        similar_asserts::assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn weeks_and_periods_are_ordered() {
        let entries = parse(&calendar(&semester()));
        assert_eq!(entries.len(), 4);
        for entry in &entries {
            assert!(1 <= entry.week_start && entry.week_start <= entry.week_end, "{entry}");
            assert!(1 <= entry.period_start && entry.period_start <= entry.period_end, "{entry}");
            assert!((1..=7).contains(&entry.day_of_week), "{entry}");
            assert_eq!(entry.occurrence, OccurrencePattern::EveryWeek);
        }
    }

    #[rstest]
    #[case("SUMMARY")]
    #[case("DTSTART")]
    #[case("DTEND")]
    fn missing_mandatory_field(#[case] dropped: &str) {
        let broken = event_block("Broken", "20240902T080000", "20240902T093000", &[])
            .lines()
            .filter(|line| !line.starts_with(&format!("{dropped}:")))
            .collect::<Vec<_>>()
            .join("\n");
        let well_formed = event_block("Chemistry", "20240903T080000", "20240903T093000", &[]);

        let entries = parse(&calendar(&[broken, well_formed]));
        let titles = entries
            .iter()
            .map(|entry| entry.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Chemistry"]);
    }

    #[test]
    fn time_table_fallback() {
        let entries = parse(&calendar(&[event_block(
            "Chemistry",
            "20240902T080000",
            "20240902T093000",
            &["DESCRIPTION:bring lab coat"],
        )]));
        assert_eq!((entries[0].period_start, entries[0].period_end), (1, 2));
    }

    #[test]
    fn hint_takes_precedence() {
        let entries = parse(&calendar(&[event_block(
            "Chemistry",
            "20240902T101000",
            "20240902T114500",
            &["DESCRIPTION:第3—5节\\nLab 2\\nGao"],
        )]));
        assert_eq!((entries[0].period_start, entries[0].period_end), (3, 5));
    }

    #[rstest]
    #[case("LOCATION:A301 Wang", "A301", "Wang")]
    #[case("LOCATION:Gym", "Gym", "")]
    fn location_split(#[case] location: &str, #[case] room: &str, #[case] instructor: &str) {
        let entries = parse(&calendar(&[event_block(
            "Chemistry",
            "20240902T080000",
            "20240902T093000",
            &[location],
        )]));
        assert_eq!(entries[0].room, room);
        assert_eq!(entries[0].instructor, instructor);
    }

    #[test]
    fn colors_follow_titles() {
        let entries = parse(&calendar(&semester()));
        assert_eq!(entries[0].title, entries[3].title);
        assert_eq!(entries[0].color, entries[3].color);

        let again = parse(&calendar(&semester()[1..]));
        assert_eq!(again[0].color, entries[1].color);
    }

    #[test]
    fn reference_is_order_independent() {
        let weeks = |blocks: Vec<String>| {
            parse(&calendar(&blocks))
                .into_iter()
                .map(|entry| ((entry.title, entry.day_of_week), (entry.week_start, entry.week_end)))
                .collect::<HashMap<_, _>>()
        };

        let forward = weeks(semester());
        let mut reversed = semester();
        reversed.reverse();
        let mut rotated = semester();
        rotated.rotate_left(1);

        assert_eq!(forward, weeks(reversed));
        assert_eq!(forward, weeks(rotated));
        assert_eq!(forward[&("Linear Algebra".to_owned(), 3)], (1, 17));
        assert_eq!(forward[&("Computer Networks".to_owned(), 3)], (3, 10));
        assert_eq!(forward[&("Database Systems".to_owned(), 4)], (1, 1));
        assert_eq!(forward[&("Linear Algebra".to_owned(), 5)], (1, 1));
    }

    #[test]
    fn options_change_derivation() {
        let input = calendar(&[event_block(
            "Chemistry",
            "20240902T080000",
            "20240902T093000",
            &[],
        )]);
        let options = ParserOptions::default().with_period_minutes(90);
        let entries = parse_with_options(&input, &options);
        assert_eq!((entries[0].period_start, entries[0].period_end), (1, 1));
    }
}

pub mod fallback {
    use coursecal::schedule::{entries_in_week, max_week, sample_entries};

    #[test]
    fn empty_parse_falls_back_to_sample() {
        let parsed = coursecal::parse("not a calendar");
        let entries = if parsed.is_empty() {
            sample_entries()
        } else {
            parsed
        };
        assert_eq!(max_week(&entries), 16);
        assert_eq!(entries_in_week(&entries, 1).len(), 10);
        assert_eq!(entries_in_week(&entries, 2).len(), 10);
        assert_eq!(entries_in_week(&entries, 11).len(), 9);
    }
}
