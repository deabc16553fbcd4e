use chrono::{Days, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use proptest::prelude::*;
use zeitkonto::core::aggregate::filter_by_week;
use zeitkonto::core::calculator::interval::{
    build_canonical_date, compute_duration_hours, compute_duration_minutes,
    parse_local_date_key,
};
use zeitkonto::models::WorkRecord;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn instant() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..5_000_000).prop_map(|secs| base() + Duration::seconds(secs))
}

fn day() -> impl Strategy<Value = NaiveDate> {
    (0u64..60_000).prop_map(|n| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(n))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn hours_never_negative(s in instant(), e in instant()) {
        let h = compute_duration_hours(s, e);
        prop_assert!(h >= 0.0);
        if e <= s {
            prop_assert_eq!(h, 0.0);
        }
    }

    #[test]
    fn minutes_follow_hours(s in instant(), e in instant()) {
        let mins = compute_duration_minutes(s, e) as f64;
        let from_hours = compute_duration_hours(s, e) * 60.0;
        prop_assert!((mins - from_hours).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn minutes_round_the_minute_value(s in instant(), e in instant()) {
        let millis = ((e - s).num_seconds().max(0) * 1000) as f64;
        let expected = (millis / 60_000.0).round() as i64;
        prop_assert_eq!(compute_duration_minutes(s, e), expected);
    }

    #[test]
    fn canonical_date_round_trips(d in day(), hour in 0u32..24, offset_h in -12i32..=14) {
        let naive = d.and_hms_opt(hour, 30, 0).unwrap();
        prop_assert_eq!(parse_local_date_key(&build_canonical_date(&naive)).date(), Some(d));

        let tz = FixedOffset::east_opt(offset_h * 3600).unwrap();
        let zoned = tz.from_local_datetime(&naive).single().unwrap();
        prop_assert_eq!(parse_local_date_key(&build_canonical_date(&zoned)).date(), Some(d));
    }

    #[test]
    fn week_filter_is_idempotent(
        start in day(),
        offsets in proptest::collection::vec(-10i64..20, 0..30),
    ) {
        let records: Vec<WorkRecord> = offsets
            .iter()
            .enumerate()
            .map(|(i, off)| WorkRecord {
                id: i.to_string(),
                date: (start + Duration::days(*off)).format("%Y-%m-%d").to_string(),
                start_time: "08:00".into(),
                end_time: "16:00".into(),
                total_hours: 8.0,
            })
            .collect();

        let once = filter_by_week(&records, start);
        let twice = filter_by_week(&once, start);
        prop_assert_eq!(once, twice);
    }
}
