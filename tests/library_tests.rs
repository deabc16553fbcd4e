use serde_json::json;
use zeitkonto::core::list::Selection;
use zeitkonto::core::period::Period;
use zeitkonto::export::{Report, render_html};
use zeitkonto::models::{RawDocument, WorkRecord, reconstruct};

fn doc(v: serde_json::Value) -> RawDocument {
    v.as_object().cloned().unwrap()
}

#[test]
fn stored_minutes_win_over_clock_times() {
    let r = reconstruct(&doc(json!({
        "$id": "a1",
        "date": "2025-01-05",
        "start": "09:00",
        "end": "17:00",
        "total": 480
    })));
    assert_eq!(r.id, "a1");
    assert_eq!(r.start_time, "09:00");
    assert_eq!(r.total_hours, 8.0);
}

#[test]
fn sparse_document_reconstructs_with_defaults() {
    let r = reconstruct(&doc(json!({ "date": "2025-01-05" })));
    assert_eq!(r.id, "");
    assert_eq!(r.start_time, "");
    assert_eq!(r.total_hours, 0.0);
}

#[test]
fn html_report_escapes_values() {
    let sel = Selection {
        period: Period::All,
        records: vec![WorkRecord {
            id: "x".into(),
            date: "<b>".into(),
            start_time: "08:00".into(),
            end_time: "16:00".into(),
            total_hours: 8.0,
        }],
        total_hours: 8.0,
    };
    let report = Report::new("Hours & more", &sel, "%d.%m.%Y");

    let html = render_html(&report).unwrap();
    assert!(html.contains("Hours &amp; more"));
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("Total: 8.00 hours"));
}
