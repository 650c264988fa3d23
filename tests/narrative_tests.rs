mod common;
use common::{daily_paid, ev, facts, saga_batches, saga_facts, titled};
use rserialstats::core::logic::{AnalysisOptions, Core};
use rserialstats::core::narrative::NarrativeBuilder;
use rserialstats::models::narrative::NarrativeEntry;
use rserialstats::models::time_of_day::Locale;

fn dates(entries: &[NarrativeEntry]) -> Vec<String> {
    entries.iter().map(|e| e.date_label()).collect()
}

#[test]
fn test_saga_narrative_finished() {
    let f = saga_facts();
    let entries = NarrativeBuilder::new(&f, true).build();

    assert_eq!(
        dates(&entries),
        vec![
            "2020-01-01",
            "2020-01-05",
            "2020-01-07",
            "2020-01-09",
            "2020-01-15",
            "2020-01-16",
            "2020-01-17",
            "2020-01-20",
            "(^_^)",
        ]
    );

    assert_eq!(entries[0].content, vec!["[09:00:00] First release - Prologue"]);
    assert_eq!(entries[1].content, vec!["[21:00:00] Paid tier begins - Chapter 3"]);
    assert_eq!(
        entries[2].content,
        vec!["[21:10:00] Chapter 5\nLongest paid release: 4000 words"]
    );
    assert_eq!(entries[3].content, vec!["[00:00:00] Longest hiatus: 6 days"]);
    assert_eq!(entries[4].content, vec!["[21:00:00] Longest streak: 7 consecutive days"]);
    // same-date lines keep generation order
    assert_eq!(
        entries[5].content,
        vec![
            "[08:00:00] Earliest release of the day - Chapter 8",
            "[23:30:00] Latest release of the day - Chapter 10",
            "[08:00:00] Busiest day: 3 releases",
        ]
    );
    assert_eq!(
        entries[6].content,
        vec!["[02:00:00] Chapter 11\nShortest paid release: 1200 words"]
    );
    assert_eq!(
        entries[7].content,
        vec!["[21:00:00] Finale\nCompleted after 19 days"]
    );
    assert_eq!(
        entries[8].content,
        vec![
            "Once paid, each release averaged 2225 words.",
            "This work is most active at 21:00 and 02:00, perhaps when inspiration runs highest.",
        ]
    );
}

#[test]
fn test_unfinished_publication_has_no_completion_entry() {
    let f = saga_facts();
    let entries = NarrativeBuilder::new(&f, false).build();
    assert!(!dates(&entries).contains(&"2020-01-20".to_string()));
    assert!(
        entries
            .iter()
            .flat_map(|e| e.content.iter())
            .all(|line| !line.contains("Completed after"))
    );
}

#[test]
fn test_fewer_than_ten_paid_releases_reduce_the_narrative() {
    let f = facts(daily_paid(9));
    let entries = NarrativeBuilder::new(&f, true).build();
    let lines: Vec<&String> = entries.iter().flat_map(|e| e.content.iter()).collect();

    assert!(lines.iter().all(|l| !l.contains("Longest streak")));
    assert!(lines.iter().all(|l| !l.contains("Paid tier begins")));
    assert!(lines.iter().all(|l| !l.contains("Longest paid release")));
    // completion is gated on the flag only
    assert!(lines.iter().any(|l| l.contains("Completed after 8 days")));
}

#[test]
fn test_ten_paid_releases_unlock_streak_entries() {
    let f = facts(daily_paid(10));
    let entries = NarrativeBuilder::new(&f, false).build();
    assert_eq!(entries[0].date_label(), "2021-03-01");
    assert!(entries[0].content.contains(&"[20:00:00] Longest streak: 11 consecutive days".to_string()));
    assert!(entries[0].content.contains(&"[20:00:00] Paid tier begins - Chapter 1".to_string()));
    // one run only: no hiatus
    assert!(
        entries
            .iter()
            .flat_map(|e| e.content.iter())
            .all(|l| !l.contains("hiatus"))
    );
}

#[test]
fn test_min_paid_threshold_is_configurable() {
    let f = facts(daily_paid(3));
    let entries = NarrativeBuilder::new(&f, false).min_paid_events(3).build();
    assert!(entries[0].content.iter().any(|l| l.contains("Longest streak: 4 consecutive days")));
}

#[test]
fn test_top_two_hours_in_same_bucket_name_the_bucket() {
    let f = facts(vec![
        ev("2020-01-01 08:00:00", 500),
        ev("2020-01-02 08:10:00", 500),
        ev("2020-01-03 08:20:00", 500),
        ev("2020-01-04 10:00:00", 500),
        ev("2020-01-05 10:30:00", 500),
        ev("2020-01-06 21:00:00", 500),
    ]);
    let tail = NarrativeBuilder::new(&f, false).build().pop().unwrap();
    assert_eq!(tail.date, None);
    assert_eq!(
        tail.content,
        vec!["This work is most active in the morning, perhaps when inspiration runs highest."]
    );

    let zh = NarrativeBuilder::new(&f, false).locale(Locale::Zh).build().pop().unwrap();
    assert_eq!(zh.content, vec!["这部作品在早上最活跃，或许这时作者的灵感更强吧。"]);
}

#[test]
fn test_single_release_narrative() {
    let f = facts(vec![titled("2020-03-04 10:00:00", "Only", 500, false)]);
    let entries = NarrativeBuilder::new(&f, true).build();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0].content,
        vec![
            "[10:00:00] First release - Only",
            "[10:00:00] Earliest release of the day - Only",
            "[10:00:00] Latest release of the day - Only",
            "[10:00:00] Busiest day: 1 release",
        ]
    );
    // no paid tier: no average sentence
    assert_eq!(entries[1].content.len(), 1);
}

#[test]
fn test_chinese_templates() {
    let f = saga_facts();
    let entries = NarrativeBuilder::new(&f, true).locale(Locale::Zh).build();
    assert_eq!(entries[0].content, vec!["【09:00:00】新书发布 - Prologue"]);
    assert_eq!(entries[3].content, vec!["【00:00:00】最长连续断更 6 天"]);
    assert_eq!(
        entries[7].content,
        vec!["【21:00:00】Finale\n历时 19 天，大结局(￣▽￣)~*"]
    );
    let tail = entries.last().unwrap();
    assert_eq!(tail.content[0], "上架后，平均每章更新 2225 字。");
    assert_eq!(tail.content[1], "这部作品在 21 点和 02 点最活跃，或许这时作者的灵感更强吧。");
}

#[test]
fn test_analysis_is_idempotent() {
    let batches = saga_batches();
    let opts = AnalysisOptions {
        finished: true,
        ..Default::default()
    };
    let a = serde_json::to_string(&Core::analyze(&batches, &opts).unwrap()).unwrap();
    let b = serde_json::to_string(&Core::analyze(&batches, &opts).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_report_json_shape() {
    let opts = AnalysisOptions {
        finished: true,
        distribution_limit: Some(2),
        ..Default::default()
    };
    let report = Core::analyze(&saga_batches(), &opts).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["entries"][0]["date"], "2020-01-01");
    assert_eq!(json["entries"][8]["date"], "(^_^)");
    assert_eq!(
        json["distribution"],
        serde_json::json!([
            {"name": "21", "value": 11},
            {"name": "02", "value": 1},
            {"name": "other", "value": 3}
        ])
    );
}
