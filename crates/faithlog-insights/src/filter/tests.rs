use super::*;
use crate::test_support::{entry, ids, with_person, with_tags};
use faithlog_storage::EntryKind;

// ============================================================================
// Helpers
// ============================================================================

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A: testimony, B: pending prayer, C: answered prayer
fn sample() -> Vec<Entry> {
    let mut a = with_tags(
        with_person(entry(1, "2024-01-10", EntryKind::Testimony), "Ana"),
        "healing, family",
    );
    a.title = Some("Recovered from surgery".to_string());

    let b = with_tags(
        with_person(
            entry(
                2,
                "2024-01-10",
                EntryKind::PrayerRequest {
                    status: Status::Pending,
                },
            ),
            "Ben",
        ),
        "work",
    );

    let c = with_tags(
        with_person(
            entry(
                3,
                "2024-01-05",
                EntryKind::PrayerRequest {
                    status: Status::Answered,
                },
            ),
            "Cai",
        ),
        "family",
    );

    vec![a, b, c]
}

// ============================================================================
// criteria
// ============================================================================

#[test]
fn test_default_filter_returns_everything() {
    let entries = sample();
    let filter = EntryFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter.apply(&entries), entries);
}

#[test]
fn test_search_is_case_insensitive_over_all_text_fields() {
    let entries = sample();
    let search = |needle: &str| {
        let filter = EntryFilter {
            search: needle.to_string(),
            ..EntryFilter::default()
        };
        ids(&filter.apply(&entries))
    };

    assert_eq!(search("ANA"), vec![1]);
    assert_eq!(search("surgery"), vec![1]);
    assert_eq!(search("details for entry 2"), vec![2]);
    assert_eq!(search("Famil"), vec![1, 3]);
    assert!(search("nothing like this").is_empty());
}

#[test]
fn test_missing_title_never_matches_search() {
    let entries = sample();
    let filter = EntryFilter {
        search: "recovered".to_string(),
        ..EntryFilter::default()
    };
    assert!(!filter.matches(&entries[1]));
}

#[test]
fn test_type_and_status_filters() {
    let entries = sample();

    let prayers = EntryFilter {
        entry_type: Some(EntryType::PrayerRequest),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&prayers.apply(&entries)), vec![2, 3]);

    let answered = EntryFilter {
        status: Some(Status::Answered),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&answered.apply(&entries)), vec![3]);

    let impossible = EntryFilter {
        entry_type: Some(EntryType::Testimony),
        status: Some(Status::Pending),
        ..EntryFilter::default()
    };
    assert!(impossible.apply(&entries).is_empty());
}

#[test]
fn test_date_bounds_are_inclusive() {
    let entries = sample();
    let filter = EntryFilter {
        start_date: Some(date("2024-01-05")),
        end_date: Some(date("2024-01-05")),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&entries)), vec![3]);

    let from = EntryFilter {
        start_date: Some(date("2024-01-06")),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&from.apply(&entries)), vec![1, 2]);
}

#[test]
fn test_tag_filter_is_an_intersection() {
    let entries = sample();
    let filter = EntryFilter {
        tags: vec!["work".to_string(), "healing".to_string()],
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&entries)), vec![1, 2]);
}

#[test]
fn test_criteria_are_combined() {
    let entries = sample();
    let filter = EntryFilter {
        search: "family".to_string(),
        entry_type: Some(EntryType::PrayerRequest),
        ..EntryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&entries)), vec![3]);
}

#[test]
fn test_filtering_twice_changes_nothing() {
    let entries = sample();
    let filter = EntryFilter {
        search: "a".to_string(),
        start_date: Some(date("2024-01-01")),
        ..EntryFilter::default()
    };
    let once = filter.apply(&entries);
    assert_eq!(filter.apply(&once), once);
}

// ============================================================================
// parse_all_or
// ============================================================================

#[test]
fn test_parse_all_or() {
    assert_eq!(parse_all_or::<EntryType>("all").unwrap(), None);
    assert_eq!(parse_all_or::<Status>("").unwrap(), None);
    assert_eq!(
        parse_all_or::<Status>("answered").unwrap(),
        Some(Status::Answered)
    );
    assert!(parse_all_or::<EntryType>("sermon").is_err());
}
