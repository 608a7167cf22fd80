use super::*;
use crate::test_support::{entry, ids, with_person, with_time};
use faithlog_storage::{EntryKind, Status};

fn prayer(status: Status) -> EntryKind {
    EntryKind::PrayerRequest { status }
}

// ============================================================================
// SortConfig
// ============================================================================

#[test]
fn test_default_is_date_descending() {
    let config = SortConfig::default();
    assert_eq!(config.key, SortKey::Date);
    assert_eq!(config.direction, SortDirection::Descending);
}

#[test]
fn test_toggle_same_key_flips_new_key_resets() {
    let config = SortConfig::default();

    let flipped = config.toggle(SortKey::Date);
    assert_eq!(flipped.direction, SortDirection::Ascending);
    assert_eq!(flipped.toggle(SortKey::Date).direction, SortDirection::Descending);

    let other = config.toggle(SortKey::PersonName);
    assert_eq!(
        other,
        SortConfig::new(SortKey::PersonName, SortDirection::Ascending)
    );
}

// ============================================================================
// keys
// ============================================================================

#[test]
fn test_date_uses_time_of_day() {
    let entries = vec![
        with_time(entry(1, "2024-01-10", EntryKind::Testimony), "08:00:00"),
        with_time(entry(2, "2024-01-10", EntryKind::Testimony), "20:00:00"),
        with_time(entry(3, "2024-01-09", EntryKind::Testimony), "23:00:00"),
    ];
    let sorted = SortConfig::default().sorted(&entries);
    assert_eq!(ids(&sorted), vec![2, 1, 3]);
}

#[test]
fn test_ascending_and_descending_are_reverses() {
    let entries = vec![
        entry(1, "2024-01-03", EntryKind::Testimony),
        entry(2, "2024-01-01", EntryKind::Gratitude),
        entry(3, "2024-01-02", EntryKind::Testimony),
    ];
    let asc = SortConfig::new(SortKey::Date, SortDirection::Ascending).sorted(&entries);
    let mut desc = SortConfig::new(SortKey::Date, SortDirection::Descending).sorted(&entries);
    desc.reverse();

    assert_eq!(ids(&asc), vec![2, 3, 1]);
    assert_eq!(asc, desc);
}

#[test]
fn test_ties_keep_input_order_in_both_directions() {
    let entries = vec![
        with_person(entry(1, "2024-01-01", EntryKind::Testimony), "Ana"),
        with_person(entry(2, "2024-01-02", EntryKind::Testimony), "Ana"),
        with_person(entry(3, "2024-01-03", EntryKind::Testimony), "Ben"),
    ];
    let asc = SortConfig::new(SortKey::PersonName, SortDirection::Ascending).sorted(&entries);
    let desc = SortConfig::new(SortKey::PersonName, SortDirection::Descending).sorted(&entries);

    assert_eq!(ids(&asc), vec![1, 2, 3]);
    assert_eq!(ids(&desc), vec![3, 1, 2]);
}

#[test]
fn test_missing_title_and_status_sort_first() {
    let mut titled = entry(1, "2024-01-01", EntryKind::Testimony);
    titled.title = Some("Answered".to_string());
    let untitled = entry(2, "2024-01-01", EntryKind::Testimony);

    let by_title =
        SortConfig::new(SortKey::Title, SortDirection::Ascending).sorted(&[titled, untitled]);
    assert_eq!(ids(&by_title), vec![2, 1]);

    let entries = vec![
        entry(1, "2024-01-01", prayer(Status::Pending)),
        entry(2, "2024-01-01", EntryKind::Gratitude),
        entry(3, "2024-01-01", prayer(Status::Answered)),
    ];
    let by_status = SortConfig::new(SortKey::Status, SortDirection::Ascending).sorted(&entries);
    assert_eq!(ids(&by_status), vec![2, 3, 1]);
}

#[test]
fn test_type_sorts_by_wire_name() {
    let entries = vec![
        entry(1, "2024-01-01", EntryKind::Testimony),
        entry(2, "2024-01-01", prayer(Status::Pending)),
        entry(3, "2024-01-01", EntryKind::Gratitude),
    ];
    let sorted = SortConfig::new(SortKey::Type, SortDirection::Ascending).sorted(&entries);
    assert_eq!(ids(&sorted), vec![3, 2, 1]);
}

#[test]
fn test_timestamp_keys() {
    let mut entries = vec![
        entry(1, "2024-01-01", EntryKind::Testimony),
        entry(2, "2024-01-01", EntryKind::Testimony),
    ];
    entries[0].updated_at = 9_000;

    let by_created =
        SortConfig::new(SortKey::CreatedAt, SortDirection::Descending).sorted(&entries);
    assert_eq!(ids(&by_created), vec![2, 1]);

    let by_updated =
        SortConfig::new(SortKey::UpdatedAt, SortDirection::Descending).sorted(&entries);
    assert_eq!(ids(&by_updated), vec![1, 2]);
}

#[test]
fn test_parse_sort_key() {
    assert_eq!("person".parse::<SortKey>().unwrap(), SortKey::PersonName);
    assert_eq!("person_name".parse::<SortKey>().unwrap(), SortKey::PersonName);
    assert_eq!("updatedAt".parse::<SortKey>().unwrap(), SortKey::UpdatedAt);
    assert!("mood".parse::<SortKey>().is_err());
    for key in SortKey::ALL {
        assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
    }
}
