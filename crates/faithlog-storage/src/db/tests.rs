use super::*;
use crate::migrations::SCHEMA_VERSION;
use crate::models::{EntryDraft, EntryKind, EntryRecord, Status, Tags};
use chrono::{NaiveDate, NaiveTime};

// ============================================================================
// Helper functions for creating test data
// ============================================================================

fn draft(person: &str, kind: EntryKind) -> EntryDraft {
    EntryDraft {
        kind,
        date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        time: NaiveTime::from_hms_opt(19, 45, 12).unwrap(),
        person_name: person.to_string(),
        title: Some("Evening prayer".to_string()),
        details: "Prayed together after dinner".to_string(),
        tags: Tags::parse("family, evening"),
    }
}

fn new_record(person: &str, kind: EntryKind) -> EntryRecord {
    EntryRecord {
        id: None,
        draft: draft(person, kind),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}

// ============================================================================
// Entry CRUD tests
// ============================================================================

#[test]
fn test_put_without_id_assigns_increasing_ids() {
    let db = Database::open_in_memory().unwrap();
    let first = db.put_entry(&new_record("Ana", EntryKind::Testimony)).unwrap();
    let second = db.put_entry(&new_record("Ben", EntryKind::Gratitude)).unwrap();
    assert!(second > first);
}

#[test]
fn test_put_and_get_round_trip() {
    let db = Database::open_in_memory().unwrap();
    let record = new_record(
        "Ana",
        EntryKind::PrayerRequest {
            status: Status::InProgress,
        },
    );
    let id = db.put_entry(&record).unwrap();

    let stored = db.get_entry(id).unwrap().unwrap();
    assert_eq!(stored, record.into_entry(id));
    assert_eq!(stored.status(), Some(Status::InProgress));
}

#[test]
fn test_put_with_id_replaces_record() {
    let db = Database::open_in_memory().unwrap();
    let id = db
        .put_entry(&new_record(
            "Ana",
            EntryKind::PrayerRequest {
                status: Status::Pending,
            },
        ))
        .unwrap();

    let mut replacement = new_record("Ana", EntryKind::Testimony);
    replacement.id = Some(id);
    replacement.draft.details = "It was answered, now a testimony".to_string();
    replacement.updated_at += 10;
    assert_eq!(db.put_entry(&replacement).unwrap(), id);

    let all = db.get_all_entries().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].kind, EntryKind::Testimony);
    assert_eq!(all[0].status(), None);
    assert_eq!(all[0].details, "It was answered, now a testimony");
}

#[test]
fn test_get_missing_entry_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_entry(42).unwrap().is_none());
}

#[test]
fn test_delete_entry_and_missing_id() {
    let db = Database::open_in_memory().unwrap();
    let id = db.put_entry(&new_record("Ana", EntryKind::Gratitude)).unwrap();

    db.delete_entry(id).unwrap();
    assert!(db.get_all_entries().unwrap().is_empty());

    // Deleting again is a no-op
    db.delete_entry(id).unwrap();
    db.delete_entry(9_999).unwrap();
}

#[test]
fn test_ids_not_reused_after_clear() {
    let db = Database::open_in_memory().unwrap();
    let first = db.put_entry(&new_record("Ana", EntryKind::Gratitude)).unwrap();
    db.put_entry(&new_record("Ben", EntryKind::Gratitude)).unwrap();

    assert_eq!(db.clear_entries().unwrap(), 2);
    assert!(db.get_all_entries().unwrap().is_empty());

    let next = db.put_entry(&new_record("Cai", EntryKind::Gratitude)).unwrap();
    assert!(next > first + 1);
}

#[test]
fn test_tags_survive_storage_in_order() {
    let db = Database::open_in_memory().unwrap();
    let mut record = new_record("Ana", EntryKind::Testimony);
    record.draft.tags = Tags::parse("zeal, awe, zeal, hope");
    let id = db.put_entry(&record).unwrap();

    let stored = db.get_entry(id).unwrap().unwrap();
    assert_eq!(stored.tags.as_slice(), ["zeal", "awe", "hope"]);
}

#[test]
fn test_status_check_constraint() {
    let db = Database::open_in_memory().unwrap();
    let conn = db.conn().unwrap();
    let result = conn.execute(
        "INSERT INTO entries (type, status, date, time, person_name, details, created_at, updated_at)
         VALUES ('gratitude', 'pending', '2024-01-01', '10:00:00', 'Ana', 'x', 1, 1)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn test_corrupt_row_reported() {
    let db = Database::open_in_memory().unwrap();
    {
        let conn = db.conn().unwrap();
        conn.execute(
            "INSERT INTO entries (type, status, date, time, person_name, details, created_at, updated_at)
             VALUES ('testimony', NULL, 'yesterday', '10:00:00', 'Ana', 'x', 1, 1)",
            [],
        )
        .unwrap();
    }

    match db.get_all_entries() {
        Err(StorageError::Corrupt { reason, .. }) => assert!(reason.contains("yesterday")),
        other => panic!("expected corrupt row error, got {other:?}"),
    }
}

// ============================================================================
// Schema and settings tests
// ============================================================================

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn test_reopen_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("journal.db");

    let id = {
        let db = Database::new(Some(path.clone())).unwrap();
        assert_eq!(db.path(), Some(path.as_path()));
        db.put_entry(&new_record("Ana", EntryKind::Testimony)).unwrap()
    };

    let db = Database::new(Some(path)).unwrap();
    let all = db.get_all_entries().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
}

#[test]
fn test_newer_schema_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .unwrap();
    }

    match Database::new(Some(path)) {
        Err(StorageError::UnsupportedSchema { found, supported }) => {
            assert_eq!(found, SCHEMA_VERSION + 1);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("newer schema should be rejected"),
    }
}

#[test]
fn test_settings_round_trip() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_setting("language").unwrap(), None);

    db.set_setting("language", "es").unwrap();
    db.set_setting("language", "en").unwrap();
    assert_eq!(db.get_setting("language").unwrap().as_deref(), Some("en"));
}

#[test]
fn test_clear_keeps_settings() {
    let db = Database::open_in_memory().unwrap();
    db.set_setting("language", "es").unwrap();
    db.put_entry(&new_record("Ana", EntryKind::Gratitude)).unwrap();

    db.clear_entries().unwrap();
    assert_eq!(db.get_setting("language").unwrap().as_deref(), Some("es"));
}
