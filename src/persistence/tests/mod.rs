use tempfile::TempDir;

use crate::settings::{CenterMode, SettingsRecord};

use super::{
    FileMedium, LEGACY_API_KEY_KEY, MemoryMedium, PersistenceAdapter, SETTINGS_KEY, StorageMedium,
};

#[test]
fn save_then_load_round_trips_the_record() {
    let adapter = PersistenceAdapter::with_medium(MemoryMedium::new());

    let record = SettingsRecord {
        center_mode: CenterMode::Full,
        prodia_seed: Some(1234),
        ..SettingsRecord::default()
    };

    adapter.save(&record);
    assert_eq!(adapter.load(), Some(record));
}

#[test]
fn load_is_absent_when_key_missing() {
    let adapter = PersistenceAdapter::with_medium(MemoryMedium::new());
    assert_eq!(adapter.load(), None);
}

#[test]
fn load_is_absent_without_medium() {
    let adapter = PersistenceAdapter::new(None);
    assert_eq!(adapter.load(), None);
    assert_eq!(adapter.read_legacy_api_key(), None);
}

#[test]
fn save_without_medium_is_a_noop() {
    let adapter = PersistenceAdapter::new(None);
    adapter.save(&SettingsRecord::default());
}

#[test]
fn malformed_snapshot_collapses_to_absent() {
    let medium = MemoryMedium::new();
    medium.write(SETTINGS_KEY, "{ not json at all").unwrap();

    let adapter = PersistenceAdapter::with_medium(medium);
    assert_eq!(adapter.load(), None);
}

#[test]
fn snapshot_with_wrong_shape_collapses_to_absent() {
    let medium = MemoryMedium::new();
    // Valid JSON, but not the {state, version} envelope
    medium.write(SETTINGS_KEY, r#"{"centerMode": "full"}"#).unwrap();

    let adapter = PersistenceAdapter::with_medium(medium);
    assert_eq!(adapter.load(), None);
}

#[test]
fn legacy_key_is_a_bare_string() {
    let medium = MemoryMedium::new();
    medium.write(LEGACY_API_KEY_KEY, "sk-legacy").unwrap();

    let adapter = PersistenceAdapter::with_medium(medium);
    assert_eq!(adapter.read_legacy_api_key(), Some("sk-legacy".to_string()));
}

#[test]
fn save_never_touches_the_legacy_key() {
    let medium = MemoryMedium::new();
    medium.write(LEGACY_API_KEY_KEY, "sk-legacy").unwrap();

    let adapter = PersistenceAdapter::with_medium(medium);
    adapter.save(&SettingsRecord::default());

    assert_eq!(adapter.read_legacy_api_key(), Some("sk-legacy".to_string()));
}

#[test]
fn file_medium_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("lumen");

    let adapter = PersistenceAdapter::with_medium(FileMedium::new(&root));
    let record = SettingsRecord {
        api_key: "sk-live".to_string(),
        ..SettingsRecord::default()
    };
    adapter.save(&record);

    let reloaded = PersistenceAdapter::with_medium(FileMedium::new(&root));
    assert_eq!(reloaded.load(), Some(record));
}

#[test]
fn file_medium_read_of_missing_key_is_absent() {
    let temp = TempDir::new().unwrap();
    let medium = FileMedium::new(temp.path());
    assert_eq!(medium.read("never-written"), None);
}

#[test]
fn snapshot_envelope_carries_state_and_version() {
    let medium = MemoryMedium::new();
    medium
        .write(
            SETTINGS_KEY,
            &format!(
                r#"{{"state": {}, "version": 1}}"#,
                serde_json::to_string(&SettingsRecord::default()).unwrap()
            ),
        )
        .unwrap();

    let adapter = PersistenceAdapter::with_medium(medium);
    assert_eq!(adapter.load(), Some(SettingsRecord::default()));
}
