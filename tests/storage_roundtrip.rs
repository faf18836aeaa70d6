//! FileStore behavior against real files.

use census::collection::PersonCollection;
use census::models::{Color, Coordinates, Country, Location, NewPerson};
use census::storage::FileStore;
use census::CensusError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn sample() -> NewPerson {
    NewPerson::new(
        "Grace",
        Coordinates { x: 12.5, y: -3.0 },
        168,
        Some(Color::Green),
        None,
        Some(Country::SouthKorea),
        Location {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            name: Some("home".into()),
        },
    )
    .unwrap()
}

#[test]
fn save_then_load_restores_the_records() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("people.json"));

    let mut collection = PersonCollection::new();
    collection.add(sample());
    collection.add(sample());
    store.save(collection.iter()).unwrap();

    let loaded = store.load().unwrap().unwrap();
    let original: Vec<_> = collection.iter().cloned().collect();
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_loads_as_none() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested/deeper/people.json"));

    let mut collection = PersonCollection::new();
    collection.add(sample());
    store.save(collection.iter()).unwrap();

    assert_eq!(store.load().unwrap().unwrap().len(), 1);
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileStore::new(path);
    assert!(matches!(store.load(), Err(CensusError::Malformed(_))));
}

#[test]
fn invariant_violations_in_the_file_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad_record.json");

    let mut collection = PersonCollection::new();
    collection.add(sample());
    let mut record = collection.get(1).cloned().unwrap();
    record.id = -1;
    std::fs::write(&path, serde_json::to_string_pretty(&[record]).unwrap()).unwrap();

    let store = FileStore::new(path);
    match store.load() {
        Err(CensusError::Malformed(msg)) => assert!(msg.contains("-1")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}
