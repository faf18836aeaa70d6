//! Behavior of the ordered collection: identifier assignment, conditional
//! inserts, range removals, and the aggregate queries.

use census::collection::PersonCollection;
use census::models::{Color, Coordinates, Location, NewPerson};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn draft(name: &str, height: i64) -> NewPerson {
    NewPerson::new(
        name,
        Coordinates { x: 1.0, y: 2.0 },
        height,
        None,
        None,
        None,
        Location {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            name: None,
        },
    )
    .unwrap()
}

fn draft_with_hair(name: &str, hair: Option<Color>) -> NewPerson {
    let mut d = draft(name, 170);
    d.hair_color = hair;
    d
}

#[test]
fn ids_increase_and_are_never_reused() {
    let mut collection = PersonCollection::new();
    assert_eq!(collection.add(draft("a", 170)), 1);
    assert_eq!(collection.add(draft("b", 171)), 2);
    assert!(collection.remove_by_id(2));
    // The freed id is not handed out again.
    assert_eq!(collection.add(draft("c", 172)), 3);
}

#[test]
fn clear_resets_the_id_counter() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    collection.add(draft("b", 171));
    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.add(draft("c", 172)), 1);
}

#[test]
fn replace_seeds_the_counter_past_the_max_id() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    collection.add(draft("b", 171));
    let records: Vec<_> = collection.iter().cloned().collect();

    let mut fresh = PersonCollection::new();
    fresh.replace(records).unwrap();
    assert_eq!(fresh.add(draft("c", 172)), 3);
}

#[test]
fn replace_rejects_duplicate_ids() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    let record = collection.get(1).cloned().unwrap();

    let mut fresh = PersonCollection::new();
    assert!(fresh.replace(vec![record.clone(), record]).is_err());
}

#[test]
fn update_preserves_id_and_creation_date() {
    let mut collection = PersonCollection::new();
    let id = collection.add(draft("before", 170));
    let created = collection.get(id).unwrap().creation_date;

    assert!(collection.update(id, draft("after", 199)));
    let updated = collection.get(id).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.creation_date, created);
    assert_eq!(updated.name, "after");
    assert_eq!(updated.height, 199);
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    assert!(!collection.update(42, draft("b", 171)));
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(1).unwrap().name, "a");
}

#[test]
fn range_removals_are_strict() {
    let mut collection = PersonCollection::new();
    for name in ["a", "b", "c"] {
        collection.add(draft(name, 170));
    }
    // ids are {1, 2, 3}; the threshold element survives both removals
    assert_eq!(collection.remove_greater(2), 1);
    assert_eq!(collection.remove_lower(2), 1);
    let remaining: Vec<i64> = collection.iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![2]);
}

#[test]
fn add_if_min_inserts_into_empty_collection() {
    let mut collection = PersonCollection::new();
    assert_eq!(collection.add_if_min(draft("a", 170)), Some(1));
}

#[test]
fn add_if_min_inserts_when_candidate_orders_first() {
    // The candidate is compared with placeholder id 0, which orders below
    // every stored id.
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    assert_eq!(collection.add_if_min(draft("b", 171)), Some(2));
}

#[test]
fn add_if_max_refuses_against_nonempty_collection() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 170));
    assert_eq!(collection.add_if_max(draft("b", 171)), None);
    assert_eq!(collection.len(), 1);
}

#[test]
fn average_height_of_empty_collection_is_zero() {
    let collection = PersonCollection::new();
    assert_eq!(collection.average_height(), 0.0);
}

#[test]
fn average_height_is_the_mean() {
    let mut collection = PersonCollection::new();
    collection.add(draft("a", 150));
    collection.add(draft("b", 200));
    assert_eq!(collection.average_height(), 175.0);
}

#[test]
fn count_by_hair_color_handles_unset() {
    let mut collection = PersonCollection::new();
    collection.add(draft_with_hair("a", Some(Color::Red)));
    collection.add(draft_with_hair("b", Some(Color::Red)));
    collection.add(draft_with_hair("c", None));
    assert_eq!(collection.count_by_hair_color(Some(Color::Red)), 2);
    assert_eq!(collection.count_by_hair_color(Some(Color::Blue)), 0);
    assert_eq!(collection.count_by_hair_color(None), 1);
}

#[test]
fn filter_less_than_hair_color_orders_by_id_and_skips_unset() {
    let mut collection = PersonCollection::new();
    collection.add(draft_with_hair("a", Some(Color::Green)));
    collection.add(draft_with_hair("b", None));
    collection.add(draft_with_hair("c", Some(Color::Red)));
    collection.add(draft_with_hair("d", Some(Color::Brown)));

    let below_blue = collection.filter_less_than_hair_color(Some(Color::Blue));
    let ids: Vec<i64> = below_blue.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);

    assert!(collection.filter_less_than_hair_color(None).is_empty());
}

proptest! {
    #[test]
    fn assigned_ids_are_strictly_increasing(removals in proptest::collection::vec(0u8..4, 0..30)) {
        let mut collection = PersonCollection::new();
        let mut last = 0;
        for step in removals {
            let id = collection.add(draft("p", 170));
            prop_assert!(id > last);
            last = id;
            // Interleave removals; they must never make an id come back.
            if step == 0 {
                collection.remove_by_id(id);
            }
        }
    }
}
