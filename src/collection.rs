//! The ordered record collection and its identifier generator.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::CensusError;
use crate::models::{Color, NewPerson, Person};

/// Ordered set of person records, keyed by identifier (natural order).
///
/// Identifiers are assigned from a strictly increasing counter. The counter
/// is seeded from `max(id) + 1` when a loaded record set replaces the
/// collection, and resets to 1 on `clear`.
pub struct PersonCollection {
    records: BTreeMap<i64, Person>,
    next_id: i64,
    initialized_at: DateTime<Utc>,
}

impl Default for PersonCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonCollection {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
            initialized_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&Person> {
        self.records.get(&id)
    }

    /// Records in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.records.values()
    }

    /// Replace the whole record set, e.g. after a load. Rejects duplicate
    /// identifiers and re-seeds the identifier counter.
    pub fn replace(&mut self, records: Vec<Person>) -> Result<(), CensusError> {
        let mut map = BTreeMap::new();
        for person in records {
            if map.insert(person.id, person).is_some() {
                return Err(CensusError::Validation(
                    "duplicate identifier in record set".into(),
                ));
            }
        }
        self.next_id = map.keys().next_back().map_or(1, |max| max + 1);
        self.records = map;
        Ok(())
    }

    /// Insert a new record, assigning the next identifier and the creation
    /// timestamp. Returns the assigned identifier.
    pub fn add(&mut self, draft: NewPerson) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, draft.into_person(id, Utc::now()));
        id
    }

    /// Insert only if the candidate orders below the current minimum.
    ///
    /// The candidate is compared before an identifier is assigned, using
    /// placeholder identifier 0; since stored identifiers are positive, the
    /// candidate always orders below the minimum of a non-empty collection.
    pub fn add_if_min(&mut self, draft: NewPerson) -> Option<i64> {
        match self.records.keys().next() {
            Some(&min) if 0 >= min => None,
            _ => Some(self.add(draft)),
        }
    }

    /// Insert only if the candidate orders above the current maximum.
    ///
    /// Same placeholder comparison as [`Self::add_if_min`]: against a
    /// non-empty collection the candidate never orders above the maximum.
    pub fn add_if_max(&mut self, draft: NewPerson) -> Option<i64> {
        match self.records.keys().next_back() {
            Some(&max) if 0 <= max => None,
            _ => Some(self.add(draft)),
        }
    }

    /// Overwrite every field of the record with identifier `id` except the
    /// identifier itself and the original creation timestamp. Returns false
    /// (collection unchanged) when no such record exists.
    pub fn update(&mut self, id: i64, draft: NewPerson) -> bool {
        match self.records.get(&id) {
            Some(existing) => {
                let created = existing.creation_date;
                self.records.insert(id, draft.into_person(id, created));
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: i64) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Remove all records with identifier strictly greater than `threshold`.
    /// Returns the number removed.
    pub fn remove_greater(&mut self, threshold: i64) -> usize {
        let before = self.records.len();
        self.records.retain(|&id, _| id <= threshold);
        before - self.records.len()
    }

    /// Remove all records with identifier strictly less than `threshold`.
    /// Returns the number removed.
    pub fn remove_lower(&mut self, threshold: i64) -> usize {
        let before = self.records.len();
        self.records.retain(|&id, _| id >= threshold);
        before - self.records.len()
    }

    /// Empty the collection and reset the identifier counter to 1.
    pub fn clear(&mut self) {
        self.records.clear();
        self.next_id = 1;
    }

    /// Arithmetic mean of the height field; 0 when the collection is empty.
    pub fn average_height(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: i64 = self.records.values().map(|p| p.height).sum();
        total as f64 / self.records.len() as f64
    }

    /// Number of records whose hair color equals `color`; `None` counts the
    /// records with no hair color set.
    pub fn count_by_hair_color(&self, color: Option<Color>) -> usize {
        self.records
            .values()
            .filter(|p| p.hair_color == color)
            .count()
    }

    /// Records whose hair color is set and orders strictly below `threshold`,
    /// in identifier order. `None` yields no records: ordering against an
    /// unset color is undefined.
    pub fn filter_less_than_hair_color(&self, threshold: Option<Color>) -> Vec<&Person> {
        let Some(threshold) = threshold else {
            return Vec::new();
        };
        self.records
            .values()
            .filter(|p| p.hair_color.is_some_and(|c| c < threshold))
            .collect()
    }

    pub fn initialized_at(&self) -> DateTime<Utc> {
        self.initialized_at
    }

    /// Descriptive snapshot for the `info` verb.
    pub fn describe(&self) -> String {
        format!(
            "collection kind: ordered person set (BTreeMap)\ninitialized: {}\nelements: {}",
            self.initialized_at.format("%Y-%m-%d %H:%M:%S %Z"),
            self.records.len()
        )
    }
}
