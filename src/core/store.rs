use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{event::Event, types::DayKey};

/// Mapping from [`DayKey`] to the ordered event sequence of that day.
///
/// Insertion order within a day is display and edit-index order. A day with
/// an empty sequence must not exist in the mapping; absence represents "no
/// events", and [`DayEventStore::set`] maintains that shape. The store holds
/// no validation logic; the scheduling engine owns the overlap invariant.
///
/// Serializes transparently as a JSON object keyed by day strings, which is
/// the durable-slot blob format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayEventStore {
    days: HashMap<DayKey, Vec<Event>>,
}

impl DayEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered events of `day`, empty for absent days.
    pub fn get(&self, day: &DayKey) -> &[Event] {
        self.days.get(day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replaces the sequence of `day`; an empty sequence removes the key.
    pub fn set(&mut self, day: DayKey, events: Vec<Event>) {
        if events.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, events);
        }
    }

    /// Removes `day` entirely, returning its former sequence.
    pub fn remove(&mut self, day: &DayKey) -> Option<Vec<Event>> {
        self.days.remove(day)
    }

    /// True when `day` has at least one event.
    pub fn contains(&self, day: &DayKey) -> bool {
        self.days.contains_key(day)
    }

    /// Number of days holding events.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// True when no day holds events.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All day keys in sorted (chronological) order.
    pub fn days(&self) -> Vec<&DayKey> {
        let mut keys: Vec<&DayKey> = self.days.keys().collect();
        keys.sort();
        keys
    }

    /// Iterates over `(day, events)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &[Event])> {
        self.days.iter().map(|(day, events)| (day, events.as_slice()))
    }
}
