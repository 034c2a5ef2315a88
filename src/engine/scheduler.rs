use std::fmt;

use crate::{
    core::store::DayEventStore,
    event::{Event, EventDraft},
    types::DayKey,
};

use super::conflict::find_conflict;

/// Recoverable outcome of a rejected scheduler operation.
///
/// A rejected operation never partially mutates a day's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A required field was empty; carries the wire name of the field.
    MissingField(&'static str),
    /// Start time was not strictly before end time.
    InvalidRange {
        /// Entered start time.
        start: String,
        /// Entered end time.
        end: String,
    },
    /// The candidate overlaps an existing event of the same day.
    Conflict {
        /// Sequence index of the first conflicting event.
        index: usize,
        /// The conflicting event.
        existing: Event,
    },
    /// No event exists at the given index for that day.
    NotFound {
        /// Requested sequence index.
        index: usize,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidRange { start, end } => {
                write!(f, "end time {end} must be after start time {start}")
            }
            Self::Conflict { existing, .. } => write!(
                f,
                "overlaps existing event `{}` ({}-{})",
                existing.name, existing.start_time, existing.end_time
            ),
            Self::NotFound { index } => write!(f, "no event at index {index}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Scheduling engine over a [`DayEventStore`].
///
/// All operations act on a single day's sequence; cross-day effects never
/// occur. The engine owns validation and the overlap invariant; the store
/// underneath is a dumb container.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    store: DayEventStore,
}

impl Scheduler {
    /// Creates a scheduler over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing (e.g. freshly hydrated) store.
    pub fn from_store(store: DayEventStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &DayEventStore {
        &self.store
    }

    /// Consumes the scheduler, yielding the store.
    pub fn into_store(self) -> DayEventStore {
        self.store
    }

    /// Validates `draft` and appends it to `day`.
    ///
    /// On success the event becomes the last element of the day's sequence
    /// (index = previous length) and is returned.
    pub fn add_event(&mut self, day: &DayKey, draft: EventDraft) -> Result<Event, ScheduleError> {
        let event = validate(draft)?;
        let events = self.store.get(day);
        if let Some((index, existing)) =
            find_conflict(events, None, &event.start_time, &event.end_time)
        {
            return Err(ScheduleError::Conflict {
                index,
                existing: existing.clone(),
            });
        }

        let mut next = events.to_vec();
        next.push(event.clone());
        self.store.set(day.clone(), next);
        Ok(event)
    }

    /// Validates `draft` and replaces the event at `index` in place.
    ///
    /// The conflict check excludes the event currently at `index`, so an
    /// event may be re-saved with an unchanged time range. Indices are only
    /// valid within the same synchronous call chain; callers must not cache
    /// an index across operations.
    pub fn edit_event(
        &mut self,
        day: &DayKey,
        index: usize,
        draft: EventDraft,
    ) -> Result<Event, ScheduleError> {
        let events = self.store.get(day);
        if index >= events.len() {
            return Err(ScheduleError::NotFound { index });
        }

        let event = validate(draft)?;
        if let Some((conflict_index, existing)) =
            find_conflict(events, Some(index), &event.start_time, &event.end_time)
        {
            return Err(ScheduleError::Conflict {
                index: conflict_index,
                existing: existing.clone(),
            });
        }

        let mut next = events.to_vec();
        next[index] = event.clone();
        self.store.set(day.clone(), next);
        Ok(event)
    }

    /// Removes the event at `index`; later indices shift down by one.
    ///
    /// Deleting the last event of a day removes the day key entirely.
    pub fn delete_event(&mut self, day: &DayKey, index: usize) -> Result<(), ScheduleError> {
        let events = self.store.get(day);
        if index >= events.len() {
            return Err(ScheduleError::NotFound { index });
        }

        let mut next = events.to_vec();
        next.remove(index);
        self.store.set(day.clone(), next);
        Ok(())
    }

    /// Ordered events of `day`, empty for days without events.
    pub fn events(&self, day: &DayKey) -> &[Event] {
        self.store.get(day)
    }

    /// Events of `day` whose name contains `keyword`, case-insensitively,
    /// in sequence order.
    pub fn search(&self, day: &DayKey, keyword: &str) -> Vec<&Event> {
        let needle = keyword.to_lowercase();
        self.store
            .get(day)
            .iter()
            .filter(|event| event.name.to_lowercase().contains(&needle))
            .collect()
    }
}

fn validate(draft: EventDraft) -> Result<Event, ScheduleError> {
    if draft.name.is_empty() {
        return Err(ScheduleError::MissingField("name"));
    }
    if draft.start_time.is_empty() {
        return Err(ScheduleError::MissingField("startTime"));
    }
    if draft.end_time.is_empty() {
        return Err(ScheduleError::MissingField("endTime"));
    }
    if draft.start_time >= draft.end_time {
        return Err(ScheduleError::InvalidRange {
            start: draft.start_time,
            end: draft.end_time,
        });
    }

    Ok(Event {
        name: draft.name,
        start_time: draft.start_time,
        end_time: draft.end_time,
        description: draft.description,
        kind: draft.kind,
    })
}
