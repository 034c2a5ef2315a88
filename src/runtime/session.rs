use std::fmt;

use crate::{
    core::store::DayEventStore,
    engine::scheduler::{ScheduleError, Scheduler},
    event::{Event, EventDraft},
    export::{self, ExportFormat, MonthSelection},
    persist::{PersistError, StoreSlot},
    types::DayKey,
};

/// Failure of a session operation.
#[derive(Debug)]
pub enum SessionError {
    /// The scheduler rejected the operation; nothing was mutated or saved.
    Schedule(ScheduleError),
    /// The mutation succeeded in memory but the durable write failed.
    Persist(PersistError),
}

impl From<ScheduleError> for SessionError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<PersistError> for SessionError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schedule(err) => fmt::Display::fmt(err, f),
            Self::Persist(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for SessionError {}

/// A hydrated calendar bound to its durable slot.
///
/// Execution is single-threaded and synchronous: every successful mutation is
/// immediately followed, within the same call, by a full-snapshot save, so
/// memory and durable state never observably diverge. Rejected operations
/// save nothing.
pub struct CalendarSession {
    scheduler: Scheduler,
    slot: Box<dyn StoreSlot>,
    dirty: bool,
}

impl CalendarSession {
    /// Opens a session, hydrating the store from `slot`.
    ///
    /// Absent or corrupt slot content yields an effectively fresh calendar.
    pub fn open(mut slot: Box<dyn StoreSlot>) -> Self {
        let store = slot.load();
        Self {
            scheduler: Scheduler::from_store(store),
            slot,
            dirty: false,
        }
    }

    /// Adds an event to `day` and persists the store.
    pub fn add_event(&mut self, day: &DayKey, draft: EventDraft) -> Result<Event, SessionError> {
        let event = self.scheduler.add_event(day, draft)?;
        self.persist_mutation()?;
        Ok(event)
    }

    /// Replaces the event at `index` of `day` and persists the store.
    pub fn edit_event(
        &mut self,
        day: &DayKey,
        index: usize,
        draft: EventDraft,
    ) -> Result<Event, SessionError> {
        let event = self.scheduler.edit_event(day, index, draft)?;
        self.persist_mutation()?;
        Ok(event)
    }

    /// Deletes the event at `index` of `day` and persists the store.
    ///
    /// Deleting the last event everywhere persists the empty mapping; the
    /// hydration guard only protects an untouched store.
    pub fn delete_event(&mut self, day: &DayKey, index: usize) -> Result<(), SessionError> {
        self.scheduler.delete_event(day, index)?;
        self.persist_mutation()?;
        Ok(())
    }

    /// Ordered events of `day`.
    pub fn events(&self, day: &DayKey) -> &[Event] {
        self.scheduler.events(day)
    }

    /// Events of `day` whose name matches `keyword`, case-insensitively.
    pub fn search(&self, day: &DayKey, keyword: &str) -> Vec<&Event> {
        self.scheduler.search(day, keyword)
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &DayEventStore {
        self.scheduler.store()
    }

    /// The given month's entries in sorted day order.
    pub fn select_month(&self, year: i32, month: u32) -> MonthSelection {
        export::select_month(self.scheduler.store(), year, month)
    }

    /// Renders the given month as a downloadable artifact.
    pub fn export_month(
        &self,
        year: i32,
        month: u32,
        format: ExportFormat,
    ) -> Result<String, serde_json::Error> {
        format.render(&self.select_month(year, month))
    }

    /// Explicitly persists the store.
    ///
    /// Skipped while the store is empty and untouched since hydration, so an
    /// early sync cannot clobber durable state with an uninitialized empty
    /// store.
    pub fn sync(&mut self) -> Result<(), PersistError> {
        if !self.dirty && self.scheduler.store().is_empty() {
            return Ok(());
        }
        self.slot.save(self.scheduler.store())
    }

    fn persist_mutation(&mut self) -> Result<(), PersistError> {
        self.dirty = true;
        self.slot.save(self.scheduler.store())
    }
}
