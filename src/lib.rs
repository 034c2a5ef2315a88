//! Day-keyed personal event scheduling with conflict-free intervals, a
//! durable snapshot slot, and month export.
//!
//! # Examples
//!
//! In-memory usage with [`engine::scheduler::Scheduler`]:
//! ```
//! use daybook::{
//!     engine::scheduler::Scheduler,
//!     event::EventDraft,
//!     types::{DayKey, EventType},
//! };
//!
//! let mut scheduler = Scheduler::new();
//! let day = DayKey::new(2025, 3, 14);
//! let event = scheduler.add_event(&day, EventDraft {
//!     name: "Standup".to_string(),
//!     start_time: "09:00".to_string(),
//!     end_time: "09:15".to_string(),
//!     description: None,
//!     kind: EventType::Work,
//! }).expect("add");
//! assert_eq!(event.name, "Standup");
//! assert_eq!(scheduler.events(&day).len(), 1);
//! ```
//!
//! Durable usage with a SQLite slot:
//! ```no_run
//! use daybook::{
//!     event::EventDraft,
//!     persist::sqlite::SqliteSlot,
//!     runtime::session::CalendarSession,
//!     types::{DayKey, EventType},
//! };
//!
//! let slot = SqliteSlot::open("calendar.db").expect("open slot");
//! let mut session = CalendarSession::open(Box::new(slot));
//! session.add_event(&DayKey::new(2025, 3, 14), EventDraft {
//!     name: "Gym".to_string(),
//!     start_time: "07:00".to_string(),
//!     end_time: "08:00".to_string(),
//!     description: None,
//!     kind: EventType::Personal,
//! }).expect("add");
//! ```
#![deny(missing_docs)]

/// In-memory day-keyed store.
pub mod core;
/// Scheduling engine: validation and conflict enforcement.
pub mod engine;
/// Event domain record and input draft.
pub mod event;
/// Month selection and JSON/CSV export rendering.
pub mod export;
/// Persistence abstraction and SQLite slot implementation.
pub mod persist;
/// Synchronous session coupling mutations to durable writes.
pub mod runtime;
/// Shared primitive types.
pub mod types;
