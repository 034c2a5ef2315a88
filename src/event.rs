//! Event domain record and input draft.

use serde::{Deserialize, Serialize};

use crate::types::EventType;

/// A single validated, scheduled item.
///
/// Times are wall-clock `"HH:MM"` 24-hour strings compared lexicographically;
/// a stored event always satisfies `start_time < end_time`. Serialized field
/// names (`name`, `startTime`, `endTime`, `description`, `type`) are the
/// durable-blob and export wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Display label.
    pub name: String,
    /// Inclusive interval start.
    pub start_time: String,
    /// Exclusive interval end.
    pub end_time: String,
    /// Optional free text, omitted from serialization when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category bucket.
    #[serde(rename = "type", default)]
    pub kind: EventType,
}

/// Unvalidated candidate as collected by the presentation layer.
///
/// The scheduling engine converts a draft into an [`Event`] after field and
/// range validation; a draft itself carries no guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Entered label, may be empty.
    pub name: String,
    /// Entered start time, may be empty.
    pub start_time: String,
    /// Entered end time, may be empty.
    pub end_time: String,
    /// Entered free text.
    pub description: Option<String>,
    /// Selected category.
    pub kind: EventType,
}
