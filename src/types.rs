//! Shared primitive types: day keys and event categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier for one calendar day.
///
/// The key is a zero-padded `"YYYY-MM-DD"` string, so lexicographic order
/// equals chronological order and equality is locale-independent. Keys read
/// back from an old durable blob are kept verbatim even when they do not
/// match this shape; such keys never match a month filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Builds the key for the given calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self(format!("{year:04}-{month:02}-{day:02}"))
    }

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this key falls in the given year and month.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.split().is_some_and(|(y, m, _)| y == year && m == month)
    }

    fn split(&self) -> Option<(i32, u32, u32)> {
        let mut parts = self.0.splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        Some((year, month, day))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event category bucket.
///
/// Unrecognized labels are preserved verbatim in [`EventType::Other`] so that
/// serialization round-trips exactly; presentation renders them with a
/// default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// Work appointment.
    #[default]
    Work,
    /// Personal appointment.
    Personal,
    /// Holiday entry.
    Holiday,
    /// Any non-standard category, label kept as entered.
    Other(String),
}

impl EventType {
    /// Returns the wire label for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Holiday => "Holiday",
            Self::Other(label) => label,
        }
    }

    /// True for the closed category set, false for [`EventType::Other`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Work" => Self::Work,
            "Personal" => Self::Personal,
            "Holiday" => Self::Holiday,
            _ => Self::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(label) => label,
            recognized => recognized.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
