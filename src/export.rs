//! Month selection and downloadable JSON/CSV rendering.

use crate::{core::store::DayEventStore, event::Event, types::DayKey};

/// One month of entries: `(day, events)` pairs in sorted day order.
pub type MonthSelection = Vec<(DayKey, Vec<Event>)>;

/// CSV header row; the column order is fixed.
pub const CSV_HEADER: &str = "Date,Name,Start Time,End Time,Description,Type";

/// Downloadable artifact format for a month export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array of `[day, events]` pairs.
    Json,
    /// Comma-separated text with the [`CSV_HEADER`] row.
    Csv,
}

impl ExportFormat {
    /// Suggested download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "events.json",
            Self::Csv => "events.csv",
        }
    }

    /// MIME type of the rendered artifact.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    /// Renders `selection` into this format.
    pub fn render(self, selection: &MonthSelection) -> Result<String, serde_json::Error> {
        match self {
            Self::Json => to_json(selection),
            Self::Csv => Ok(to_csv(selection)),
        }
    }
}

/// Filters `store` down to the days of the given year and month.
///
/// Pairs come back in sorted day order, so repeated exports of the same store
/// are byte-identical.
pub fn select_month(store: &DayEventStore, year: i32, month: u32) -> MonthSelection {
    let mut selection: MonthSelection = store
        .iter()
        .filter(|(day, _)| day.in_month(year, month))
        .map(|(day, events)| (day.clone(), events.to_vec()))
        .collect();
    selection.sort_by(|(a, _), (b, _)| a.cmp(b));
    selection
}

/// Pretty-printed structural serialization of `selection`.
///
/// The output parses back into the same `(day, events)` pairs.
pub fn to_json(selection: &MonthSelection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(selection)
}

/// Renders `selection` as CSV: the header row, then one row per event per
/// day.
///
/// Only `description` is double-quote wrapped, to tolerate embedded commas;
/// no further escaping is applied. Every row ends with a newline.
pub fn to_csv(selection: &MonthSelection) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for (day, events) in selection {
        for event in events {
            let description = event.description.as_deref().unwrap_or_default();
            csv.push_str(&format!(
                "{day},{name},{start},{end},\"{description}\",{kind}\n",
                name = event.name,
                start = event.start_time,
                end = event.end_time,
                kind = event.kind,
            ));
        }
    }

    csv
}
