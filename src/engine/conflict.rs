use crate::event::Event;

/// True when `[start, end)` overlaps the interval of `other`.
///
/// Two intervals `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`;
/// an event ending exactly when another starts does not overlap. Correct for
/// all orderings, including a candidate that strictly contains or is
/// contained by the existing interval.
pub fn overlaps(start: &str, end: &str, other: &Event) -> bool {
    start < other.end_time.as_str() && other.start_time.as_str() < end
}

/// Scans `events` in sequence order for the first interval overlapping
/// `[start, end)`, skipping the element at `skip` when given.
///
/// Linear scan; per-day event counts are small, so no interval structure is
/// kept. The skip index lets an event be edited in place without colliding
/// with itself.
pub fn find_conflict<'a>(
    events: &'a [Event],
    skip: Option<usize>,
    start: &str,
    end: &str,
) -> Option<(usize, &'a Event)> {
    events
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != skip)
        .find(|(_, event)| overlaps(start, end, event))
}
