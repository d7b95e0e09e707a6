// src/domain/schedule.rs

use crate::catalog::Meeting;
use chrono::Datelike;

/// Meetings with an unreadable begin timestamp go after every real weekday.
const UNPARSEABLE_BUCKET: u32 = 7;

/// Day of week of the meeting's begin timestamp, 0 = Sunday .. 6 = Saturday.
pub fn weekday_bucket(meeting: &Meeting) -> u32 {
    meeting
        .begin()
        .map(|begin| begin.weekday().num_days_from_sunday())
        .unwrap_or(UNPARSEABLE_BUCKET)
}

/// Orders a section's meetings into a recurring weekly pattern.
///
/// Only the day of week matters, not the calendar date, and the sort is
/// stable so several blocks on the same day keep their catalog order.
pub fn normalize(meetings: Option<&[Meeting]>) -> Vec<Meeting> {
    let mut sorted = meetings.map(<[Meeting]>::to_vec).unwrap_or_default();
    sorted.sort_by_key(weekday_bucket);
    sorted
}
