//! Calendar-relative date rendering.
//!
//! Dates close to the reference day read as words ("Today at 3:00 PM",
//! "Last Monday at 9:15 AM"); anything more than a week away falls back to
//! `MM/DD/YYYY`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub const INVALID_DATE: &str = "Invalid date";

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Offset-less forms, read as wall-clock time in the rendering zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a tracker timestamp into `tz`.
///
/// Accepts RFC 3339, the tracker's `2017-03-14T15:04:05.000+0000` form,
/// offset-less date-times and bare dates (midnight in `tz`).
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(tz));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;

    // A wall-clock time skipped by a DST jump lands just past the gap
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + chrono::Duration::hours(1))).earliest())
}

/// Render `moment` relative to the day containing `now`, in `now`'s zone.
pub fn calendar<Tz: TimeZone, Tz2: TimeZone>(moment: &DateTime<Tz2>, now: &DateTime<Tz>) -> String {
    let local = moment.with_timezone(&now.timezone()).naive_local();
    let start_of_day = now.date_naive().and_time(NaiveTime::MIN);

    // Wall-clock difference so DST shifts don't move the day boundaries.
    let diff = (local - start_of_day).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let time = local.format("%-I:%M %p");

    if diff < -6.0 {
        local.format("%m/%d/%Y").to_string()
    } else if diff < -1.0 {
        format!("Last {} at {}", local.format("%A"), time)
    } else if diff < 0.0 {
        format!("Yesterday at {time}")
    } else if diff < 1.0 {
        format!("Today at {time}")
    } else if diff < 2.0 {
        format!("Tomorrow at {time}")
    } else if diff < 7.0 {
        format!("{} at {}", local.format("%A"), time)
    } else {
        local.format("%m/%d/%Y").to_string()
    }
}

/// Parse and render a raw timestamp; unparsable input renders as `Invalid date`.
pub fn calendar_from_str<Tz: TimeZone>(raw: &str, now: &DateTime<Tz>) -> String {
    match parse_timestamp(raw, &now.timezone()) {
        Some(moment) => calendar(&moment, now),
        None => {
            tracing::debug!(raw, "unparsable timestamp");
            INVALID_DATE.to_string()
        }
    }
}

/// [`calendar_from_str`] against the current local time.
pub fn calendar_local(raw: &str) -> String {
    calendar_from_str(raw, &Local::now())
}
