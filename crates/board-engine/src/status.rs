//! Today-focused status classification.
//!
//! [`classify`] answers the wall display's main question: is a session
//! running right now, is one coming up later today, or is the day over?
//! It is a pure function of `(now, schedule)` — the caller supplies the
//! "now" anchor, so the classifier is testable with fixed clocks and is
//! recomputed from scratch on every tick.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::schedule::{minute_of_day, Schedule, WeeklySession};

/// The display state for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    /// Nothing active and nothing left today.
    None,
    /// At least one session is running right now.
    Active,
    /// Nothing running, but a session starts later today.
    Upcoming,
}

/// The classification of "now" against today's slice of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    /// Every session whose interval contains the current minute, in input
    /// order. Overlapping sessions are all reported, not just one.
    pub current_sessions: Vec<WeeklySession>,
    /// Today's earliest session starting strictly after the current minute,
    /// independent of whether something is active. An active session is
    /// never its own "next".
    pub next_session: Option<WeeklySession>,
    /// Ceiling of the time until `next_session` starts, in whole minutes.
    /// Present exactly when `next_session` is.
    pub minutes_to_start: Option<i64>,
}

/// Classify the current instant against a weekly schedule.
///
/// A session is **active** when the current minute lies inside its
/// `[start, end]` interval, both bounds inclusive — it is active for the
/// whole of its start minute and the whole of its end minute. A session
/// whose start equals the current minute is therefore active, never
/// upcoming. Seconds are never compared.
///
/// Classification precedence: any active session makes the status
/// [`StatusKind::Active`] (the next-up session and its countdown are still
/// carried if present); otherwise a remaining session today makes it
/// [`StatusKind::Upcoming`]; otherwise [`StatusKind::None`]. An empty
/// schedule or an empty day degrades to `None` without error.
///
/// # Examples
///
/// ```
/// use board_engine::{classify, Schedule, StatusKind, WeeklySession};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = Schedule::new(vec![WeeklySession {
///     id: "can-di-34".into(),
///     label: "ASF 1".into(),
///     teacher: "Can".into(),
///     room: "W204".into(),
///     day: 2, // Tuesday
///     start: NaiveTime::from_hms_opt(9, 50, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(11, 20, 0).unwrap(),
///     students: vec![],
/// }])
/// .unwrap();
///
/// // Tuesday 10:30 — mid-session.
/// let now = NaiveDate::from_ymd_opt(2026, 1, 6)
///     .unwrap()
///     .and_hms_opt(10, 30, 0)
///     .unwrap();
/// let status = classify(now, &schedule);
/// assert_eq!(status.kind, StatusKind::Active);
/// assert_eq!(status.current_sessions.len(), 1);
/// assert!(status.next_session.is_none());
/// ```
pub fn classify(now: NaiveDateTime, schedule: &Schedule) -> Status {
    let current_day = now.weekday().num_days_from_sunday() as u8;
    let current_minute = minute_of_day(now.time());

    let todays: Vec<&WeeklySession> = schedule
        .sessions()
        .iter()
        .filter(|s| s.day == current_day)
        .collect();

    let current_sessions: Vec<WeeklySession> = todays
        .iter()
        .filter(|s| s.start_minute() <= current_minute && current_minute <= s.end_minute())
        .map(|s| (*s).clone())
        .collect();

    let mut upcoming: Vec<&WeeklySession> = todays
        .iter()
        .copied()
        .filter(|s| s.start_minute() > current_minute)
        .collect();
    // Stable sort: equal start times keep schedule order.
    upcoming.sort_by_key(|s| s.start_minute());

    let next_session = upcoming.first().map(|s| (*s).clone());
    let minutes_to_start = next_session
        .as_ref()
        .map(|next| ceil_minutes(start_instant_today(now, next.start) - now));

    let kind = if !current_sessions.is_empty() {
        StatusKind::Active
    } else if next_session.is_some() {
        StatusKind::Upcoming
    } else {
        StatusKind::None
    };

    Status {
        kind,
        current_sessions,
        next_session,
        minutes_to_start,
    }
}

/// Today's date with the given start time, seconds and below zeroed.
pub(crate) fn start_instant_today(now: NaiveDateTime, start: NaiveTime) -> NaiveDateTime {
    let start = NaiveTime::from_hms_opt(start.hour(), start.minute(), 0)
        .unwrap_or(start);
    now.date().and_time(start)
}

/// Ceiling of a duration in whole minutes.
///
/// One second before a start the countdown reads 1, not 0; it reaches 0
/// only at the start instant itself.
fn ceil_minutes(until: Duration) -> i64 {
    until.num_milliseconds().div_euclid(60_000)
        + if until.num_milliseconds().rem_euclid(60_000) > 0 {
            1
        } else {
            0
        }
}
