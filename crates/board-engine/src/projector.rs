//! Week-wide next-occurrence projection.
//!
//! Where [`classify`](crate::classify) only looks at today, [`project_next`]
//! projects every session's weekly slot forward to its nearest future
//! occurrence and picks the soonest across the whole schedule. The wall
//! display uses it when today has nothing left to show.

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::Serialize;

use crate::schedule::{Schedule, WeeklySession};
use crate::status::start_instant_today;

/// A session annotated with its concrete next calendar occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextOccurrence {
    pub session: WeeklySession,
    /// The start instant of the session's nearest future occurrence.
    pub occurrence: NaiveDateTime,
}

/// Project every session forward and return the nearest future occurrence,
/// or `None` for an empty schedule.
///
/// For each session the candidate occurrence is today's date with the
/// session's start time; `days_until = (session.day − today) mod 7`. When
/// `days_until` is 0 and the candidate is not in the future, the slot rolls
/// a full week. The roll compares against the **start** time only: a
/// session that is running right now has already started, so its next
/// occurrence is a week out — this projector never points at an active
/// session.
///
/// Ties are broken by input order (strict `<` comparison, first wins).
///
/// # Examples
///
/// ```
/// use board_engine::{project_next, Schedule, WeeklySession};
/// use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
///
/// let schedule = Schedule::new(vec![WeeklySession {
///     id: "can-di-34".into(),
///     label: "ASF 1".into(),
///     teacher: "Can".into(),
///     room: "W204".into(),
///     day: 2,
///     start: NaiveTime::from_hms_opt(9, 50, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(11, 20, 0).unwrap(),
///     students: vec![],
/// }])
/// .unwrap();
///
/// // Tuesday 11:25, after the slot ended: next occurrence is next Tuesday.
/// let now = NaiveDate::from_ymd_opt(2026, 1, 6)
///     .unwrap()
///     .and_hms_opt(11, 25, 0)
///     .unwrap();
/// let next = project_next(now, &schedule).unwrap();
/// assert_eq!(next.occurrence.date(), NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
/// assert_eq!(next.occurrence.weekday(), Weekday::Tue);
/// ```
pub fn project_next(now: NaiveDateTime, schedule: &Schedule) -> Option<NextOccurrence> {
    let current_day = i64::from(now.weekday().num_days_from_sunday());

    let mut best: Option<NextOccurrence> = None;
    for session in schedule.sessions() {
        let candidate = start_instant_today(now, session.start);
        let mut days_until = (i64::from(session.day) - current_day).rem_euclid(7);
        if days_until == 0 && candidate <= now {
            days_until = 7;
        }
        let occurrence = candidate + Duration::days(days_until);

        let better = match &best {
            Some(b) => occurrence < b.occurrence,
            None => true,
        };
        if better {
            best = Some(NextOccurrence {
                session: session.clone(),
                occurrence,
            });
        }
    }
    best
}

// ── Countdown decomposition ─────────────────────────────────────────────────

/// Time remaining until an occurrence, decomposed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Countdown {
    /// Total seconds until the occurrence (negative if it is in the past).
    pub total_seconds: i64,
    /// Days component of the decomposed countdown.
    pub days: i64,
    /// Hours component (0-23).
    pub hours: i64,
    /// Minutes component (0-59).
    pub minutes: i64,
    /// Seconds component (0-59).
    pub seconds: i64,
    /// Human-readable representation (e.g., "2 days, 3 hours, 15 minutes").
    pub human_readable: String,
}

/// Decompose the time from `now` until `occurrence` into
/// days/hours/minutes/seconds.
///
/// If `occurrence` is before `now`, `total_seconds` is negative and the
/// decomposition represents the absolute distance.
pub fn countdown_until(now: NaiveDateTime, occurrence: NaiveDateTime) -> Countdown {
    let total_seconds = (occurrence - now).num_seconds();
    let abs_seconds = total_seconds.unsigned_abs();

    let days = (abs_seconds / 86400) as i64;
    let remainder = abs_seconds % 86400;
    let hours = (remainder / 3600) as i64;
    let remainder = remainder % 3600;
    let minutes = (remainder / 60) as i64;
    let seconds = (remainder % 60) as i64;

    let human_readable = format_human_countdown(days, hours, minutes, seconds);

    Countdown {
        total_seconds,
        days,
        hours,
        minutes,
        seconds,
        human_readable,
    }
}

fn format_human_countdown(days: i64, hours: i64, minutes: i64, seconds: i64) -> String {
    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    if hours > 0 {
        parts.push(format!(
            "{} hour{}",
            hours,
            if hours == 1 { "" } else { "s" }
        ));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!(
            "{} second{}",
            seconds,
            if seconds == 1 { "" } else { "s" }
        ));
    }
    parts.join(", ")
}
