//! One-shot alert marker for the five-minute warning.
//!
//! The engine only decides *when* the warning is due; the caller performs
//! the actual effect (a sound, a flash). The marker is the single piece of
//! state carried across evaluation ticks, owned by the caller and fed each
//! freshly computed [`Status`].

use crate::status::{Status, StatusKind};

/// Minutes-to-start value at which the one-shot warning fires.
pub const ALERT_MINUTES: i64 = 5;

/// Caller-owned state that gates the five-minute warning to at most one
/// firing per session per countdown pass.
///
/// [`observe`](AlertMarker::observe) returns `true` exactly when the
/// countdown reads 5 whole minutes (not "at most 5") and the warning has not
/// yet fired for that session id. The marker clears whenever the status
/// drops to [`StatusKind::None`], so the same session warns again next week.
///
/// The evaluation cadence must be fine enough not to step over the value 5;
/// the reference shell re-evaluates every 30 seconds.
#[derive(Debug, Clone, Default)]
pub struct AlertMarker {
    fired_for: Option<String>,
}

impl AlertMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one evaluation tick; returns whether the alert effect is due now.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_engine::{classify, AlertMarker, Schedule, WeeklySession};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let schedule = Schedule::new(vec![WeeklySession {
    ///     id: "a".into(),
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
    /// let mut marker = AlertMarker::new();
    /// let at = |h, m, s| {
    ///     NaiveDate::from_ymd_opt(2026, 1, 6)
    ///         .unwrap()
    ///         .and_hms_opt(h, m, s)
    ///         .unwrap()
    /// };
    ///
    /// assert!(!marker.observe(&classify(at(9, 44, 30), &schedule))); // 6 min out
    /// assert!(marker.observe(&classify(at(9, 45, 0), &schedule))); // exactly 5
    /// assert!(!marker.observe(&classify(at(9, 45, 30), &schedule))); // still 5, already fired
    /// ```
    pub fn observe(&mut self, status: &Status) -> bool {
        if status.kind == StatusKind::None {
            self.fired_for = None;
            return false;
        }
        if status.minutes_to_start != Some(ALERT_MINUTES) {
            return false;
        }
        let Some(next) = &status.next_session else {
            return false;
        };
        if self.fired_for.as_deref() == Some(next.id.as_str()) {
            return false;
        }
        self.fired_for = Some(next.id.clone());
        true
    }

    /// The session id the warning last fired for, if any.
    pub fn last_fired(&self) -> Option<&str> {
        self.fired_for.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, Schedule, WeeklySession};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn session(id: &str, day: u8, start: NaiveTime, end: NaiveTime) -> WeeklySession {
        WeeklySession {
            id: id.to_string(),
            label: "ASF 1".to_string(),
            teacher: "Can".to_string(),
            room: "W204".to_string(),
            day,
            start,
            end,
            students: vec![],
        }
    }

    /// Tuesday, 2026-01-06.
    fn tuesday(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 6)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn fires_once_at_exactly_five_minutes() {
        let schedule = Schedule::new(vec![session("a", 2, time(9, 50), time(11, 20))]).unwrap();
        let mut marker = AlertMarker::new();

        // Walk the 30-second cadence through the countdown.
        let mut fired = 0;
        for half_minute in 0..40 {
            let secs = half_minute * 30;
            let now = tuesday(9, 40, 0) + chrono::Duration::seconds(secs);
            if marker.observe(&classify(now, &schedule)) {
                fired += 1;
                assert_eq!(classify(now, &schedule).minutes_to_start, Some(5));
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(marker.last_fired(), Some("a"));
    }

    #[test]
    fn does_not_fire_at_six_or_four() {
        let schedule = Schedule::new(vec![session("a", 2, time(9, 50), time(11, 20))]).unwrap();
        let mut marker = AlertMarker::new();
        assert!(!marker.observe(&classify(tuesday(9, 44, 0), &schedule))); // 6 min
        // Skip straight past 5: a too-coarse cadence never fires.
        let mut skipping = AlertMarker::new();
        assert!(!skipping.observe(&classify(tuesday(9, 46, 30), &schedule))); // 4 min
    }

    #[test]
    fn resets_when_status_drops_to_none() {
        let schedule = Schedule::new(vec![session("a", 2, time(9, 50), time(11, 20))]).unwrap();
        let mut marker = AlertMarker::new();

        assert!(marker.observe(&classify(tuesday(9, 45, 0), &schedule)));
        assert_eq!(marker.last_fired(), Some("a"));

        // Past the end of the day's last session: NONE clears the marker.
        assert!(!marker.observe(&classify(tuesday(11, 30, 0), &schedule)));
        assert_eq!(marker.last_fired(), None);
    }

    #[test]
    fn fires_for_next_session_while_another_is_active() {
        let schedule = Schedule::new(vec![
            session("morning", 2, time(9, 50), time(11, 20)),
            session("noon", 2, time(11, 25), time(13, 10)),
        ])
        .unwrap();
        let mut marker = AlertMarker::new();

        // 11:20 is inside "morning" (inclusive end) and exactly 5 minutes
        // before "noon" starts.
        let status = classify(tuesday(11, 20, 0), &schedule);
        assert_eq!(status.minutes_to_start, Some(5));
        assert!(marker.observe(&status));
        assert_eq!(marker.last_fired(), Some("noon"));
    }

    #[test]
    fn separate_sessions_each_get_one_firing() {
        let schedule = Schedule::new(vec![
            session("first", 2, time(9, 50), time(10, 20)),
            session("second", 2, time(11, 40), time(13, 10)),
        ])
        .unwrap();
        let mut marker = AlertMarker::new();

        assert!(marker.observe(&classify(tuesday(9, 45, 0), &schedule)));
        assert!(!marker.observe(&classify(tuesday(9, 45, 30), &schedule)));
        assert!(marker.observe(&classify(tuesday(11, 35, 0), &schedule)));
        assert_eq!(marker.last_fired(), Some("second"));
    }
}
