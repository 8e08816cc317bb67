//! Static schedule model: weekly recurring sessions and their rosters.
//!
//! The schedule is trusted, read-only configuration. All invariants are
//! checked once at construction ([`Schedule::new`]); the classification and
//! projection functions never validate and never fail.
//!
//! Times are real [`NaiveTime`] values, serialized as zero-padded `"HH:MM"`.
//! Parsing happens once at load time; comparisons inside the engine are
//! integer minute-of-day comparisons, never string comparisons.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoardError, Result};

// ── Student ─────────────────────────────────────────────────────────────────

/// An enrolled student, with class membership as a structured field.
///
/// The legacy dataset embedded the class in the display name
/// (`"Violetta (5.1)"`); [`Student::from_label`] parses that form once at
/// configuration load so nothing downstream has to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name.
    pub name: String,
    /// Class tag (e.g., `"5.1"`, `"7a"`), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Student {
    /// Build a student from a structured name and class tag.
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: Some(class.into()),
        }
    }

    /// Parse a legacy `"Name (Class)"` display label.
    ///
    /// A trailing parenthesized segment becomes the class tag; anything else
    /// is taken verbatim as the name with no class.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_engine::Student;
    ///
    /// let s = Student::from_label("Violetta (5.1)");
    /// assert_eq!(s.name, "Violetta");
    /// assert_eq!(s.class.as_deref(), Some("5.1"));
    ///
    /// let t = Student::from_label("Violetta");
    /// assert_eq!(t.class, None);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if let Some(open) = label.rfind('(') {
            if let Some(stripped) = label[open..].strip_prefix('(') {
                if let Some(class) = stripped.strip_suffix(')') {
                    let name = label[..open].trim();
                    if !name.is_empty() && !class.is_empty() {
                        return Self {
                            name: name.to_string(),
                            class: Some(class.to_string()),
                        };
                    }
                }
            }
        }
        Self {
            name: label.to_string(),
            class: None,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{} ({})", self.name, class),
            None => write!(f, "{}", self.name),
        }
    }
}

// ── WeeklySession ───────────────────────────────────────────────────────────

/// Serde adapter for `"HH:MM"` time-of-day strings.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One weekly recurring session: a fixed day-of-week plus a start/end
/// time-of-day, repeated every week with no exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySession {
    /// Unique stable identifier.
    pub id: String,
    /// Display label (e.g., a group name).
    pub label: String,
    /// Teacher display name.
    pub teacher: String,
    /// Room display name.
    pub room: String,
    /// Day of week, 0–6 with 0 = Sunday.
    pub day: u8,
    /// Start of the slot, local wall-clock.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// End of the slot, local wall-clock. Always after `start`.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// Enrolled students, in roster order.
    pub students: Vec<Student>,
}

impl WeeklySession {
    /// Minute-of-day of the start time (0–1439).
    pub(crate) fn start_minute(&self) -> u32 {
        minute_of_day(self.start)
    }

    /// Minute-of-day of the end time (0–1439).
    pub(crate) fn end_minute(&self) -> u32 {
        minute_of_day(self.end)
    }
}

/// Minute-of-day for a wall-clock time, discarding seconds.
///
/// The engine compares times at minute resolution throughout: a session is
/// active for the whole of its start and end minutes.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

// ── Schedule ────────────────────────────────────────────────────────────────

/// A validated, read-only weekly schedule.
///
/// Construction checks every configuration invariant once; after that no
/// engine operation can fail. Sessions keep their input order, which is the
/// tie-break order everywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    sessions: Vec<WeeklySession>,
}

impl Schedule {
    /// Validate and wrap a list of sessions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDay`] if a session's `day` is outside
    /// 0–6, [`BoardError::InvalidTime`] if a session does not end after it
    /// starts, or [`BoardError::InvalidSession`] on an empty or duplicate id.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_engine::Schedule;
    ///
    /// let empty = Schedule::new(vec![]).unwrap();
    /// assert!(empty.is_empty());
    /// ```
    pub fn new(sessions: Vec<WeeklySession>) -> Result<Self> {
        for session in &sessions {
            if session.day > 6 {
                return Err(BoardError::InvalidDay(format!(
                    "session '{}' has day {} (expected 0-6)",
                    session.id, session.day
                )));
            }
            if session.start_minute() >= session.end_minute() {
                return Err(BoardError::InvalidTime(format!(
                    "session '{}' does not end after it starts ({} >= {})",
                    session.id,
                    session.start.format("%H:%M"),
                    session.end.format("%H:%M"),
                )));
            }
            if session.id.is_empty() {
                return Err(BoardError::InvalidSession("empty session id".to_string()));
            }
        }
        for (i, session) in sessions.iter().enumerate() {
            if sessions[..i].iter().any(|other| other.id == session.id) {
                return Err(BoardError::InvalidSession(format!(
                    "duplicate session id '{}'",
                    session.id
                )));
            }
        }
        Ok(Self { sessions })
    }

    /// The sessions, in input order.
    pub fn sessions(&self) -> &[WeeklySession] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn session(id: &str, day: u8, start: NaiveTime, end: NaiveTime) -> WeeklySession {
        WeeklySession {
            id: id.to_string(),
            label: "ASF 1".to_string(),
            teacher: "Tun".to_string(),
            room: "W204".to_string(),
            day,
            start,
            end,
            students: vec![],
        }
    }

    #[test]
    fn from_label_splits_class_tag() {
        let s = Student::from_label("Mohamed (7.1)");
        assert_eq!(s.name, "Mohamed");
        assert_eq!(s.class.as_deref(), Some("7.1"));
        assert_eq!(s.to_string(), "Mohamed (7.1)");
    }

    #[test]
    fn from_label_without_tag() {
        let s = Student::from_label("Mohamed");
        assert_eq!(s.name, "Mohamed");
        assert_eq!(s.class, None);
        assert_eq!(s.to_string(), "Mohamed");
    }

    #[test]
    fn from_label_empty_parens_is_plain_name() {
        let s = Student::from_label("Mohamed ()");
        assert_eq!(s.name, "Mohamed ()");
        assert_eq!(s.class, None);
    }

    #[test]
    fn rejects_day_out_of_range() {
        let err = Schedule::new(vec![session("a", 7, time(9, 0), time(10, 0))]).unwrap_err();
        assert!(matches!(err, BoardError::InvalidDay(_)));
    }

    #[test]
    fn rejects_inverted_interval() {
        let err = Schedule::new(vec![session("a", 2, time(11, 20), time(9, 50))]).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTime(_)));
    }

    #[test]
    fn rejects_zero_length_interval() {
        let err = Schedule::new(vec![session("a", 2, time(9, 50), time(9, 50))]).unwrap_err();
        assert!(matches!(err, BoardError::InvalidTime(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Schedule::new(vec![
            session("a", 1, time(8, 0), time(9, 30)),
            session("a", 2, time(9, 50), time(11, 20)),
        ])
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidSession(_)));
    }

    #[test]
    fn session_round_trips_through_json() {
        let s = WeeklySession {
            students: vec![Student::new("Richard", "6.1")],
            ..session("tun-mo-34", 1, time(9, 50), time(11, 20))
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"09:50\""));
        assert!(json.contains("\"11:20\""));
        let back: WeeklySession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn rejects_malformed_time_string_at_load() {
        let json = r#"{"id":"a","label":"x","teacher":"t","room":"r",
                       "day":1,"start":"25:00","end":"11:20","students":[]}"#;
        assert!(serde_json::from_str::<WeeklySession>(json).is_err());
    }
}
