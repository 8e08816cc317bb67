//! # board-engine
//!
//! Deterministic weekly-schedule computation for classroom wall displays.
//!
//! Given the current instant and a fixed weekly timetable, the engine
//! answers the questions a wall display keeps asking: which sessions are
//! running right now, which one starts next today and in how many minutes,
//! and — looking past today — when the very next occurrence anywhere in the
//! week is.
//!
//! All computation is pure: every function takes the "now" anchor
//! explicitly (no system clock access), so the engine is testable with
//! fixed clocks and every tick recomputes from scratch. The only state
//! carried across ticks is the caller-owned [`AlertMarker`].
//!
//! ## Modules
//!
//! - [`schedule`] — Weekly session model, rosters, load-time validation
//! - [`status`] — Today-focused classification: active / upcoming / none
//! - [`projector`] — Week-wide next-occurrence projection and countdowns
//! - [`alert`] — One-shot five-minute warning marker
//! - [`error`] — Error types

pub mod alert;
pub mod error;
pub mod projector;
pub mod schedule;
pub mod status;

pub use alert::{AlertMarker, ALERT_MINUTES};
pub use error::BoardError;
pub use projector::{countdown_until, project_next, Countdown, NextOccurrence};
pub use schedule::{minute_of_day, Schedule, Student, WeeklySession};
pub use status::{classify, Status, StatusKind};
