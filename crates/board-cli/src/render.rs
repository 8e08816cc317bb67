//! Plain-text rendering of the board state.
//!
//! Everything here is a pure `state -> String` function so the output can
//! be unit-tested without a terminal or a real clock.

use std::fmt::Write;

use board_engine::{countdown_until, NextOccurrence, Status, StatusKind, Student, WeeklySession};
use chrono::NaiveDateTime;

/// Render the whole board for one tick: header, banner, active cards,
/// next-up card, and — when today is over — the week-wide next occurrence.
pub fn render_board(now: NaiveDateTime, status: &Status, fallback: Option<&NextOccurrence>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", now.format("%A, %d %B %Y — %H:%M:%S"));
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "{}", banner(status.kind));

    for session in &status.current_sessions {
        let _ = writeln!(out);
        let _ = writeln!(out, "NOW: {}", session_heading(session));
        write_session_details(&mut out, session);
        write_roster(&mut out, "Students", &session.students);
    }

    if let (Some(next), Some(minutes)) = (&status.next_session, status.minutes_to_start) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Next up: {} (in {} min)", session_heading(next), minutes);
        write_session_details(&mut out, next);
        write_roster(&mut out, "Planned group", &next.students);
    }

    if status.kind == StatusKind::None {
        let _ = writeln!(out);
        let _ = writeln!(out, "Nothing left on today's schedule.");
        if let Some(next) = fallback {
            let _ = write!(out, "{}", render_next(now, next));
        }
    }

    out
}

/// Render the week-wide next occurrence with its full countdown.
pub fn render_next(now: NaiveDateTime, next: &NextOccurrence) -> String {
    let countdown = countdown_until(now, next.occurrence);
    let mut out = String::new();
    let _ = writeln!(out, "Next occurrence: {}", session_heading(&next.session));
    let _ = writeln!(
        out,
        "  {} (in {})",
        next.occurrence.format("%A, %d %B %Y at %H:%M"),
        countdown.human_readable
    );
    out
}

/// Render a standing (slot-independent) student group.
pub fn render_group(name: &str, students: &[Student]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", name, students.len());
    for student in sorted_roster(students) {
        let _ = writeln!(out, "  - {student}");
    }
    out
}

fn banner(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Active => "*** ASF SESSION IN PROGRESS ***",
        StatusKind::Upcoming => "!!  ASF session starting soon  !!",
        StatusKind::None => "No ASF session",
    }
}

fn session_heading(session: &WeeklySession) -> String {
    format!("{} — Room {}", session.label, session.room)
}

fn write_session_details(out: &mut String, session: &WeeklySession) {
    let _ = writeln!(out, "  Teacher: {}", session.teacher);
    let _ = writeln!(
        out,
        "  {} – {}",
        session.start.format("%H:%M"),
        session.end.format("%H:%M")
    );
}

fn write_roster(out: &mut String, heading: &str, students: &[Student]) {
    if students.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {} ({}):", heading, students.len());
    for student in sorted_roster(students) {
        let _ = writeln!(out, "    - {student}");
    }
}

/// Roster display order: by class tag, then by name. The original display
/// grouped rows by the class embedded in each label; with the structured
/// field this is a plain sort.
fn sorted_roster(students: &[Student]) -> Vec<&Student> {
    let mut sorted: Vec<&Student> = students.iter().collect();
    sorted.sort_by(|a, b| {
        let class_a = a.class.as_deref().unwrap_or("");
        let class_b = b.class.as_deref().unwrap_or("");
        class_a.cmp(class_b).then_with(|| a.name.cmp(&b.name))
    });
    sorted
}
