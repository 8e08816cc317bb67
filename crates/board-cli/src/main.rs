//! `wallboard` — terminal wall display for a fixed weekly tutoring schedule.
//!
//! The binary is a thin timer shell around `board-engine`: it supplies the
//! clock, loads (or embeds) the static dataset, renders the engine's output,
//! and performs the five-minute-warning effect the engine signals.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use board_engine::{classify, project_next, AlertMarker, Schedule, WeeklySession};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::{debug, info};

mod data;
mod render;

#[derive(Parser)]
#[command(name = "wallboard", version, about = "Weekly session wall display")]
struct Cli {
    /// Load the weekly schedule from a JSON file (a list of sessions)
    /// instead of the built-in dataset.
    #[arg(long, global = true, value_name = "FILE")]
    schedule: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify "now" against the schedule and print today's board once.
    Status,
    /// Print the nearest future occurrence anywhere in the week.
    Next,
    /// Print the standing student groups.
    Roster,
    /// Re-render on a fixed cadence, ringing the terminal bell once when a
    /// session is exactly five minutes away.
    Watch {
        /// Seconds between evaluations.
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let schedule = load_schedule(cli.schedule.as_deref())?;
    debug!("schedule loaded with {} sessions", schedule.len());

    match cli.command {
        Command::Status => {
            let now = Local::now().naive_local();
            let status = classify(now, &schedule);
            let fallback = project_next(now, &schedule);
            print!("{}", render::render_board(now, &status, fallback.as_ref()));
        }
        Command::Next => {
            let now = Local::now().naive_local();
            match project_next(now, &schedule) {
                Some(next) => print!("{}", render::render_next(now, &next)),
                None => println!("The schedule is empty."),
            }
        }
        Command::Roster => {
            print!(
                "{}",
                render::render_group("Sprachjongleure", &data::sprachjongleure())
            );
        }
        Command::Watch { interval } => watch(&schedule, Duration::from_secs(interval))?,
    }
    Ok(())
}

fn load_schedule(path: Option<&std::path::Path>) -> Result<Schedule> {
    let Some(path) = path else {
        return Ok(data::default_schedule());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read schedule file {}", path.display()))?;
    let sessions: Vec<WeeklySession> = serde_json::from_str(&raw)
        .with_context(|| format!("cannot parse schedule file {}", path.display()))?;
    Schedule::new(sessions).context("invalid schedule")
}

fn watch(schedule: &Schedule, interval: Duration) -> Result<()> {
    let mut marker = AlertMarker::new();
    info!("watching schedule every {}s", interval.as_secs());

    loop {
        let now = Local::now().naive_local();
        let status = classify(now, schedule);
        let fallback = project_next(now, schedule);

        let mut stdout = io::stdout().lock();
        if marker.observe(&status) {
            // The alert effect: terminal bell plus a visible line.
            write!(stdout, "\x07")?;
            writeln!(stdout, ">>> Five minutes to the next session! <<<")?;
            info!(
                "five-minute warning fired for {:?}",
                status.next_session.as_ref().map(|s| s.id.as_str())
            );
        }
        write!(
            stdout,
            "{}",
            render::render_board(now, &status, fallback.as_ref())
        )?;
        writeln!(stdout)?;
        stdout.flush()?;
        drop(stdout);

        thread::sleep(interval);
    }
}
