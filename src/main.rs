//! Deadline tracker - Main Entry Point
//!
//! This is the command-line front end for the deadline tracker. The actual
//! engine lives in the `duedates` library; this binary only parses
//! arguments, turns them into tracker operations, and prints the results.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use duedates::formatting::format_deadlines;
use duedates::{DeadlineTracker, StoreError};

/// Track course deadlines: add tasks with due dates, list them by urgency,
/// edit, complete, and remove them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the deadlines data file
    #[arg(long, default_value = "deadlines.toml")]
    file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new deadline
    Add {
        /// Course code, formatted automatically (e.g., "csc 230" -> CSC230)
        course: String,
        /// Task description
        task: String,
        /// Due date (YYYY-MM-DD)
        date: String,
    },
    /// List deadlines sorted by urgency
    List {
        /// Exclude completed deadlines from the output
        #[arg(long)]
        hide_completed: bool,
    },
    /// Replace a deadline's course, task, and due date
    Edit {
        /// ID of the deadline (shown by `list`)
        id: u32,
        /// New course code
        course: String,
        /// New task description
        task: String,
        /// New due date (YYYY-MM-DD)
        date: String,
    },
    /// Toggle a deadline between completed and not completed
    Toggle {
        /// ID of the deadline
        id: u32,
    },
    /// Delete a deadline
    Remove {
        /// ID of the deadline
        id: u32,
    },
    /// Delete all completed deadlines
    ClearCompleted,
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(d) => Ok(d),
        Err(_) => bail!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ),
    }
}

/// Persistence failures are non-fatal: the in-memory operation already
/// happened, so warn and exit cleanly. Everything else aborts.
fn report(result: Result<String, StoreError>) -> Result<()> {
    match result {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e @ StoreError::Persistence(_)) => {
            eprintln!("Warning: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let mut tracker = DeadlineTracker::new(&args.file)?;

    match args.command {
        Command::Add { course, task, date } => {
            let due = parse_date(&date)?;
            report(
                tracker
                    .add(&course, &task, due)
                    .map(|id| format!("Deadline added with ID: {}", id)),
            )
        }
        Command::List { hide_completed } => {
            let entries = tracker.ordered_view(hide_completed);
            print!(
                "{}",
                format_deadlines(&entries, tracker.has_any_incomplete())
            );
            Ok(())
        }
        Command::Edit {
            id,
            course,
            task,
            date,
        } => {
            let due = parse_date(&date)?;
            report(
                tracker
                    .update(id, &course, &task, due)
                    .map(|_| format!("Deadline {} updated", id)),
            )
        }
        Command::Toggle { id } => report(tracker.toggle_complete(id).map(|completed| {
            if completed {
                format!("Deadline {} marked completed", id)
            } else {
                format!("Deadline {} marked not completed", id)
            }
        })),
        Command::Remove { id } => report(
            tracker
                .remove(id)
                .map(|record| format!("Deadline {} removed ({} {})", id, record.course, record.task)),
        ),
        Command::ClearCompleted => report(
            tracker
                .clear_completed()
                .map(|count| format!("Deleted {} completed deadline(s)", count)),
        ),
    }
}
