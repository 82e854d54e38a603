use crate::logging::{log, LogLevel};
use std::time::Duration;

/// Volume counters for one run attempt. Owned by the run controller and
/// threaded through explicitly; there is no process-wide mutable state.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub attempt: u32,
    pub rounds: usize,
    pub raw_records: usize,
    pub valid_records: usize,
    pub dropped_records: usize,
    pub returned_records: usize,
}

pub fn print_summary(stats: &RunStats, duration: Duration) {
    let sep = "=".repeat(48);
    eprintln!("\n{}\n{:^48}\n{}", sep, "Run Summary", sep);
    eprintln!("Time spent while getting top stories: {:.3?}", duration);
    eprintln!("{}", "-".repeat(48));
    eprintln!("{:<20} {:>8}", "Attempt", stats.attempt);
    eprintln!("{:<20} {:>8}", "Fetch rounds", stats.rounds);
    eprintln!("{:<20} {:>8}", "Raw records", stats.raw_records);
    eprintln!("{:<20} {:>8}", "Valid records", stats.valid_records);
    eprintln!("{:<20} {:>8}", "Dropped records", stats.dropped_records);
    eprintln!("{:<20} {:>8}", "Returned records", stats.returned_records);
    eprintln!("{}", sep);

    let end_ts_str = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string();
    log(
        LogLevel::Step,
        &format!("--- Run Finished at {} ---", end_ts_str),
    );
}
