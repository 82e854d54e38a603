use clap::Parser;
use hn_stories::cli::CliArgs;
use hn_stories::core::runner::{self, RunOptions};
use hn_stories::logging::{log, setup_logging, LogLevel};
use std::process::ExitCode;
use tokio::runtime::Builder;

fn main() -> ExitCode {
    setup_logging();

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if !args.code_phrase_matches() {
        log(LogLevel::Info, "Nothing to do!");
        return ExitCode::SUCCESS;
    }

    let posts = args.resolve_posts();
    if posts <= 0 {
        log(LogLevel::Info, "Nothing to do! No posts requested.");
        return ExitCode::SUCCESS;
    }

    // All business logic is cooperatively scheduled on one thread; only the
    // outstanding item fetches of a batch overlap.
    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            log(
                LogLevel::Error,
                &format!("FATAL: Failed to build Tokio runtime: {}", e),
            );
            return ExitCode::FAILURE;
        }
    };

    let opts = RunOptions {
        source: args.source.into(),
        target: posts as usize,
        story_list: args.story_list.clone(),
        messages: args.messages,
        stats: args.stats,
        reconnect: args.reconnect,
        attempts: args.attempts,
    };

    match runtime.block_on(runner::run(&opts)) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            log(LogLevel::Error, &format!("FATAL UNEXPECTED ERROR: {}", e));
            ExitCode::FAILURE
        }
    }
}
