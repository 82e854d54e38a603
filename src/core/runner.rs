use crate::client::HttpClient;
use crate::config;
use crate::core::accumulator::Accumulator;
use crate::core::stats::{self, RunStats};
use crate::error::AppResult;
use crate::logging::{log, LogLevel};
use crate::model::output;
use crate::model::story::Story;
use crate::pipeline::api::ItemBasedPipeline;
use crate::pipeline::page::PageBasedPipeline;
use crate::validate::StorySchema;
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Page,
    Api,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    pub target: usize,
    pub story_list: String,
    pub messages: bool,
    pub stats: bool,
    pub reconnect: bool,
    pub attempts: u32,
}

/// One whole-run attempt loop. A failed attempt is discarded completely;
/// every retry starts from a fresh client, pipeline and accumulator.
/// Returns the process exit code.
pub async fn run(opts: &RunOptions) -> AppResult<i32> {
    let start = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        let mut run_stats = RunStats {
            attempt: attempt + 1,
            ..Default::default()
        };

        let progress = Progress::start(opts.messages);
        let outcome = run_once(opts, &mut run_stats).await;
        progress.stop();

        match outcome {
            Ok(stories) => {
                let ranked = output::rank_stories(stories);
                let doc = output::render(&ranked)?;
                println!("{}", doc);

                if opts.stats {
                    run_stats.returned_records = ranked.len();
                    stats::print_summary(&run_stats, start.elapsed());
                }
                return Ok(0);
            }
            Err(e) => {
                if opts.messages {
                    log(
                        LogLevel::Warning,
                        &format!("Sorry, an error occurred while loading your data: {}", e),
                    );
                }

                if !opts.reconnect {
                    return Ok(1);
                }

                attempt += 1;
                if attempt > opts.attempts {
                    if opts.messages {
                        log(LogLevel::Error, "Sorry, can't load stories. Please, try again!");
                    }
                    return Ok(1);
                }

                if opts.messages {
                    log(
                        LogLevel::Info,
                        &format!("Trying to reconnect... ({} attempt)", attempt),
                    );
                }
            }
        }
    }
}

async fn run_once(opts: &RunOptions, run_stats: &mut RunStats) -> AppResult<Vec<Story>> {
    let client = HttpClient::new()?;
    let accumulator = Accumulator::new(opts.target, StorySchema::default());

    match opts.source {
        Source::Page => {
            let mut pipeline = PageBasedPipeline::new(client, config::NEWS_BASE_URL);
            accumulator.collect(&mut pipeline, run_stats).await
        }
        Source::Api => {
            let mut pipeline =
                ItemBasedPipeline::new(client, config::API_BASE_URL, opts.story_list.clone());
            accumulator.collect(&mut pipeline, run_stats).await
        }
    }
}

/// Dot ticker on stderr while a run attempt is in flight. Stdout is left
/// untouched so the final JSON document stays the only thing written there.
struct Progress {
    handle: Option<JoinHandle<()>>,
}

impl Progress {
    fn start(enabled: bool) -> Self {
        if !enabled {
            return Progress { handle: None };
        }

        log(
            LogLevel::Info,
            "Please, wait while loading and preparing data. It will take a while.",
        );

        let handle = tokio::spawn(async {
            let mut tick =
                tokio::time::interval(Duration::from_secs(config::PROGRESS_TICK_SECS));
            tick.tick().await;
            loop {
                tick.tick().await;
                eprint!(".");
                let _ = std::io::stderr().flush();
            }
        });

        Progress {
            handle: Some(handle),
        }
    }

    fn stop(self) {
        if let Some(handle) = self.handle {
            handle.abort();
            eprintln!();
        }
    }
}
