use crate::config;
use crate::core::runner::Source;
use crate::logging::{log, LogLevel};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collects Hacker News top stories and prints them to stdout as pretty JSON.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(
        value_name = "CODE_PHRASE",
        help = "Activation code phrase; the program is a no-op without 'hackernews'"
    )]
    pub code_phrase: Option<String>,

    #[arg(
        short = 'p',
        long = "posts",
        value_name = "COUNT",
        allow_negative_numbers = true,
        help = "How many posts to print (clamped to 100)"
    )]
    pub posts: Option<i64>,

    #[arg(
        long,
        value_enum,
        default_value_t = SourceArg::Page,
        help = "Where to collect stories from"
    )]
    pub source: SourceArg,

    #[arg(
        short = 't',
        long = "type",
        value_name = "LIST",
        default_value = config::DEFAULT_STORY_LIST,
        help = "API story list (topstories, beststories, newstories); api source only"
    )]
    pub story_list: String,

    #[arg(short = 'm', long, help = "Print progress and failure messages")]
    pub messages: bool,

    #[arg(short = 's', long, help = "Print a timing/volume summary after the run")]
    pub stats: bool,

    #[arg(short = 'r', long, help = "Retry the whole run on transport failure")]
    pub reconnect: bool,

    #[arg(
        short = 'a',
        long,
        value_name = "COUNT",
        default_value_t = config::ATTEMPTS_LIMIT,
        help = "Reconnect attempt ceiling"
    )]
    pub attempts: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    /// Scrape the rendered front pages.
    Page,
    /// Use the Firebase JSON API.
    Api,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Page => Source::Page,
            SourceArg::Api => Source::Api,
        }
    }
}

impl CliArgs {
    pub fn code_phrase_matches(&self) -> bool {
        self.code_phrase.as_deref() == Some(config::CODE_PHRASE)
    }

    /// Resolves the requested post count. Missing or over-limit requests are
    /// clamped to the configured limit with a notice; non-positive values
    /// pass through for the caller to treat as a graceful no-op.
    pub fn resolve_posts(&self) -> i64 {
        match self.posts {
            None => {
                log(
                    LogLevel::Warning,
                    &format!(
                        "--posts is not defined! Using standard value {}",
                        config::POSTS_LIMIT
                    ),
                );
                config::POSTS_LIMIT
            }
            Some(n) if n <= 0 => n,
            Some(n) if n > config::POSTS_LIMIT => {
                log(
                    LogLevel::Warning,
                    &format!(
                        "--posts is larger than {0}! Using standard value {0}",
                        config::POSTS_LIMIT
                    ),
                );
                config::POSTS_LIMIT
            }
            Some(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("hn_stories").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn guard_phrase_is_checked_literally() {
        assert!(parse(&["hackernews"]).code_phrase_matches());
        assert!(!parse(&["hacker-news"]).code_phrase_matches());
        assert!(!parse(&[]).code_phrase_matches());
    }

    #[test]
    fn posts_clamp_semantics() {
        assert_eq!(parse(&["hackernews", "-p", "30"]).resolve_posts(), 30);
        assert_eq!(parse(&["hackernews"]).resolve_posts(), config::POSTS_LIMIT);
        assert_eq!(
            parse(&["hackernews", "--posts", "500"]).resolve_posts(),
            config::POSTS_LIMIT
        );
        assert_eq!(parse(&["hackernews", "-p", "0"]).resolve_posts(), 0);
        assert_eq!(parse(&["hackernews", "-p", "-3"]).resolve_posts(), -3);
    }

    #[test]
    fn defaults_match_the_original_tool() {
        let args = parse(&["hackernews"]);
        assert_eq!(args.source, SourceArg::Page);
        assert_eq!(args.story_list, "topstories");
        assert_eq!(args.attempts, config::ATTEMPTS_LIMIT);
        assert!(!args.messages && !args.stats && !args.reconnect);
    }

    #[test]
    fn source_and_type_flags_parse() {
        let args = parse(&["hackernews", "--source", "api", "-t", "beststories"]);
        assert_eq!(args.source, SourceArg::Api);
        assert_eq!(args.story_list, "beststories");
        assert_eq!(Source::from(args.source), Source::Api);
    }
}
