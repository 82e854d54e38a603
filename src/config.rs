use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

pub const CODE_PHRASE: &str = "hackernews";

pub const POSTS_LIMIT: i64 = 100;
pub const ATTEMPTS_LIMIT: u32 = 5;

pub const NEWS_BASE_URL: &str = "https://news.ycombinator.com";
pub const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";
pub const DEFAULT_STORY_LIST: &str = "topstories";

// One concurrent id-batch never exceeds this many outstanding item requests.
pub const MAX_ITEM_BATCH: usize = 30;

pub const STRING_MAX_LENGTH: usize = 256;
pub const MIN_POINTS: i64 = 1;
pub const MIN_COMMENTS: i64 = 0;

pub const PROGRESS_TICK_SECS: u64 = 1;

pub static RANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d+)\.$").unwrap());
pub static POINTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s(point(|s))$").unwrap());
pub static COMMENTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s(comment(|s))$").unwrap());

static USER_AGENT_VAL: Lazy<String> = Lazy::new(|| {
    format!(
        "{}/{} (+https://news.ycombinator.com)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
});

pub static BASE_HEADERS: Lazy<HeaderMap> = Lazy::new(|| {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_str(&USER_AGENT_VAL)
            .unwrap_or_else(|_| HeaderValue::from_static("hn_stories")),
    );
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/html, */*"),
    );
    h
});

pub fn page_url(base: &str, page: u64) -> String {
    format!("{}/news?p={}", base, page)
}

pub fn story_list_url(base: &str, list: &str) -> String {
    format!("{}/{}.json", base, list)
}

pub fn item_url(base: &str, id: u64) -> String {
    format!("{}/item/{}.json", base, id)
}
