use crate::client::HttpClient;
use crate::config;
use crate::error::AppResult;
use crate::model::raw::RawStory;
use crate::pipeline::{Pipeline, RoundOutput};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

static ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".athing").expect("Invalid .athing selector"));
static RANK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rank").expect("Invalid .rank selector"));
static POINTS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".score").expect("Invalid .score selector"));
static STORYLINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".storylink").expect("Invalid .storylink selector"));
static AUTHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".hnuser").expect("Invalid .hnuser selector"));
static SUBTEXT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".subtext").expect("Invalid .subtext selector"));

// The comments link is the third direct anchor child of the subtext cell.
const COMMENT_ANCHOR_INDEX: usize = 2;

/// Scrapes rendered front pages sequentially. The page cursor starts at 1
/// and only ever increments; an empty page signals source exhaustion.
pub struct PageBasedPipeline {
    client: HttpClient,
    base_url: String,
    page: u64,
}

impl PageBasedPipeline {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        PageBasedPipeline {
            client,
            base_url: base_url.into(),
            page: 1,
        }
    }
}

impl Pipeline for PageBasedPipeline {
    async fn fetch_round(&mut self, _shortfall: usize) -> AppResult<RoundOutput> {
        let url = config::page_url(&self.base_url, self.page);
        let html = self.client.fetch_text(&url).await?;
        self.page += 1;

        let raw = parse_front_page(&html);
        Ok(RoundOutput {
            exhausted: raw.is_empty(),
            raw,
        })
    }
}

/// Extracts one raw record per story row. Structurally broken rows still
/// yield a (mostly empty) record; the validator decides their fate.
pub fn parse_front_page(html: &str) -> Vec<RawStory> {
    let document = Html::parse_document(html);
    let mut result = Vec::new();

    for item in document.select(&ITEM_SELECTOR) {
        let subtext = next_element_sibling(item)
            .and_then(|row| row.select(&SUBTEXT_SELECTOR).next());

        let storylink = item.select(&STORYLINK_SELECTOR).next();
        let title = storylink.map(element_text).filter(|t| !t.is_empty());
        let uri = storylink
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string);
        let author = subtext
            .and_then(|sub| sub.select(&AUTHOR_SELECTOR).next())
            .map(element_text);

        let rank_text = item
            .select(&RANK_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let points_text = subtext
            .and_then(|sub| sub.select(&POINTS_SELECTOR).next())
            .map(element_text)
            .unwrap_or_default();
        let comments_text = subtext
            .and_then(|sub| nth_anchor_child(sub, COMMENT_ANCHOR_INDEX))
            .map(element_text)
            .unwrap_or_default();

        let rank = count_from_text(&rank_text, &config::RANK_RE);
        let points = count_from_text(&points_text, &config::POINTS_RE);
        let comments = count_from_text(&comments_text, &config::COMMENTS_RE);

        tracing::debug!(
            "parsed row rank={} title={:?} points={} comments={}",
            rank,
            title,
            points,
            comments
        );

        result.push(RawStory {
            title,
            uri,
            author,
            points: Some(Value::from(points)),
            comments: Some(Value::from(comments)),
        });
    }

    result
}

fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn nth_anchor_child(element: ElementRef<'_>, index: usize) -> Option<ElementRef<'_>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "a")
        .nth(index)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First capture group as digits; anything that does not match the pattern
/// counts as 0, never as an error.
fn count_from_text(text: &str, pattern: &Regex) -> i64 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}
