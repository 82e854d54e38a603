use hn_stories::client::HttpClient;
use hn_stories::core::accumulator::Accumulator;
use hn_stories::core::stats::RunStats;
use hn_stories::model::output;
use hn_stories::pipeline::api::ItemBasedPipeline;
use hn_stories::pipeline::page::PageBasedPipeline;
use hn_stories::validate::StorySchema;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn story_row(id: u64, rank: u64, title: &str, uri: &str, points: &str, comments: &str) -> String {
    format!(
        r#"<tr class="athing" id="{id}">
             <td class="title"><span class="rank">{rank}.</span></td>
             <td class="title"><a class="storylink" href="{uri}">{title}</a></td>
           </tr>
           <tr><td class="subtext">
             <span class="score">{points}</span> by
             <a class="hnuser">user{id}</a>
             <a href="hide?id={id}">hide</a>
             <a href="item?id={id}">{comments}</a>
           </td></tr>"#
    )
}

fn page_html(rows: &[String]) -> String {
    format!("<html><body><table>{}</table></body></html>", rows.join("\n"))
}

fn item_json(title: &str, uri: &str, score: i64, descendants: i64) -> serde_json::Value {
    json!({
        "type": "story",
        "title": title,
        "url": uri,
        "by": "someone",
        "score": score,
        "descendants": descendants,
        "time": 1175714200
    })
}

async fn collect_from_page_source(
    server: &MockServer,
    target: usize,
) -> (Vec<hn_stories::model::story::Story>, RunStats) {
    let client = HttpClient::new().unwrap();
    let mut pipeline = PageBasedPipeline::new(client, server.uri());
    let mut stats = RunStats::default();
    let stories = Accumulator::new(target, StorySchema::default())
        .collect(&mut pipeline, &mut stats)
        .await
        .unwrap();
    (stories, stats)
}

async fn collect_from_item_source(
    server: &MockServer,
    target: usize,
) -> (Vec<hn_stories::model::story::Story>, RunStats) {
    let client = HttpClient::new().unwrap();
    let mut pipeline = ItemBasedPipeline::new(client, server.uri(), "topstories");
    let mut stats = RunStats::default();
    let stories = Accumulator::new(target, StorySchema::default())
        .collect(&mut pipeline, &mut stats)
        .await
        .unwrap();
    (stories, stats)
}

#[tokio::test]
async fn page_pipeline_paginates_until_target_despite_rejects() {
    let server = MockServer::start().await;

    // Page one: two valid stories plus one with a relative link that must
    // be rejected. Page two covers the shortfall.
    let page1 = page_html(&[
        story_row(1, 1, "Alpha", "https://example.com/alpha", "10 points", "4 comments"),
        story_row(2, 2, "Beta", "https://example.com/beta", "5 points", "discuss"),
        story_row(3, 3, "Broken", "item?id=3", "20 points", "1 comment"),
    ]);
    let page2 = page_html(&[story_row(
        4,
        31,
        "Gamma",
        "https://example.com/gamma",
        "8 points",
        "2 comments",
    )]);

    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("p", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("p", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .expect(1)
        .mount(&server)
        .await;

    let (stories, stats) = collect_from_page_source(&server, 3).await;

    assert_eq!(stories.len(), 3);
    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.dropped_records, 1);

    let ranked = output::rank_stories(stories);
    let ranks: Vec<(&str, usize)> = ranked.iter().map(|s| (s.title.as_str(), s.rank)).collect();
    assert_eq!(ranks, vec![("Beta", 1), ("Gamma", 2), ("Alpha", 3)]);
}

#[tokio::test]
async fn page_pipeline_stops_on_empty_page() {
    let server = MockServer::start().await;

    let page1 = page_html(&[story_row(
        1,
        1,
        "Only",
        "https://example.com/only",
        "3 points",
        "discuss",
    )]);

    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("p", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("p", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body></body></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (stories, _) = collect_from_page_source(&server, 50).await;

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "Only");
}

#[tokio::test]
async fn page_pipeline_propagates_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let mut pipeline = PageBasedPipeline::new(client, server.uri());
    let mut stats = RunStats::default();
    let result = Accumulator::new(5, StorySchema::default())
        .collect(&mut pipeline, &mut stats)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn item_pipeline_replaces_rejects_without_refetching_ids() {
    let server = MockServer::start().await;

    // Queue order is descending: 30, 20, 10. Item 30 is dead (null), so the
    // first batch of two yields one valid story and the shortfall round
    // fetches id 10. Every item endpoint must be hit exactly once.
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([10, 30, 20])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/30.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/20.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(
            "Twenty",
            "https://example.com/20",
            12,
            0,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/10.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(
            "Ten",
            "https://example.com/10",
            7,
            3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (stories, stats) = collect_from_item_source(&server, 2).await;

    let titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Twenty", "Ten"]);
    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.dropped_records, 1);

    server.verify().await;
}

#[tokio::test]
async fn item_pipeline_ends_short_when_id_list_runs_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([5])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/item/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_json(
            "Five",
            "https://example.com/5",
            1,
            0,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (stories, _) = collect_from_item_source(&server, 10).await;

    assert_eq!(stories.len(), 1);

    let ranked = output::rank_stories(stories);
    assert_eq!(ranked[0].rank, 1);
}

#[tokio::test]
async fn item_pipeline_rejects_malformed_list_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let mut pipeline = ItemBasedPipeline::new(client, server.uri(), "topstories");
    let mut stats = RunStats::default();
    let result = Accumulator::new(3, StorySchema::default())
        .collect(&mut pipeline, &mut stats)
        .await;

    assert!(matches!(
        result,
        Err(hn_stories::error::AppError::SerdeParse(_))
    ));
}
