use serde::Deserialize;
use serde_json::Value;

/// One unvalidated record as produced by a fetch round. Page-derived fields
/// arrive as strings, API-derived numeric fields as JSON values; the
/// validator owns all coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStory {
    pub title: Option<String>,
    pub uri: Option<String>,
    pub author: Option<String>,
    pub points: Option<Value>,
    pub comments: Option<Value>,
}

/// Item payload of the Firebase `item/<id>.json` endpoint. Fields the
/// canonical schema does not know about are dropped at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiItem {
    pub title: Option<String>,
    pub url: Option<String>,
    pub by: Option<String>,
    pub score: Option<Value>,
    pub descendants: Option<Value>,
}

impl From<ApiItem> for RawStory {
    fn from(item: ApiItem) -> Self {
        RawStory {
            title: item.title,
            uri: item.url,
            author: item.by,
            points: item.score,
            comments: item.descendants,
        }
    }
}
