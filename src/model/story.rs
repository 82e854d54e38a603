use serde::Serialize;

/// A story that passed schema validation. Rank is deliberately absent; it is
/// assigned by the output formatter after the final sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub title: String,
    pub uri: String,
    pub author: String,
    pub points: i64,
    pub comments: i64,
}

/// Display projection written to stdout. Rank is dense and 1-based over the
/// sorted output set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStory {
    pub title: String,
    pub uri: String,
    pub author: String,
    pub points: i64,
    pub comments: i64,
    pub rank: usize,
}

impl RankedStory {
    pub fn from_story(story: Story, rank: usize) -> Self {
        RankedStory {
            title: story.title,
            uri: story.uri,
            author: story.author,
            points: story.points,
            comments: story.comments,
            rank,
        }
    }
}
