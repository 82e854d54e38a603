use crate::error::AppResult;
use crate::model::story::{RankedStory, Story};

/// Sorts by ascending points (stable, so ties keep insertion order) and
/// assigns dense 1-based ranks. The lowest-scoring story gets rank 1.
pub fn rank_stories(mut stories: Vec<Story>) -> Vec<RankedStory> {
    stories.sort_by_key(|s| s.points);

    stories
        .into_iter()
        .enumerate()
        .map(|(i, story)| RankedStory::from_story(story, i + 1))
        .collect()
}

pub fn render(stories: &[RankedStory]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(stories)?)
}
