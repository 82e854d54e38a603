use crate::client::HttpClient;
use crate::config;
use crate::error::AppResult;
use crate::logging::{log, LogLevel};
use crate::model::raw::{ApiItem, RawStory};
use crate::pipeline::{Pipeline, RoundOutput};
use futures::future::try_join_all;
use std::collections::VecDeque;

pub type StoryId = u64;

/// Fetches the candidate id list once, then drains it front-to-back in
/// shortfall-sized batches. Consumed ids are gone for the rest of the run,
/// so no id is ever requested twice.
pub struct ItemBasedPipeline {
    client: HttpClient,
    api_base: String,
    story_list: String,
    pending: Option<VecDeque<StoryId>>,
}

impl ItemBasedPipeline {
    pub fn new(
        client: HttpClient,
        api_base: impl Into<String>,
        story_list: impl Into<String>,
    ) -> Self {
        ItemBasedPipeline {
            client,
            api_base: api_base.into(),
            story_list: story_list.into(),
            pending: None,
        }
    }

    async fn load_id_queue(&mut self) -> AppResult<()> {
        let url = config::story_list_url(&self.api_base, &self.story_list);
        let mut ids: Vec<StoryId> = self.client.fetch_json(&url).await?;

        // Newest stories carry the highest ids; serve those first.
        ids.sort_unstable_by(|a, b| b.cmp(a));

        log(
            LogLevel::Info,
            &format!("Loaded {} candidate ids from '{}'.", ids.len(), self.story_list),
        );
        self.pending = Some(ids.into_iter().collect());
        Ok(())
    }

    async fn fetch_item(&self, id: StoryId) -> AppResult<RawStory> {
        let url = config::item_url(&self.api_base, id);
        let item: Option<ApiItem> = self.client.fetch_json(&url).await?;

        // The API answers `null` for unknown ids; that becomes an empty raw
        // record for the validator to discard, not a round failure.
        Ok(item.map(RawStory::from).unwrap_or_default())
    }
}

impl Pipeline for ItemBasedPipeline {
    async fn fetch_round(&mut self, shortfall: usize) -> AppResult<RoundOutput> {
        if self.pending.is_none() {
            self.load_id_queue().await?;
        }

        let batch: Vec<StoryId> = match self.pending.as_mut() {
            Some(queue) => {
                let take = shortfall.min(config::MAX_ITEM_BATCH).min(queue.len());
                queue.drain(..take).collect()
            }
            None => Vec::new(),
        };

        // All item fetches of one batch are issued concurrently;
        // try_join_all keeps the output in batch order.
        let raw = try_join_all(batch.iter().map(|id| self.fetch_item(*id))).await?;

        let exhausted = self
            .pending
            .as_ref()
            .map_or(true, |queue| queue.is_empty());

        Ok(RoundOutput { raw, exhausted })
    }
}
