use crate::core::stats::RunStats;
use crate::error::AppResult;
use crate::model::story::Story;
use crate::pipeline::Pipeline;
use crate::validate::StorySchema;

/// Drives fetch rounds until the target count of valid records has
/// accumulated or the source is exhausted. Valid records are appended in
/// fetch order; an overshooting final round is truncated to the target.
pub struct Accumulator {
    target: usize,
    schema: StorySchema,
}

impl Accumulator {
    pub fn new(target: usize, schema: StorySchema) -> Self {
        Accumulator { target, schema }
    }

    pub async fn collect<P: Pipeline>(
        &self,
        pipeline: &mut P,
        stats: &mut RunStats,
    ) -> AppResult<Vec<Story>> {
        let mut stories: Vec<Story> = Vec::with_capacity(self.target);

        if self.target == 0 {
            return Ok(stories);
        }

        loop {
            let shortfall = self.target - stories.len();
            let round = pipeline.fetch_round(shortfall).await?;

            stats.rounds += 1;
            stats.raw_records += round.raw.len();

            for raw in &round.raw {
                match self.schema.validate(raw) {
                    Ok(story) => {
                        stats.valid_records += 1;
                        stories.push(story);
                    }
                    Err(e) => {
                        // Local rejection: drop the record, keep its siblings.
                        stats.dropped_records += 1;
                        tracing::debug!("dropped invalid record: {}", e);
                    }
                }
            }

            if stories.len() >= self.target {
                stories.truncate(self.target);
                break;
            }

            // A round can come back empty because everything was filtered
            // out; only the source's own exhaustion signal ends the run
            // short of the target.
            if round.exhausted {
                break;
            }
        }

        Ok(stories)
    }
}
