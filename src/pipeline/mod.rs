use crate::error::AppResult;
use crate::model::raw::RawStory;

pub mod api;
pub mod page;

/// What one fetch round produced. `exhausted` means the source cannot yield
/// anything in later rounds; an empty `raw` on its own is not terminal.
#[derive(Debug, Default)]
pub struct RoundOutput {
    pub raw: Vec<RawStory>,
    pub exhausted: bool,
}

/// Shared contract of the two collection variants. `shortfall` is how many
/// valid records the accumulator still needs; the page variant ignores it,
/// the item variant sizes its next id batch with it.
#[allow(async_fn_in_trait)]
pub trait Pipeline {
    async fn fetch_round(&mut self, shortfall: usize) -> AppResult<RoundOutput>;
}
