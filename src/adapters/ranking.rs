use crate::config::dataset::RankingDataset;
use crate::domain::model::{LocationQuery, RankingEntry};
use crate::domain::ports::RankingSource;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_TOP_K: usize = 3;

/// Serves the top-K entries of a fixed dataset, regardless of query. The
/// query is accepted so the port matches what a real trade-area backend
/// would need.
#[derive(Debug, Clone)]
pub struct StaticRankingSource {
    dataset: RankingDataset,
    top_k: usize,
}

impl StaticRankingSource {
    pub fn new(dataset: RankingDataset) -> Self {
        Self {
            dataset,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl Default for StaticRankingSource {
    fn default() -> Self {
        Self::new(RankingDataset::default())
    }
}

#[async_trait]
impl RankingSource for StaticRankingSource {
    async fn top_candidates(&self, query: &LocationQuery) -> Result<Vec<RankingEntry>> {
        tracing::debug!(
            "Serving static ranking for '{}' ({}m radius)",
            query.address,
            query.radius_m
        );
        Ok(self.dataset.top(self.top_k))
    }
}
