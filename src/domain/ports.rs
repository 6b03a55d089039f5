use crate::domain::model::{AnalysisReport, LocationQuery, RankingEntry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the business-type ranking for a trade-area query. The engine
/// never embeds ranking data itself; a concrete source is injected.
#[async_trait]
pub trait RankingSource: Send + Sync {
    async fn top_candidates(&self, query: &LocationQuery) -> Result<Vec<RankingEntry>>;
}

pub trait ReportSink: Send + Sync {
    fn write_report(
        &self,
        path: &str,
        report: &AnalysisReport,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait AnalysisConfig: Send + Sync {
    fn radius_m(&self) -> u32;
    fn simulated_delay_secs(&self) -> u64;
    fn dataset_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}
