use std::time::Duration;

use chrono::Utc;

use crate::core::estimator;
use crate::domain::model::{AnalysisReport, FinancialInputs, LocationQuery};
use crate::domain::ports::RankingSource;
use crate::utils::error::Result;

/// Drives one analysis run: ranking lookup, score selection, profit
/// simulation, report assembly.
pub struct AnalysisEngine<S: RankingSource> {
    ranking: S,
    simulated_delay: Duration,
}

impl<S: RankingSource> AnalysisEngine<S> {
    pub fn new(ranking: S) -> Self {
        Self {
            ranking,
            simulated_delay: Duration::ZERO,
        }
    }

    /// Adds an artificial pause before the run, mimicking the loading
    /// spinner of the hosted demo. Cosmetic only.
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    pub async fn run(
        &self,
        query: &LocationQuery,
        financials: &FinancialInputs,
    ) -> Result<AnalysisReport> {
        tracing::info!(
            "Analyzing trade area around '{}' (radius {}m)",
            query.address,
            query.radius_m
        );

        if !self.simulated_delay.is_zero() {
            tracing::debug!("Simulated delay: {:?}", self.simulated_delay);
            tokio::time::sleep(self.simulated_delay).await;
        }

        tracing::info!("Ranking business types...");
        let ranking = self.ranking.top_candidates(query).await?;
        tracing::info!("Ranked {} business types", ranking.len());

        // Explicit override wins, then the top-ranked entry's R-Score,
        // then the estimator default.
        let effective = FinancialInputs {
            r_score: financials
                .r_score
                .or_else(|| ranking.first().map(|e| e.score)),
            ..*financials
        };

        tracing::info!("Simulating monthly net profit...");
        let profit = estimator::estimate(&effective);
        tracing::info!(
            "Net profit range: {} ~ {} won",
            profit.lower_bound,
            profit.upper_bound
        );

        Ok(AnalysisReport {
            query: query.clone(),
            ranking,
            profit,
            generated_at: Utc::now(),
        })
    }
}
