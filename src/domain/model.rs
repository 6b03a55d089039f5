use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monthly net-profit range in won. `upper_bound` is intentionally not
/// clamped and can fall below `lower_bound` when the center estimate is
/// negative (only the lower bound is floored at zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitEstimate {
    pub lower_bound: i64,
    pub upper_bound: i64,
}

impl ProfitEstimate {
    pub fn zero() -> Self {
        Self {
            lower_bound: 0,
            upper_bound: 0,
        }
    }
}

/// Caller-supplied financial variables. `r_score` overrides the score
/// otherwise taken from the top-ranked business type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    pub capital: f64,
    pub rent: f64,
    pub area_pyeong: f64,
    pub r_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub address: String,
    pub radius_m: u32,
}

/// One row of the business-type ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub name: String,
    pub score: f64,
    pub reason: String,
}

/// Combined analysis result: ranking table plus profit simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub query: LocationQuery,
    pub ranking: Vec<RankingEntry>,
    pub profit: ProfitEstimate,
    pub generated_at: DateTime<Utc>,
}
