pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalReportSink, CliConfig};

pub use adapters::ranking::StaticRankingSource;
pub use config::dataset::RankingDataset;
pub use crate::core::{engine::AnalysisEngine, estimator};
pub use domain::model::{
    AnalysisReport, FinancialInputs, LocationQuery, ProfitEstimate, RankingEntry,
};
pub use utils::error::{RMetricsError, Result};
