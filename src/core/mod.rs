pub mod engine;
pub mod estimator;

pub use crate::domain::model::{AnalysisReport, FinancialInputs, LocationQuery, ProfitEstimate};
pub use crate::domain::ports::{AnalysisConfig, RankingSource, ReportSink};
pub use crate::utils::error::Result;
