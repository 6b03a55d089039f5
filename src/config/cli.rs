use crate::domain::model::AnalysisReport;
use crate::domain::ports::{AnalysisConfig, ReportSink};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "r-metrics")]
#[command(
    about = "Simulates a storefront location's business-type ranking and monthly net-profit range"
)]
pub struct CliConfig {
    /// Candidate storefront address, e.g. "Seolleung-ro 130-gil 19"
    #[arg(long)]
    pub address: String,

    /// Analysis radius in meters (300, 500, or 1000)
    #[arg(long, default_value = "500")]
    pub radius_m: u32,

    /// Available starting capital in won
    #[arg(long, default_value = "70000000")]
    pub capital: f64,

    /// Monthly rent in won
    #[arg(long, default_value = "2500000")]
    pub rent: f64,

    /// Floor area in pyeong
    #[arg(long, default_value = "15")]
    pub area: f64,

    /// R-Score override in [0, 100]; defaults to the top-ranked business
    /// type's score
    #[arg(long)]
    pub r_score: Option<f64>,

    /// Artificial delay before results, in seconds
    #[arg(long, default_value = "0")]
    pub delay_secs: u64,

    /// Path to a ranking dataset TOML file (built-in dataset if omitted)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Directory to write the JSON report into
    #[arg(long)]
    pub output_path: Option<String>,

    /// Register an email address for launch notifications
    #[arg(long)]
    pub notify_email: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl AnalysisConfig for CliConfig {
    fn radius_m(&self) -> u32 {
        self.radius_m
    }

    fn simulated_delay_secs(&self) -> u64 {
        self.delay_secs
    }

    fn dataset_path(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("address", &self.address)?;
        validate_one_of("radius_m", self.radius_m, &[300, 500, 1000])?;
        if let Some(score) = self.r_score {
            validate_range("r_score", score, 0.0, 100.0)?;
        }
        if let Some(email) = &self.notify_email {
            validate_email("notify_email", email)?;
        }
        // capital/rent/area are deliberately not validated here: the
        // estimator maps non-positive values to the (0, 0) range.
        Ok(())
    }
}

/// Writes JSON reports under a base directory.
#[derive(Debug, Clone)]
pub struct LocalReportSink {
    base_path: String,
}

impl LocalReportSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for LocalReportSink {
    async fn write_report(&self, path: &str, report: &AnalysisReport) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(report)?;
        fs::write(&full_path, data)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}
