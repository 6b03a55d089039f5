use crate::domain::model::RankingEntry;
use crate::utils::error::{RMetricsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Business-type ranking dataset, loadable from TOML. The built-in default
/// mirrors the mock table of the hosted demo; real deployments would swap in
/// a dataset produced by an actual trade-area model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingDataset {
    pub dataset: DatasetInfo,
    pub ranking: Vec<RankingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
}

impl RankingDataset {
    /// Loads and validates a dataset from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let dataset: Self = toml::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// The top `k` entries ordered by rank.
    pub fn top(&self, k: usize) -> Vec<RankingEntry> {
        let mut entries = self.ranking.clone();
        entries.sort_by_key(|e| e.rank);
        entries.truncate(k);
        entries
    }
}

impl Default for RankingDataset {
    fn default() -> Self {
        Self {
            dataset: DatasetInfo {
                name: "r-metrics-mock".to_string(),
                description: Some("Demo ranking for the landing-page simulation".to_string()),
                version: "1.0".to_string(),
            },
            ranking: vec![
                RankingEntry {
                    rank: 1,
                    name: "Specialty foreign cuisine".to_string(),
                    score: 92.0,
                    reason: "High office-worker demand against low competitor density."
                        .to_string(),
                },
                RankingEntry {
                    rank: 2,
                    name: "Office & administrative support services".to_string(),
                    score: 90.0,
                    reason: "Stable demand and low closure rates in an office-dense district."
                        .to_string(),
                },
                RankingEntry {
                    rank: 3,
                    name: "Premium beauty & skincare".to_string(),
                    score: 85.0,
                    reason: "High beauty spending from an affluent residential catchment."
                        .to_string(),
                },
            ],
        }
    }
}

impl Validate for RankingDataset {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dataset.name", &self.dataset.name)?;

        if self.ranking.is_empty() {
            return Err(RMetricsError::DatasetError {
                message: "Ranking dataset must contain at least one entry".to_string(),
            });
        }

        let mut ranks: Vec<u32> = self.ranking.iter().map(|e| e.rank).collect();
        ranks.sort_unstable();
        for (i, rank) in ranks.iter().enumerate() {
            if *rank != (i as u32) + 1 {
                return Err(RMetricsError::DatasetError {
                    message: format!(
                        "Ranks must be contiguous starting at 1, found {:?}",
                        ranks
                    ),
                });
            }
        }

        for entry in &self.ranking {
            validate_non_empty_string("ranking.name", &entry.name)?;
            validate_range("ranking.score", entry.score, 0.0, 100.0)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_is_valid() {
        let dataset = RankingDataset::default();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.ranking.len(), 3);
        assert_eq!(dataset.top(3)[0].score, 92.0);
    }

    #[test]
    fn test_top_orders_by_rank_and_truncates() {
        let mut dataset = RankingDataset::default();
        dataset.ranking.reverse();
        let top = dataset.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
    }

    #[test]
    fn test_from_toml_str() {
        let toml_content = r#"
[dataset]
name = "custom"
version = "2.0"

[[ranking]]
rank = 1
name = "Coffee shop"
score = 88.0
reason = "Heavy morning foot traffic."

[[ranking]]
rank = 2
name = "Bakery"
score = 81.0
reason = "Complementary to surrounding cafes."
"#;
        let dataset = RankingDataset::from_toml_str(toml_content).unwrap();
        assert_eq!(dataset.dataset.name, "custom");
        assert_eq!(dataset.ranking.len(), 2);
        assert_eq!(dataset.top(1)[0].name, "Coffee shop");
    }

    #[test]
    fn test_validation_rejects_gapped_ranks() {
        let mut dataset = RankingDataset::default();
        dataset.ranking[2].rank = 5;
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_score() {
        let mut dataset = RankingDataset::default();
        dataset.ranking[0].score = 130.0;
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_ranking() {
        let mut dataset = RankingDataset::default();
        dataset.ranking.clear();
        assert!(dataset.validate().is_err());
    }
}
