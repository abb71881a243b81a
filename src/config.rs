// path: src/config.rs
use omicron_catalog::price::{DEFAULT_TOP_RATED_LIMIT, DEFAULT_TOP_RATED_MIN, NAIRA_CONVERSION_RATE};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub datasets: Vec<PathBuf>,
    #[serde(default = "default_top_rated_min")]
    pub top_rated_min: f64,
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,
    #[serde(default = "default_naira_rate")]
    pub naira_rate: f64,
}

fn default_top_rated_min() -> f64 { DEFAULT_TOP_RATED_MIN }
fn default_top_rated_limit() -> usize { DEFAULT_TOP_RATED_LIMIT }
fn default_naira_rate() -> f64 { NAIRA_CONVERSION_RATE }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            top_rated_min: default_top_rated_min(),
            top_rated_limit: default_top_rated_limit(),
            naira_rate: default_naira_rate(),
        }
    }
}

impl CatalogConfig {
    /// Кривые числа -> дефолт.
    pub fn from_env() -> Self {
        let datasets = std::env::var("OMICRON_DATASETS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();
        let top_rated_min = env_parse("OMICRON_TOP_RATED_MIN").unwrap_or(default_top_rated_min());
        let top_rated_limit = env_parse("OMICRON_TOP_RATED_LIMIT").unwrap_or(default_top_rated_limit());
        let naira_rate = env_parse("OMICRON_NAIRA_RATE").unwrap_or(default_naira_rate());

        Self { datasets, top_rated_min, top_rated_limit, naira_rate }
    }

    /// CLI paths win over configured datasets.
    pub fn datasets_or(&self, cli: Vec<PathBuf>) -> Vec<PathBuf> {
        if cli.is_empty() { self.datasets.clone() } else { cli }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
