use crate::error::SearchError;
use serde::Deserialize;
use std::fs;

fn default_num_points() -> usize {
    3500
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Number of points to generate.
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    /// Seed for the point generator; fixed so runs are reproducible.
    #[serde(default)]
    pub seed: u64,
    /// Worker count for the pool strategy (0 = host hardware parallelism).
    #[serde(default)]
    pub pool_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
            seed: 0,
            pool_workers: 0,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, SearchError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| SearchError::Config(format!("{}: {}", path, e)))?;
        Ok(config)
    }

    /// The effective pool size: the configured value, or the host's
    /// available parallelism when unset.
    pub fn effective_pool_workers(&self) -> usize {
        if self.pool_workers > 0 {
            self.pool_workers
        } else {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1)
        }
    }

    pub fn print_summary(&self) {
        println!("Configuration:");
        println!("  - Points: {}", self.num_points);
        println!("  - Seed: {}", self.seed);
        println!("  - Pool workers: {}", self.effective_pool_workers());
    }
}
