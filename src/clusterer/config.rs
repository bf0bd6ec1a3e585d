use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClusterError, Result};

pub const DEFAULT_K: usize = 3;
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_MAX_ITERATIONS: usize = 500;
pub const DEFAULT_SEED: u64 = 42;

/// How centroid movement is measured between iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceCriterion {
    /// Summed percentage change per coordinate, guarded against zero divisors
    #[default]
    Percentage,
    /// Summed absolute change per coordinate
    Absolute,
}

/// What to do when a cluster ends an assignment step with no members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Leave the centroid where it was
    #[default]
    KeepPrevious,
    /// Abort the fit with `ClusterError::EmptyCluster`
    Fail,
    /// Move the centroid onto the point farthest from its own centroid
    ReseedFarthest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,
    /// Convergence threshold, interpreted by `convergence`
    pub tolerance: f64,
    /// Hard cap on assignment/update rounds
    pub max_iterations: usize,
    /// Seed for initial centroid sampling
    pub seed: u64,
    pub convergence: ConvergenceCriterion,
    pub empty_cluster: EmptyClusterPolicy,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
            convergence: ConvergenceCriterion::default(),
            empty_cluster: EmptyClusterPolicy::default(),
        }
    }
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_convergence(mut self, convergence: ConvergenceCriterion) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Load from a JSON file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.validate()?;

        tracing::info!("Loaded clustering config from {}", path.display());
        Ok(config)
    }

    /// Check option ranges that do not depend on the data
    pub fn validate(&self) -> Result<()> {
        if self.k < 1 {
            return Err(ClusterError::InvalidConfig("k must be at least 1".to_string()));
        }
        if self.max_iterations < 1 {
            return Err(ClusterError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidConfig(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
