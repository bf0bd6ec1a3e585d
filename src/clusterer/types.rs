use serde::{Deserialize, Serialize};

use crate::corpus::DocumentId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    pub document_ids: Vec<DocumentId>,
    pub centroid: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    pub iterations: usize,
    pub state: FitState,
}

/// Lifecycle of a k-means model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitState {
    Uninitialized,
    Assigning,
    Updating,
    Converged,
    MaxIterReached,
}

impl FitState {
    /// Whether the model holds a frozen partition
    pub fn is_finished(self) -> bool {
        matches!(self, FitState::Converged | FitState::MaxIterReached)
    }
}
