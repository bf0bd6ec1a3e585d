use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Invalid k={k}: must be between 1 and the number of documents ({documents})")]
    InvalidK { k: usize, documents: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model has not been fitted")]
    NotFitted,

    #[error("Id lookup has {ids} entries but the model was fitted on {points} vectors")]
    IdLookupMismatch { ids: usize, points: usize },

    #[error("Initial centroid index {index} is out of range or repeated (n={points})")]
    InvalidInitialIndex { index: usize, points: usize },

    #[error("Cluster {cluster} has no members after iteration {iteration}")]
    EmptyCluster { cluster: usize, iteration: usize },
}

pub type Result<T> = std::result::Result<T, ClusterError>;
