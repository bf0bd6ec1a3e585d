// Public API exports
pub mod clusterer;
pub mod corpus;
pub mod error;
pub mod report;
pub mod scoring;
pub mod vectorizer;

// Re-export main types for convenience
pub use error::{ClusterError, Result};

pub use corpus::{load_documents, Document, DocumentId, Field, Vocabulary};

pub use vectorizer::{TfIdfMatrix, TfIdfVectorizer};

pub use clusterer::{
    Cluster, ClusterResult, ConvergenceCriterion, EmptyClusterPolicy, FitObserver, FitState,
    KMeans, KMeansConfig, NoopObserver, TracingObserver,
};

pub use report::{ClusterReport, ScoreRow, ScoreSweep};
