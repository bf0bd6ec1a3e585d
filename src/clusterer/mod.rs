mod centroid;
mod config;
mod convergence;
mod kmeans;
mod observer;
mod similarity;
mod types;


pub use centroid::compute_centroid;
pub use config::{
    ConvergenceCriterion, EmptyClusterPolicy, KMeansConfig, DEFAULT_K, DEFAULT_MAX_ITERATIONS,
    DEFAULT_SEED, DEFAULT_TOLERANCE,
};
pub use convergence::centroid_shift;
pub use kmeans::KMeans;
pub use observer::{FitObserver, IterationStats, NoopObserver, TracingObserver};
pub use similarity::{cosine_distance, cosine_similarity};
pub use types::{Cluster, ClusterResult, FitState};
