use super::types::FitState;

/// Summary of one assignment/update round
#[derive(Debug, Clone, PartialEq)]
pub struct IterationStats {
    /// Zero-based iteration number
    pub iteration: usize,
    /// Member count per cluster after assignment
    pub cluster_sizes: Vec<usize>,
    /// Per-cluster centroid movement, as measured by the convergence criterion
    pub shifts: Vec<f64>,
    /// Clusters that received no members this round
    pub empty_clusters: Vec<usize>,
}

/// Receives progress events from `KMeans::fit`
pub trait FitObserver {
    /// Called once with the point indices chosen as initial centroids
    fn on_init(&mut self, _k: usize, _seed_indices: &[usize]) {}

    /// Called after each update step
    fn on_iteration(&mut self, _stats: &IterationStats) {}

    /// Called when the loop stops
    fn on_finish(&mut self, _state: FitState, _iterations: usize) {}
}

/// Discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FitObserver for NoopObserver {}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FitObserver for TracingObserver {
    fn on_init(&mut self, k: usize, seed_indices: &[usize]) {
        tracing::info!(k, ?seed_indices, "Initialized k-means centroids");
    }

    fn on_iteration(&mut self, stats: &IterationStats) {
        tracing::debug!(
            iteration = stats.iteration,
            sizes = ?stats.cluster_sizes,
            "k-means iteration"
        );
        if !stats.empty_clusters.is_empty() {
            tracing::warn!(
                iteration = stats.iteration,
                clusters = ?stats.empty_clusters,
                "Empty clusters after assignment"
            );
        }
    }

    fn on_finish(&mut self, state: FitState, iterations: usize) {
        tracing::info!(?state, iterations, "k-means finished");
    }
}
