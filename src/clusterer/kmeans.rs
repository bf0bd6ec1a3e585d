use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clusterer::{
    centroid::compute_centroid,
    config::{EmptyClusterPolicy, KMeansConfig},
    convergence::centroid_shift,
    observer::{FitObserver, IterationStats, TracingObserver},
    similarity::cosine_distance,
    types::{Cluster, ClusterResult, FitState},
};
use crate::corpus::DocumentId;
use crate::error::{ClusterError, Result};
use crate::scoring;

/// K-means over cosine distance.
///
/// After a successful fit the model keeps its own copy of the points, the
/// frozen centroids and the per-cluster member indices, so scoring and id
/// lookup need no further input than a parallel id array.
#[derive(Debug, Clone)]
pub struct KMeans {
    config: KMeansConfig,
    state: FitState,
    points: Vec<Vec<f64>>,
    centroids: Vec<Vec<f64>>,
    /// Point indices per cluster, ascending
    members: Vec<Vec<usize>>,
    iterations: usize,
}

impl KMeans {
    pub fn new(config: KMeansConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: FitState::Uninitialized,
            points: Vec::new(),
            centroids: Vec::new(),
            members: Vec::new(),
            iterations: 0,
        })
    }

    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    pub fn state(&self) -> FitState {
        self.state
    }

    /// Number of assignment/update rounds run by the last fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn centroids(&self) -> &[Vec<f64>] {
        &self.centroids
    }

    /// Point indices per cluster
    pub fn members(&self) -> &[Vec<usize>] {
        &self.members
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Cluster index per fitted point
    pub fn assignments(&self) -> Vec<usize> {
        let mut out = vec![0; self.points.len()];
        for (c, members) in self.members.iter().enumerate() {
            for &i in members {
                out[i] = c;
            }
        }
        out
    }

    /// Fit with randomly sampled initial centroids, logging through `tracing`
    pub fn fit(&mut self, points: &[Vec<f64>]) -> Result<()> {
        self.fit_with_observer(points, &mut TracingObserver)
    }

    /// Fit with randomly sampled initial centroids.
    ///
    /// `k` distinct points are drawn without replacement from a ChaCha8 stream
    /// seeded with `config.seed`; centroid `i` is the `i`-th draw.
    pub fn fit_with_observer(
        &mut self,
        points: &[Vec<f64>],
        observer: &mut dyn FitObserver,
    ) -> Result<()> {
        self.check_k(points.len())?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let initial = rand::seq::index::sample(&mut rng, points.len(), self.config.k).into_vec();

        self.fit_from(points, &initial, observer)
    }

    /// Fit starting from the given points as centroids, in order
    pub fn fit_from(
        &mut self,
        points: &[Vec<f64>],
        initial: &[usize],
        observer: &mut dyn FitObserver,
    ) -> Result<()> {
        self.reset();
        let outcome = self.run(points, initial, observer);
        if outcome.is_err() {
            self.reset();
        }
        outcome
    }

    fn run(
        &mut self,
        points: &[Vec<f64>],
        initial: &[usize],
        observer: &mut dyn FitObserver,
    ) -> Result<()> {
        let k = self.config.k;
        self.check_k(points.len())?;
        check_dimensions(points)?;

        if initial.len() != k {
            return Err(ClusterError::InvalidConfig(format!(
                "expected {} initial centroids, got {}",
                k,
                initial.len()
            )));
        }
        for (pos, &index) in initial.iter().enumerate() {
            if index >= points.len() || initial[..pos].contains(&index) {
                return Err(ClusterError::InvalidInitialIndex {
                    index,
                    points: points.len(),
                });
            }
        }

        self.points = points.to_vec();
        self.centroids = initial.iter().map(|&i| points[i].clone()).collect();
        observer.on_init(k, initial);

        for iteration in 0..self.config.max_iterations {
            self.iterations = iteration + 1;

            self.state = FitState::Assigning;
            self.assign();

            self.state = FitState::Updating;
            let previous = self.centroids.clone();
            let empty_clusters = self.update(iteration)?;

            let shifts: Vec<f64> = previous
                .iter()
                .zip(&self.centroids)
                .map(|(old, new)| centroid_shift(old, new, self.config.convergence))
                .collect();

            observer.on_iteration(&IterationStats {
                iteration,
                cluster_sizes: self.members.iter().map(Vec::len).collect(),
                shifts: shifts.clone(),
                empty_clusters,
            });

            if shifts.iter().all(|&s| s <= self.config.tolerance) {
                self.state = FitState::Converged;
                break;
            }
        }

        if self.state != FitState::Converged {
            self.state = FitState::MaxIterReached;
        }

        observer.on_finish(self.state, self.iterations);
        Ok(())
    }

    /// Rebuild cluster membership from scratch against the current centroids
    fn assign(&mut self) {
        self.members = vec![Vec::new(); self.config.k];
        for (i, point) in self.points.iter().enumerate() {
            let c = nearest(&self.centroids, point);
            self.members[c].push(i);
        }
    }

    /// Move each centroid to its members' mean; returns the clusters found empty
    fn update(&mut self, iteration: usize) -> Result<Vec<usize>> {
        let mut empty = Vec::new();

        for c in 0..self.config.k {
            let members: Vec<&[f64]> = self.members[c]
                .iter()
                .map(|&i| self.points[i].as_slice())
                .collect();

            match compute_centroid(&members) {
                Some(centroid) => self.centroids[c] = centroid,
                None => empty.push(c),
            }
        }

        if empty.is_empty() {
            return Ok(empty);
        }

        match self.config.empty_cluster {
            EmptyClusterPolicy::KeepPrevious => {}
            EmptyClusterPolicy::Fail => {
                return Err(ClusterError::EmptyCluster {
                    cluster: empty[0],
                    iteration,
                });
            }
            EmptyClusterPolicy::ReseedFarthest => {
                for &c in &empty {
                    self.reseed_farthest(c);
                }
            }
        }

        Ok(empty)
    }

    /// Hand the point farthest from its centroid over to empty cluster `target`
    /// and re-average the donor cluster.
    ///
    /// Points that are the sole member of their cluster are never taken.
    fn reseed_farthest(&mut self, target: usize) {
        let mut best: Option<(usize, usize, f64)> = None;

        for (c, members) in self.members.iter().enumerate() {
            if members.len() < 2 {
                continue;
            }
            for (slot, &i) in members.iter().enumerate() {
                let d = cosine_distance(&self.points[i], &self.centroids[c]);
                if best.map_or(true, |(_, _, bd)| d > bd) {
                    best = Some((c, slot, d));
                }
            }
        }

        if let Some((c, slot, _)) = best {
            let point = self.members[c].remove(slot);
            self.centroids[target] = self.points[point].clone();
            self.members[target].push(point);

            // Donor keeps at least one member, so its mean is defined
            let remaining: Vec<&[f64]> = self.members[c]
                .iter()
                .map(|&i| self.points[i].as_slice())
                .collect();
            if let Some(centroid) = compute_centroid(&remaining) {
                self.centroids[c] = centroid;
            }
        }
    }

    /// Nearest centroid for an arbitrary vector
    pub fn predict(&self, vector: &[f64]) -> Result<usize> {
        self.ensure_fitted()?;
        let dim = self.centroids[0].len();
        if vector.len() != dim {
            return Err(ClusterError::DimensionMismatch {
                expected: dim,
                actual: vector.len(),
            });
        }
        Ok(nearest(&self.centroids, vector))
    }

    /// Translate member indices into ids using a parallel array of the fitted points
    pub fn clusters<T: Clone>(&self, ids: &[T]) -> Result<Vec<Vec<T>>> {
        self.ensure_fitted()?;
        if ids.len() != self.points.len() {
            return Err(ClusterError::IdLookupMismatch {
                ids: ids.len(),
                points: self.points.len(),
            });
        }

        Ok(self
            .members
            .iter()
            .map(|members| members.iter().map(|&i| ids[i].clone()).collect())
            .collect())
    }

    /// Clusters with their centroids, ready for reporting
    pub fn result(&self, ids: &[DocumentId]) -> Result<ClusterResult> {
        let clusters = self
            .clusters(ids)?
            .into_iter()
            .zip(&self.centroids)
            .enumerate()
            .map(|(id, (document_ids, centroid))| Cluster {
                id,
                document_ids,
                centroid: centroid.clone(),
            })
            .collect();

        Ok(ClusterResult {
            clusters,
            iterations: self.iterations,
            state: self.state,
        })
    }

    /// Sum of squared cosine distances to the assigned centroid
    pub fn sse(&self) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(scoring::sse(&self.points, &self.members, &self.centroids))
    }

    /// Mean silhouette coefficient over every fitted point
    pub fn msc(&self) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(scoring::mean_silhouette(&self.points, &self.members))
    }

    fn check_k(&self, documents: usize) -> Result<()> {
        let k = self.config.k;
        if k < 1 || k > documents {
            return Err(ClusterError::InvalidK { k, documents });
        }
        Ok(())
    }

    fn ensure_fitted(&self) -> Result<()> {
        if self.state.is_finished() {
            Ok(())
        } else {
            Err(ClusterError::NotFitted)
        }
    }

    fn reset(&mut self) {
        self.state = FitState::Uninitialized;
        self.points.clear();
        self.centroids.clear();
        self.members.clear();
        self.iterations = 0;
    }
}

/// Index of the closest centroid; the lowest index wins ties
fn nearest(centroids: &[Vec<f64>], point: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (c, center) in centroids.iter().enumerate() {
        let d = cosine_distance(point, center);
        if d < best_distance {
            best = c;
            best_distance = d;
        }
    }

    best
}

fn check_dimensions(points: &[Vec<f64>]) -> Result<()> {
    let expected = points.first().map(Vec::len).unwrap_or(0);
    match points.iter().find(|p| p.len() != expected) {
        Some(p) => Err(ClusterError::DimensionMismatch {
            expected,
            actual: p.len(),
        }),
        None => Ok(()),
    }
}
