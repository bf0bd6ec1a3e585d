use crate::clusterer::cosine_distance;

/// Sum over every cluster member of `cosine_distance(point, centroid)^2`.
///
/// Not normalized by cluster size or point count, so it shrinks as k grows.
/// Empty clusters contribute nothing.
pub fn sse(points: &[Vec<f64>], members: &[Vec<usize>], centroids: &[Vec<f64>]) -> f64 {
    members
        .iter()
        .zip(centroids)
        .flat_map(|(cluster, centroid)| {
            cluster
                .iter()
                .map(move |&i| cosine_distance(&points[i], centroid).powi(2))
        })
        .sum()
}
