use crate::clusterer::cosine_distance;

/// Mean cosine distance from `point` to every member of `cluster`
fn mean_distance(points: &[Vec<f64>], point: &[f64], cluster: &[usize]) -> f64 {
    let total: f64 = cluster
        .iter()
        .map(|&j| cosine_distance(point, &points[j]))
        .sum();
    total / cluster.len() as f64
}

/// Silhouette value of member `i` of cluster `own`.
///
/// `a` averages over the whole own cluster, the point itself included.
/// Returns 0 for singletons, when no other non-empty cluster exists, and
/// when both `a` and `b` are 0.
pub fn point_silhouette(points: &[Vec<f64>], members: &[Vec<usize>], own: usize, i: usize) -> f64 {
    let cluster = &members[own];
    if cluster.len() < 2 {
        return 0.0;
    }

    let a = mean_distance(points, &points[i], cluster);

    let b = members
        .iter()
        .enumerate()
        .filter(|(c, other)| *c != own && !other.is_empty())
        .map(|(_, other)| mean_distance(points, &points[i], other))
        .fold(f64::INFINITY, f64::min);

    if b.is_infinite() {
        return 0.0;
    }

    let scale = a.max(b);
    if scale == 0.0 {
        0.0
    } else {
        (b - a) / scale
    }
}

/// Mean silhouette coefficient over every point of every non-empty cluster.
///
/// Returns 0 when there are no points.
pub fn mean_silhouette(points: &[Vec<f64>], members: &[Vec<usize>]) -> f64 {
    let values: Vec<f64> = members
        .iter()
        .enumerate()
        .flat_map(|(c, cluster)| {
            cluster
                .iter()
                .map(move |&i| point_silhouette(points, members, c, i))
        })
        .collect();

    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
