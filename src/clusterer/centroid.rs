/// Coordinate-wise mean of the member vectors, `None` for an empty cluster
pub fn compute_centroid(vectors: &[&[f64]]) -> Option<Vec<f64>> {
    let dim = vectors.first()?.len();
    let mut out = vec![0.0; dim];

    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }

    let n = vectors.len() as f64;
    for x in out.iter_mut() {
        *x /= n;
    }

    Some(out)
}
