pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut na = 0.0;
    let mut nb = 0.0;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }

    // Zero-magnitude vectors are dissimilar to everything
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }

    (dot / (na.sqrt() * nb.sqrt())).clamp(-1.0, 1.0)
}

pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    1.0 - cosine_similarity(a, b)
}
