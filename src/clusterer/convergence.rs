use super::config::ConvergenceCriterion;

/// Movement of one centroid between two iterations.
///
/// The percentage form sums `|new - old| / |old| * 100` per coordinate. A
/// coordinate that stays at zero contributes nothing; one that leaves zero
/// contributes infinity, so the round cannot count as converged.
pub fn centroid_shift(previous: &[f64], current: &[f64], criterion: ConvergenceCriterion) -> f64 {
    previous
        .iter()
        .zip(current)
        .map(|(&old, &new)| match criterion {
            ConvergenceCriterion::Absolute => (new - old).abs(),
            ConvergenceCriterion::Percentage => {
                let delta = (new - old).abs();
                if delta == 0.0 {
                    0.0
                } else if old == 0.0 {
                    f64::INFINITY
                } else {
                    delta / old.abs() * 100.0
                }
            }
        })
        .sum()
}
