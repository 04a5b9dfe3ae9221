use rand::rngs::SmallRng;
use rand::Rng;

/// Epsilon-greedy selection over the given estimates: explore a uniformly
/// random index with probability `epsilon`, otherwise exploit the maximum.
pub(super) fn epsilon_greedy(estimates: &[f64], epsilon: f64, rng: &mut SmallRng) -> usize {
    if rng.random::<f64>() < epsilon {
        rng.random_range(0..estimates.len())
    } else {
        greedy(estimates, rng)
    }
}

/// Index of the maximal estimate, drawn uniformly from all tied maxima.
pub(super) fn greedy(estimates: &[f64], rng: &mut SmallRng) -> usize {
    let best = estimates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<usize> = estimates
        .iter()
        .enumerate()
        .filter(|(_, &estimate)| estimate == best)
        .map(|(action, _)| action)
        .collect();

    tied[rng.random_range(0..tied.len())]
}
