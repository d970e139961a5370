use crate::data::distribution::MassShiftDistribution;

/// convolve two mass-shift distributions
///
/// Models the combined outcome of two independent contributors whose shifts
/// add: for every key pair `(a, b)` the probability mass `A[a] * B[b]`
/// accumulates at `a + b`. The result is dense over
/// `0..=a.max_shift() + b.max_shift()`; nothing is thresholded or truncated,
/// so abundances are kept exactly even when they decay toward underflow.
///
/// # Examples
///
/// ```
/// use isodist::algorithm::convolution::convolve;
/// use isodist::data::distribution::MassShiftDistribution;
///
/// let dist = MassShiftDistribution::from_pairs(&[(0, 0.5), (1, 0.5)]);
/// let result = convolve(&dist, &dist);
/// assert_eq!(result.probabilities(), &[0.25, 0.5, 0.25]);
/// ```
pub fn convolve(
    dist_a: &MassShiftDistribution,
    dist_b: &MassShiftDistribution,
) -> MassShiftDistribution {
    let mut combined = vec![0.0; dist_a.max_shift() + dist_b.max_shift() + 1];

    for (shift_a, probability_a) in dist_a.iter() {
        if probability_a == 0.0 {
            continue;
        }
        for (shift_b, probability_b) in dist_b.iter() {
            combined[shift_a + shift_b] += probability_a * probability_b;
        }
    }

    MassShiftDistribution::from_dense(combined)
}

/// raise a value to an integer power under an associative combine operation
///
/// Exponentiation by squaring: O(log n) applications of `combine` instead of
/// O(n). `n = 0` returns the identity.
pub fn combine_pow<D, F>(base: &D, n: u32, identity: D, combine: F) -> D
where
    D: Clone,
    F: Fn(&D, &D) -> D,
{
    let mut result = identity;
    let mut square = base.clone();
    let mut remaining = n;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = combine(&result, &square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = combine(&square, &square);
        }
    }

    result
}

/// convolve a distribution with itself n times
///
/// Computes the total-shift distribution of `n` independent identical atoms.
/// Probabilities stay un-renormalized throughout; renormalizing mid-power
/// would mask genuine abundance decay.
///
/// # Examples
///
/// ```
/// use isodist::algorithm::convolution::convolve_pow;
/// use isodist::data::distribution::MassShiftDistribution;
///
/// let dist = MassShiftDistribution::from_pairs(&[(0, 0.5), (1, 0.5)]);
/// let result = convolve_pow(&dist, 2);
/// assert_eq!(result.probabilities(), &[0.25, 0.5, 0.25]);
/// ```
pub fn convolve_pow(dist: &MassShiftDistribution, n: u32) -> MassShiftDistribution {
    match n {
        0 => MassShiftDistribution::identity(),
        1 => dist.clone(),
        _ => combine_pow(dist, n, MassShiftDistribution::identity(), convolve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dist_close(a: &MassShiftDistribution, b: &MassShiftDistribution, tolerance: f64) {
        assert_eq!(a.max_shift(), b.max_shift());
        for ((shift, pa), (_, pb)) in a.iter().zip(b.iter()) {
            assert!(
                (pa - pb).abs() <= tolerance,
                "shift {}: {} vs {}",
                shift,
                pa,
                pb
            );
        }
    }

    #[test]
    fn test_convolve_with_identity_is_noop() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.7), (1, 0.2), (2, 0.1)]);
        let result = convolve(&dist, &MassShiftDistribution::identity());
        assert_eq!(result, dist);
    }

    #[test]
    fn test_convolve_is_commutative() {
        let a = MassShiftDistribution::from_pairs(&[(0, 0.7), (1, 0.2), (2, 0.1)]);
        let b = MassShiftDistribution::from_pairs(&[(0, 0.5), (3, 0.5)]);
        assert_dist_close(&convolve(&a, &b), &convolve(&b, &a), 1e-15);
    }

    #[test]
    fn test_convolve_is_associative() {
        let a = MassShiftDistribution::from_pairs(&[(0, 0.7), (1, 0.2), (2, 0.1)]);
        let b = MassShiftDistribution::from_pairs(&[(0, 0.5), (3, 0.5)]);
        let c = MassShiftDistribution::from_pairs(&[(0, 0.9), (1, 0.09), (2, 0.01)]);
        let left = convolve(&convolve(&a, &b), &c);
        let right = convolve(&a, &convolve(&b, &c));
        assert_dist_close(&left, &right, 1e-12);
    }

    #[test]
    fn test_convolve_extends_key_range() {
        let a = MassShiftDistribution::from_pairs(&[(0, 0.5), (2, 0.5)]);
        let b = MassShiftDistribution::from_pairs(&[(0, 0.5), (4, 0.5)]);
        assert_eq!(convolve(&a, &b).max_shift(), 6);
    }

    #[test]
    fn test_convolve_pow_zero_is_identity() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.9), (1, 0.1)]);
        assert_eq!(convolve_pow(&dist, 0), MassShiftDistribution::identity());
    }

    #[test]
    fn test_convolve_pow_one_is_input() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.9), (1, 0.1)]);
        assert_eq!(convolve_pow(&dist, 1), dist);
    }

    #[test]
    fn test_convolve_pow_squared_two_isotope_example() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.9), (1, 0.1)]);
        let result = convolve_pow(&dist, 2);
        let expected = MassShiftDistribution::from_pairs(&[(0, 0.81), (1, 0.18), (2, 0.01)]);
        assert_dist_close(&result, &expected, 1e-15);
    }

    #[test]
    fn test_convolve_pow_matches_naive_convolution() {
        let dist =
            MassShiftDistribution::from_pairs(&[(0, 0.99757), (1, 0.00038), (2, 0.00205)]);
        for n in 0..=10 {
            let fast = convolve_pow(&dist, n);
            let naive = (0..n).fold(MassShiftDistribution::identity(), |acc, _| {
                convolve(&acc, &dist)
            });
            assert_dist_close(&fast, &naive, 1e-12);
        }
    }

    #[test]
    fn test_convolve_pow_key_range() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.9499), (1, 0.0075), (2, 0.0425), (4, 0.0001)]);
        assert_eq!(convolve_pow(&dist, 25).max_shift(), 100);
    }

    #[test]
    fn test_convolve_pow_preserves_total_probability() {
        let dist = MassShiftDistribution::from_pairs(&[(0, 0.9893), (1, 0.0107)]);
        for n in [2, 17, 100, 254, 333] {
            let total = convolve_pow(&dist, n).total_probability();
            assert!((total - 1.0).abs() < 1e-9, "n = {}: total = {}", n, total);
        }
    }
}
