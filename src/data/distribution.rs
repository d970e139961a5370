use serde::{Deserialize, Serialize};

use crate::error::IsodistError;

/// Tolerance for the total-probability invariant of a single-atom profile.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Probability of every integer mass shift for one or more atoms.
///
/// Backed by a dense vector indexed by shift; the all-lightest-isotope
/// reference sits at index zero and the vector length is always
/// `max_shift + 1`. Values are plain double-precision probabilities and may
/// underflow toward zero for deeply improbable shifts, which is expected and
/// never clamped or pruned. Instances are immutable once built; combining
/// operations always return a new distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassShiftDistribution {
    probabilities: Vec<f64>,
}

impl MassShiftDistribution {
    /// The neutral element of convolution, `{0: 1.0}`.
    pub fn identity() -> Self {
        MassShiftDistribution {
            probabilities: vec![1.0],
        }
    }

    /// Builds a distribution from sparse `(shift, probability)` pairs.
    /// Duplicate shifts accumulate; an empty slice yields the identity.
    pub fn from_pairs(pairs: &[(usize, f64)]) -> Self {
        if pairs.is_empty() {
            return Self::identity();
        }
        let max_shift = pairs.iter().map(|&(shift, _)| shift).max().unwrap();
        let mut probabilities = vec![0.0; max_shift + 1];
        for &(shift, probability) in pairs {
            probabilities[shift] += probability;
        }
        MassShiftDistribution { probabilities }
    }

    pub(crate) fn from_dense(probabilities: Vec<f64>) -> Self {
        if probabilities.is_empty() {
            return Self::identity();
        }
        MassShiftDistribution { probabilities }
    }

    pub fn max_shift(&self) -> usize {
        self.probabilities.len() - 1
    }

    pub fn probability(&self, shift: usize) -> f64 {
        self.probabilities.get(shift).copied().unwrap_or(0.0)
    }

    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Iterates `(shift, probability)` in ascending shift order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.probabilities.iter().copied().enumerate()
    }
}

/// Validated single-atom mass-shift distribution for one element.
///
/// Input contract from the abundance table: shift 0 (the reference isotope)
/// must carry probability, and all isotope probabilities of the element must
/// sum to 1.0 within [`PROBABILITY_SUM_TOLERANCE`]. Violations are data
/// errors surfaced before any convolution runs.
#[derive(Clone, Debug)]
pub struct IsotopeProfile {
    element: String,
    distribution: MassShiftDistribution,
}

impl IsotopeProfile {
    pub fn new(element: &str, pairs: &[(usize, f64)]) -> Result<Self, IsodistError> {
        let distribution = MassShiftDistribution::from_pairs(pairs);

        if pairs.is_empty() || distribution.probability(0) <= 0.0 {
            return Err(IsodistError::MissingReferenceIsotope(element.to_string()));
        }

        let sum = distribution.total_probability();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(IsodistError::NumericAnomaly {
                element: element.to_string(),
                sum,
            });
        }

        Ok(IsotopeProfile {
            element: element.to_string(),
            distribution,
        })
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn distribution(&self) -> &MassShiftDistribution {
        &self.distribution
    }
}

/// One distinct element of a formula: its symbol, atom count and profile.
/// Shared read-only with worker tasks during the parallel fan-out.
#[derive(Clone, Debug)]
pub struct ElementContribution {
    pub element: String,
    pub count: i32,
    pub profile: IsotopeProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pairs_yield_identity() {
        let distribution = MassShiftDistribution::from_pairs(&[]);
        assert_eq!(distribution, MassShiftDistribution::identity());
        assert_eq!(distribution.max_shift(), 0);
        assert_eq!(distribution.probability(0), 1.0);
    }

    #[test]
    fn test_from_pairs_accumulates_duplicates() {
        let distribution = MassShiftDistribution::from_pairs(&[(0, 0.5), (2, 0.25), (2, 0.25)]);
        assert_eq!(distribution.probabilities(), &[0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_probability_outside_range_is_zero() {
        let distribution = MassShiftDistribution::from_pairs(&[(0, 1.0)]);
        assert_eq!(distribution.probability(5), 0.0);
    }

    #[test]
    fn test_profile_accepts_unit_sum() {
        let profile = IsotopeProfile::new("C", &[(0, 0.9893), (1, 0.0107)]).unwrap();
        assert_eq!(profile.element(), "C");
        assert_eq!(profile.distribution().max_shift(), 1);
    }

    #[test]
    fn test_profile_rejects_bad_sum() {
        let result = IsotopeProfile::new("S", &[(0, 0.9493), (1, 0.0076), (2, 0.0429)]);
        assert!(matches!(result, Err(IsodistError::NumericAnomaly { .. })));
    }

    #[test]
    fn test_profile_requires_reference_isotope() {
        let result = IsotopeProfile::new("H", &[(1, 1.0)]);
        assert!(matches!(
            result,
            Err(IsodistError::MissingReferenceIsotope(_))
        ));
    }
}
