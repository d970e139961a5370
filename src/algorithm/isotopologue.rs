use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;

use crate::algorithm::convolution::{convolve, convolve_pow};
use crate::chemistry::formula::SumFormula;
use crate::data::distribution::{ElementContribution, MassShiftDistribution};
use crate::error::IsodistError;

/// aggregate mass-shift distribution of all atoms of one element
///
/// Pure worker task: reads the shared contribution, returns an owned result.
pub fn element_power(contribution: &ElementContribution) -> MassShiftDistribution {
    convolve_pow(contribution.profile.distribution(), contribution.count as u32)
}

/// convolve the per-element aggregates into the whole-molecule distribution
///
/// Aggregates are combined largest key-range first to keep intermediates
/// compact; the stable sort keeps declaration order on ties, so the fold is
/// deterministic. Runs single-threaded after the parallel fan-out has
/// completed. No aggregates yields the identity distribution.
pub fn assemble_molecule(mut aggregates: Vec<MassShiftDistribution>) -> MassShiftDistribution {
    aggregates.sort_by(|a, b| b.max_shift().cmp(&a.max_shift()));

    let mut remaining = aggregates.into_iter();
    let first = match remaining.next() {
        Some(aggregate) => aggregate,
        None => return MassShiftDistribution::identity(),
    };

    remaining.fold(first, |acc, next| convolve(&acc, &next))
}

/// compute the whole-molecule mass-shift distribution
///
/// Validates every atom count before dispatch, raises each element profile to
/// its atom-count power across a fixed-size worker pool, then assembles the
/// aggregates in a deterministic order. With `num_threads = 1` the exact same
/// sequence of convolutions runs on a single worker; parallelism is purely a
/// throughput optimization and never changes the result.
///
/// # Arguments
///
/// * `contributions` - one entry per distinct element, in formula-declaration order
/// * `num_threads` - number of worker threads, clamped to at least 1
pub fn molecule_distribution(
    contributions: &[ElementContribution],
    num_threads: usize,
) -> Result<MassShiftDistribution, IsodistError> {
    for contribution in contributions {
        if contribution.count < 0 {
            return Err(IsodistError::InvalidAtomCount {
                element: contribution.element.clone(),
                count: contribution.count,
            });
        }
    }

    let workers = num_threads.max(1);
    let thread_pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .unwrap();

    // collect() preserves input order, so the merge sees the per-element
    // aggregates in declaration order no matter which worker finished first
    let aggregates: Vec<MassShiftDistribution> =
        thread_pool.install(|| contributions.par_iter().map(element_power).collect());

    log::debug!(
        "convolved {} per-element aggregates on {} worker(s)",
        aggregates.len(),
        workers
    );

    Ok(assemble_molecule(aggregates))
}

/// One output row of the final table.
#[derive(Clone, Debug, Serialize)]
pub struct IsotopologueRow {
    pub mass: f64,
    pub shift: usize,
    pub abundance: f64,
}

/// expand the final distribution into `(mass, shift, abundance)` rows
///
/// Rows are ordered by ascending shift; the absolute mass is the formula's
/// monoisotopic mass plus the shift.
pub fn isotopologue_rows(
    formula: &SumFormula,
    distribution: &MassShiftDistribution,
) -> Result<Vec<IsotopologueRow>, IsodistError> {
    let monoisotopic_mass = formula.monoisotopic_mass()?;

    Ok(distribution
        .iter()
        .map(|(shift, abundance)| IsotopologueRow {
            mass: monoisotopic_mass + shift as f64,
            shift,
            abundance,
        })
        .collect())
}
