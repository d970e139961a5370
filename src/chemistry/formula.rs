use regex::Regex;

use crate::chemistry::atoms::atomic_weights_mono_isotopic;
use crate::error::IsodistError;

/// An empirical chemical formula, e.g. C5H10O2S.
///
/// Elements keep their declaration order so that downstream merge steps are
/// deterministic regardless of worker count; repeated symbols accumulate into
/// their first position.
#[derive(Clone, Debug)]
pub struct SumFormula {
    pub formula: String,
    pub elements: Vec<(String, i32)>,
}

impl SumFormula {
    pub fn new(formula: &str) -> Result<Self, IsodistError> {
        let elements = parse_formula(formula)?;
        Ok(SumFormula {
            formula: formula.to_string(),
            elements,
        })
    }

    /// Mass of the molecule composed entirely of each element's reference isotope.
    pub fn monoisotopic_mass(&self) -> Result<f64, IsodistError> {
        let atomic_weights = atomic_weights_mono_isotopic();
        self.elements.iter().try_fold(0.0, |acc, (element, count)| {
            let weight = atomic_weights
                .get(element.as_str())
                .ok_or_else(|| IsodistError::UnknownElement(element.clone()))?;
            Ok(acc + weight * *count as f64)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn parse_formula(formula: &str) -> Result<Vec<(String, i32)>, IsodistError> {
    let pattern = Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap();
    let atomic_weights = atomic_weights_mono_isotopic();
    let mut elements: Vec<(String, i32)> = Vec::new();
    let mut matched = 0;

    for captures in pattern.captures_iter(formula) {
        let symbol = &captures[1];
        let digits = &captures[2];
        matched += captures[0].len();

        if !atomic_weights.contains_key(symbol) {
            return Err(IsodistError::UnknownElement(symbol.to_string()));
        }

        let count: i32 = if digits.is_empty() {
            1
        } else {
            digits
                .parse()
                .map_err(|_| IsodistError::MalformedFormula(formula.to_string()))?
        };

        match elements.iter_mut().find(|(element, _)| element == symbol) {
            Some((_, existing)) => *existing += count,
            None => elements.push((symbol.to_string(), count)),
        }
    }

    // anything the pattern skipped is not a valid element/count token
    if matched != formula.len() {
        return Err(IsodistError::MalformedFormula(formula.to_string()));
    }

    Ok(elements)
}
