use thiserror::Error;

/// Errors raised while building or convolving isotopologue distributions.
///
/// All variants are fatal for the current invocation; the pipeline never
/// emits a partial distribution, since a missing or malformed contributor
/// would silently corrupt the final result.
#[derive(Debug, Error)]
pub enum IsodistError {
    #[error("invalid atom count {count} for element '{element}'")]
    InvalidAtomCount { element: String, count: i32 },

    #[error("missing abundances for the following atoms: {0}")]
    IncompleteIsotopeData(String),

    #[error("abundances for element '{element}' sum to {sum}, expected 1.0")]
    NumericAnomaly { element: String, sum: f64 },

    #[error("no reference isotope (mass shift 0) for element '{0}'")]
    MissingReferenceIsotope(String),

    #[error("negative mass shift {shift} for isotope {isotope} of element '{element}'")]
    NegativeMassShift {
        element: String,
        isotope: u32,
        shift: i64,
    },

    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("could not parse formula '{0}'")]
    MalformedFormula(String),

    #[error("failed to read or write table: {0}")]
    Table(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
