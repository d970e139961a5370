// chemistry module
pub mod chemistry {
    pub mod atoms;
    pub mod formula;
}

// algorithm module
pub mod algorithm {
    pub mod convolution;
    pub mod isotopologue;
}

// data module
pub mod data {
    pub mod abundance;
    pub mod distribution;
}

// error types
pub mod error;
