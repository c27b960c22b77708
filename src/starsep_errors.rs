use thiserror::Error;

use crate::constants::MAX_WORKERS;

#[derive(Error, Debug)]
pub enum StarSepError {
    #[error("Unable to open the file {0}")]
    CatalogNotFound(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("line {line} had more than 3 columns")]
    TooManyColumns { line: usize },

    #[error("line {line} has only {found} of the 3 expected columns")]
    MissingColumns { line: usize, found: usize },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid number of threads: {0} (expected 1..={max})", max = MAX_WORKERS)]
    InvalidWorkerCount(usize),

    #[error("At least two stars are needed to compute a separation, got {0}")]
    NotEnoughStars(usize),

    #[error("Unable to build the worker pool: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

impl PartialEq for StarSepError {
    fn eq(&self, other: &Self) -> bool {
        use StarSepError::*;
        match (self, other) {
            (CatalogNotFound(a), CatalogNotFound(b)) => a == b,

            // not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ThreadPoolError(_), ThreadPoolError(_)) => true,

            (TooManyColumns { line: a }, TooManyColumns { line: b }) => a == b,
            (
                MissingColumns {
                    line: la,
                    found: fa,
                },
                MissingColumns {
                    line: lb,
                    found: fb,
                },
            ) => la == lb && fa == fb,
            (
                InvalidField {
                    line: la,
                    field: fa,
                    value: va,
                },
                InvalidField {
                    line: lb,
                    field: fb,
                    value: vb,
                },
            ) => la == lb && fa == fb && va == vb,
            (InvalidWorkerCount(a), InvalidWorkerCount(b)) => a == b,
            (NotEnoughStars(a), NotEnoughStars(b)) => a == b,

            _ => false,
        }
    }
}
