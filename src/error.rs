//! Error types for phrase input and report output

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrequencyError {
    #[error("Cannot open input file {path:?}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read phrase from {path:?}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read phrase from standard input")]
    Stdin(#[source] io::Error),

    #[error("Cannot create output file {path:?}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write report to {target}")]
    OutputWrite {
        target: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FrequencyError>;
