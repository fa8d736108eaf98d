use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplesheetError {
    #[error("could not open samplesheet {:?}: {}", path, source)]
    Open { path: PathBuf, source: io::Error },

    #[error("could not parse samplesheet {:?}: {}", path, source)]
    Parse { path: PathBuf, source: csv::Error },

    #[error(
        "samplesheet {:?} line {} has {} fields, header has {}",
        path,
        line,
        found,
        expected
    )]
    TooManyFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("samplesheet is missing required column '{}'", column)]
    MissingColumn { column: String },

    #[error("could not create output file {:?}: {}", path, source)]
    Create { path: PathBuf, source: io::Error },

    #[error("could not write output file {:?}: {}", path, source)]
    Write { path: PathBuf, source: csv::Error },
}
