use crate::core::entities::VID;
use std::{io, num::ParseIntError, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Invalid vertex id {field:?} on line {line}: {source}")]
    InvalidVertexId {
        line: usize,
        field: String,
        source: ParseIntError,
    },
    #[error("Failed to read edge list {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Failed to parse edge list")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("Metric {metric} is undefined: {reason}")]
    InvalidMetricRequest {
        metric: &'static str,
        reason: &'static str,
    },

    #[error("Adjacency entry {vid:?} does not refer to a stored vertex")]
    Inconsistent { vid: VID },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}
