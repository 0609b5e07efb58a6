use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to scan test directory '{path}': {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to read test source '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to resolve output path '{path}': {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write generated file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub fn scan(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn resolve(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resolve {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
