//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::constants::{HMAX, MAX_INPUT_BYTES, MAX_SERIES_LEN, MAX_TOKEN_LEN, WMAX};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Width(usize),
    Height(usize),
    Glyph(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => {
                write!(f, "size error ({w}): width must satisfy 0 < width < {WMAX}")
            }
            ConfigError::Height(h) => {
                write!(f, "size error ({h}): height must satisfy 0 < height < {HMAX}")
            }
            ConfigError::Glyph(c) => write!(f, "plot character {c:?} is not printable"),
        }
    }
}
impl Error for ConfigError {}

/// Why a value sequence could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    Empty,
    TooLarge(usize),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Empty => write!(f, "no values found"),
            SeriesError::TooLarge(n) => {
                write!(f, "{n} values exceed the maximum of {MAX_SERIES_LEN}")
            }
        }
    }
}
impl Error for SeriesError {}

/// A single rejected token.  Never fatal: the token is dropped and parsing
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError {
    /// Byte offset of the token's first character.
    pub offset: usize,
    pub kind: DataErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataErrorKind {
    TooLong(usize),
    NotAFloat(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DataErrorKind::TooLong(len) => write!(
                f,
                "data error at byte {}: token of {len} characters exceeds {MAX_TOKEN_LEN}",
                self.offset
            ),
            DataErrorKind::NotAFloat(text) => write!(
                f,
                "data error at byte {}: '{text}' is not a float",
                self.offset
            ),
        }
    }
}
impl Error for DataError {}

/// What went wrong with an input file.
#[derive(Debug)]
pub enum FileCause {
    Open(io::Error),
    Read(io::Error),
    TooBig,
    NoValues,
}

impl fmt::Display for FileCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCause::Open(e) => write!(f, "cannot open file ({e})"),
            FileCause::Read(e) => write!(f, "cannot read file ({e})"),
            FileCause::TooBig => write!(f, "file exceeds {MAX_INPUT_BYTES} bytes"),
            FileCause::NoValues => write!(f, "no values found in file"),
        }
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    File { path: String, cause: FileCause },
    TooLarge { path: String, count: usize },
    Config(ConfigError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::File { path, cause } => write!(f, "file error in {path}: {cause}"),
            GraphError::TooLarge { path, count } => write!(
                f,
                "{path} is too large, {count} floats. Max size is {MAX_SERIES_LEN}"
            ),
            GraphError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GraphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GraphError::Io(e)
            | GraphError::File {
                cause: FileCause::Open(e) | FileCause::Read(e),
                ..
            } => Some(e),
            GraphError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl GraphError {
    /// Attach a path to a series fault raised while loading that path.
    pub(crate) fn from_series(path: &str, e: SeriesError) -> Self {
        match e {
            SeriesError::Empty => GraphError::File {
                path: path.to_owned(),
                cause: FileCause::NoValues,
            },
            SeriesError::TooLarge(count) => GraphError::TooLarge {
                path: path.to_owned(),
                count,
            },
        }
    }
}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for GraphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_errors_name_value_and_limit() {
        let msg = ConfigError::Width(1200).to_string();
        assert!(msg.contains("1200"));
        assert!(msg.contains("1000"));
        let msg = ConfigError::Height(0).to_string();
        assert!(msg.contains("(0)"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn series_faults_gain_the_path() {
        let e = GraphError::from_series("data.txt", SeriesError::Empty);
        assert_eq!(
            e.to_string(),
            "file error in data.txt: no values found in file"
        );
        let e = GraphError::from_series("big.txt", SeriesError::TooLarge(300_000));
        assert!(e.to_string().starts_with("big.txt is too large, 300000 floats"));
    }
}
