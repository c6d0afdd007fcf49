//! Loose float ingest: any byte outside `0-9 . -` separates values.
//!
//! Parsing is two-pass.  [`count_values`] walks the input once to learn how
//! many values to expect so the size ceiling is enforced before anything is
//! allocated; [`parse_series`] then walks it again and converts.  Both passes
//! are driven by the same [`Tokens`] iterator, so they cannot disagree.

use std::{
    fs::File,
    io::{self, BufReader, Read},
};

use log::debug;

use crate::core::{
    bounds,
    constants::{MAX_INPUT_BYTES, MAX_SERIES_LEN, MAX_TOKEN_LEN},
    error::{DataError, DataErrorKind, FileCause, GraphError, SeriesError},
};

// --- Tokenizer ---

#[inline]
const fn is_numeric(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-'
}

/// One maximal run of numeric characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Number { offset: usize, text: &'a [u8] },
    /// A run longer than the token bound; its characters are discarded.
    Overlong { offset: usize, len: usize },
}

/// Splits raw bytes into numeric tokens.
pub struct Tokens<'a> {
    src: &'a [u8],
    pos: usize,
    max_len: usize,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(src: &'a [u8], max_len: usize) -> Self {
        Self {
            src,
            pos: 0,
            max_len,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let src = self.src;
        while self.pos < src.len() && !is_numeric(src[self.pos]) {
            self.pos += 1;
        }
        if self.pos == src.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < src.len() && is_numeric(src[self.pos]) {
            self.pos += 1;
        }
        let len = self.pos - start;
        if len > self.max_len {
            Some(Token::Overlong { offset: start, len })
        } else {
            Some(Token::Number {
                offset: start,
                text: &src[start..self.pos],
            })
        }
    }
}

// --- Series ---

/// Non-empty, bounded sequence of values in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f32>,
}

impl Series {
    pub fn new(values: Vec<f32>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }
        if values.len() > MAX_SERIES_LEN {
            return Err(SeriesError::TooLarge(values.len()));
        }
        Ok(Self { values })
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for clippy's `len_without_is_empty`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        let first = self.values[0];
        bounds::range(&self.values).unwrap_or((first, first))
    }
}

/// Values plus every token that had to be dropped on the way.
#[derive(Debug)]
pub struct Parsed {
    pub series: Series,
    pub rejected: Vec<DataError>,
}

// --- Parsing ---

/// First pass: how many candidate values does `src` hold?
#[must_use]
pub fn count_values(src: &[u8]) -> usize {
    Tokens::new(src, MAX_TOKEN_LEN)
        .filter(|t| matches!(t, Token::Number { .. }))
        .count()
}

#[inline]
fn parse_f32(text: &[u8], offset: usize) -> Result<f32, DataError> {
    let bad = || DataError {
        offset,
        kind: DataErrorKind::NotAFloat(String::from_utf8_lossy(text).into_owned()),
    };
    let val = lexical_core::parse::<f32>(text).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Parse `src` into a [`Series`].
///
/// Malformed or over-long tokens are skipped and collected in
/// [`Parsed::rejected`]; only an empty or oversized result is fatal.
pub fn parse_series(src: &[u8]) -> Result<Parsed, SeriesError> {
    let count = count_values(src);
    debug!("counted {count} candidate values");
    if count == 0 {
        return Err(SeriesError::Empty);
    }
    if count > MAX_SERIES_LEN {
        return Err(SeriesError::TooLarge(count));
    }

    let mut values = Vec::with_capacity(count);
    let mut rejected = Vec::new();
    for token in Tokens::new(src, MAX_TOKEN_LEN) {
        let res = match token {
            Token::Number { offset, text } => parse_f32(text, offset),
            Token::Overlong { offset, len } => Err(DataError {
                offset,
                kind: DataErrorKind::TooLong(len),
            }),
        };
        match res {
            Ok(v) => values.push(v),
            Err(e) => {
                debug!("dropped token: {e}");
                rejected.push(e);
            }
        }
    }

    Ok(Parsed {
        series: Series::new(values)?,
        rejected,
    })
}

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read at most `cap` bytes; anything longer is rejected without being held.
fn read_capped<R: Read>(src: R, path: &str, cap: usize) -> Result<Vec<u8>, GraphError> {
    let file_err = |cause| GraphError::File {
        path: path.to_owned(),
        cause,
    };
    let mut rdr = BufReader::with_capacity(BUF_CAP, src).take(cap as u64 + 1);
    let mut buf = Vec::new();
    rdr.read_to_end(&mut buf)
        .map_err(|e| file_err(FileCause::Read(e)))?;
    if buf.len() > cap {
        return Err(file_err(FileCause::TooBig));
    }
    Ok(buf)
}

/// Read everything from `src` and parse it; `path` only labels errors.
pub fn read_series<R: Read>(src: R, path: &str) -> Result<Parsed, GraphError> {
    let buf = read_capped(src, path, MAX_INPUT_BYTES)?;
    parse_series(&buf).map_err(|e| GraphError::from_series(path, e))
}

/// Load a series from a file, or from stdin when `path` is `-`.
pub fn read_series_from_path(path: &str) -> Result<Parsed, GraphError> {
    if path == "-" {
        read_series(io::stdin().lock(), path)
    } else {
        let file = File::open(path).map_err(|e| GraphError::File {
            path: path.to_owned(),
            cause: FileCause::Open(e),
        })?;
        read_series(file, path)
    }
}
