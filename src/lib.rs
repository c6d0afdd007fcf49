//! Public-facing crate root – re-exports.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Compression, Config, ConfigBuilder, Style},
    constants::{HMAX, MAX_SERIES_LEN, MAX_TOKEN_LEN, WMAX},
    data::{Parsed, Series, parse_series, read_series_from_path},
    error::{ConfigError, DataError, GraphError, SeriesError},
};

pub use crate::render::{Renderer, Sampled, Scale, downsample};
