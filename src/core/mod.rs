//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use config::{Compression, Config, ConfigBuilder, Style};
pub use constants::{HMAX, MAX_SERIES_LEN, MAX_TOKEN_LEN, WMAX};
pub use data::{Parsed, Series};
pub use error::{ConfigError, DataError, GraphError, SeriesError};
