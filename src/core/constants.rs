//! A collection of constants.

/// Widths must stay strictly below this.
pub const WMAX: usize = 1000;
/// Heights must stay strictly below this.
pub const HMAX: usize = 500;

/// Hard ceiling on the number of values accepted from one input.
pub const MAX_SERIES_LEN: usize = 262_144;
/// Longest run of numeric characters accepted as a single token.
pub const MAX_TOKEN_LEN: usize = 20;
/// Input bytes read before giving up: room for every value at full token
/// length with a few separator bytes each.
pub const MAX_INPUT_BYTES: usize = MAX_SERIES_LEN * (MAX_TOKEN_LEN + 1) * 4;

pub const DEFAULT_WIDTH: usize = 69;
pub const DEFAULT_HEIGHT: usize = 17;

/// The y-axis label column, bar included: `" 10 |"`
pub const LABEL_WIDTH: usize = 5;
/// Only every fifth row is eligible for a numeric label
pub const Y_LABEL_EVERY: usize = 5;
/// One `|` tick on the x scale every ten columns
pub const X_TICK_EVERY: usize = 10;
/// Field width of an x scale label, matches the tick spacing
pub const X_LABEL_WIDTH: usize = 10;
/// Room reserved right of the plot for the `X (n)` marker when fitting to the terminal
pub const X_MARKER_RESERVE: usize = 10;

pub const KILO: f32 = 1_000.0;
pub const MEGA: f32 = 1_000_000.0;
