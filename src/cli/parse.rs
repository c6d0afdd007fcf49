use clap::Parser;

use crate::core::config::{Compression, Style};

/// Top-level CLI structure.
///
/// Short options take their value attached, e.g. `graph -sd -x80 -y20 data.txt`.
#[derive(Parser, Debug)]
#[command(
    name = "graph",
    version,
    about = "Plot the numbers in a plain text file as a terminal chart",
    after_help = "FILE holds float values separated by anything that is not a digit, '.' or '-'."
)]
pub struct Cli {
    /// Plot style: (a)sterisk, (d)ash or (p)eriod
    #[arg(short = 's', value_name = "STYLE", default_value = "a")]
    pub style: Style,

    /// Chart width, 0 < WIDTH < 1000 [default: 69]
    #[arg(short = 'x', value_name = "WIDTH")]
    pub width: Option<usize>,

    /// Chart height, 0 < HEIGHT < 500 [default: 17]
    #[arg(short = 'y', value_name = "HEIGHT")]
    pub height: Option<usize>,

    /// Compression when the file has more values than WIDTH: (a)verage or (s)elect
    #[arg(short = 'c', value_name = "MODE", default_value = "s")]
    pub compression: Compression,

    /// Size the chart to the terminal (explicit -x / -y still win)
    #[arg(short = 'f', long)]
    pub fit: bool,

    /// Print the license banner
    #[arg(short = 'l')]
    pub license: bool,

    /// Emit timing and scaling diagnostics
    #[arg(long)]
    pub debug: bool,

    /// File with float values in plain text (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: String,
}
