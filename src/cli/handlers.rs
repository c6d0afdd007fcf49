use std::{io::Write, time::Instant};

use log::debug;

use crate::core::{
    bounds::{fit_dims, terminal_geometry},
    config::Config,
    data::{Parsed, read_series_from_path},
    error::GraphError,
};
use crate::render::Renderer;

use super::parse::Cli;

/// Validated chart parameters for this invocation.
pub fn config(a: &Cli) -> Result<Config, GraphError> {
    let (fit_w, fit_h) = if a.fit {
        let (w, h) = fit_dims(terminal_geometry());
        (Some(w), Some(h))
    } else {
        (None, None)
    };

    let cfg = Config::builder()
        .width_opt(fit_w)
        .height_opt(fit_h)
        .width_opt(a.width)
        .height_opt(a.height)
        .style(a.style)
        .compression(a.compression)
        .build()?;
    Ok(cfg)
}

/// Load, report, render.  Nothing is drawn unless every step before the
/// renderer succeeded.
pub fn plot<W: Write>(a: &Cli, out: &mut W) -> Result<(), GraphError> {
    if a.license {
        license(out)?;
    }
    let cfg = config(a)?;

    let t_ingest = Instant::now();
    let Parsed { series, rejected } = read_series_from_path(&a.file)?;
    debug!(
        "ingest: {} µs ({} values)",
        t_ingest.elapsed().as_micros(),
        series.len()
    );

    for e in &rejected {
        eprintln!("warning: {e}");
    }
    writeln!(out, "file: {} {} values found.", a.file, series.len())?;

    let t_render = Instant::now();
    Renderer::new().render(&cfg, &series, out)?;
    debug!("render: {} µs", t_render.elapsed().as_micros());
    Ok(())
}

const LICENSE: &str = "\
graph Copyright (C) 2017 Martin Blom

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
";

/// Copyright and GPL banner.
pub fn license<W: Write>(out: &mut W) -> Result<(), GraphError> {
    writeln!(out, "{LICENSE}")?;
    Ok(())
}
