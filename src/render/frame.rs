//! Text chart renderer:
//! - one header line, `height + 1` plot rows top to bottom, two x scale lines
//! - y labels every fifth row with `k`/`M` suffixes
//! - x axis drawn on the first row whose threshold reaches zero
//! - whole frame assembled in a reusable buffer, written once

use std::{
    fmt::Write as _,
    io::Write,
};

use log::debug;

use crate::{
    core::{
        config::Config,
        constants::{KILO, LABEL_WIDTH, MEGA, X_LABEL_WIDTH, X_TICK_EVERY, Y_LABEL_EVERY},
        data::Series,
        error::GraphError,
    },
    render::sampler::{Sampled, downsample},
};

/// Vertical scale: row `k` holds values down to `threshold(k)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub max: f32,
    /// Zero for all-positive data, otherwise the true minimum.
    pub floor: f32,
    pub step: f32,
    pub rows: usize,
}

impl Scale {
    #[must_use]
    pub fn new((min, max): (f32, f32), height: usize) -> Self {
        let floor = if min > 0.0 { 0.0 } else { min };
        Self {
            max,
            floor,
            step: (max - floor) / height.max(1) as f32,
            rows: height,
        }
    }

    /// Lowest value drawn on row `k`.  The bottom row is pinned to `floor`
    /// so rounding in `max - step * rows` cannot lift it above zero.
    #[inline]
    #[must_use]
    pub fn threshold(&self, k: usize) -> f32 {
        if k >= self.rows {
            self.floor
        } else {
            self.max - self.step * k as f32
        }
    }
}

/// Scale a label value into `k`/`M` units.
#[inline]
fn unit(t: f32) -> (f32, char) {
    let mag = t.abs();
    if mag > MEGA {
        (t / MEGA, 'M')
    } else if mag > KILO {
        (t / KILO, 'k')
    } else {
        (t, ' ')
    }
}

fn push_y_label(buf: &mut String, k: usize, threshold: f32, origin_row: bool) {
    const NUM: usize = LABEL_WIDTH - 2;
    if origin_row {
        let _ = write!(buf, "{:>NUM$} |", 0);
    } else if k % Y_LABEL_EVERY == 0 && threshold.abs() > 0.5 {
        let (v, suffix) = unit(threshold);
        let _ = write!(buf, "{v:>NUM$.0}{suffix}|");
    } else {
        let _ = write!(buf, "{:>LABEL_WIDTH$}", '|');
    }
}

fn push_x_scale(buf: &mut String, width: usize, ratio: f32) {
    let pad = LABEL_WIDTH - 1;
    buf.extend(std::iter::repeat_n(' ', pad));
    buf.extend((0..width).map(|i| if i % X_TICK_EVERY == 0 { '|' } else { ' ' }));
    buf.push('\n');

    buf.extend(std::iter::repeat_n(' ', pad));
    for i in (0..width).step_by(X_TICK_EVERY) {
        let _ = write!(buf, "{:<X_LABEL_WIDTH$.0}", i as f32 * ratio);
    }
    buf.push('\n');
}

pub struct Renderer {
    buf: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Paint `series` into the internal buffer and return it.
    pub fn paint(&mut self, cfg: &Config, series: &Series) -> &str {
        let Sampled { points, ratio } = downsample(series.values(), cfg.width, cfg.compression);
        let scale = Scale::new(series.range(), cfg.height);
        debug!(
            "scale: max {} floor {} step {} over {} rows, x ratio {ratio}",
            scale.max, scale.floor, scale.step, scale.rows
        );

        let buf = &mut self.buf;
        buf.clear();
        let _ = writeln!(buf, "{:>w$}", 'Y', w = LABEL_WIDTH - 1);

        let mut plotted = vec![false; points.len()];
        let mut origin_pending = true;

        for k in 0..=scale.rows {
            let threshold = scale.threshold(k);
            let origin_row = origin_pending && threshold <= 0.0;

            push_y_label(buf, k, threshold, origin_row);

            for (&p, done) in points.iter().zip(plotted.iter_mut()) {
                if !*done && p >= threshold {
                    buf.push(cfg.glyph);
                    *done = true;
                } else if origin_row {
                    buf.push('_');
                } else {
                    buf.push(' ');
                }
            }

            if origin_row {
                buf.extend(std::iter::repeat_n('_', cfg.width.saturating_sub(points.len())));
                let _ = write!(buf, "X ({})", series.len().max(cfg.width));
                origin_pending = false;
            }
            buf.push('\n');
        }

        push_x_scale(buf, cfg.width, ratio);
        &self.buf
    }

    /// Main render entry.
    pub fn render<W: Write>(
        &mut self,
        cfg: &Config,
        series: &Series,
        out: &mut W,
    ) -> Result<(), GraphError> {
        self.paint(cfg, series);
        out.write_all(self.buf.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
