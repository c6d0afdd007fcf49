//! Squeeze a series into at most `width` display columns.
//!
//! Column `i` of `n` source values drawn into `w` columns covers source
//! indices `i * n / w .. (i + 1) * n / w`.  Bounds come from integer
//! arithmetic, so the output is exactly `w` columns long whenever `n > w`
//! and identical on every platform.
//! * `Compression::Average` - mean of the column's samples
//! * `Compression::Select`  - first sample of the column

use log::debug;

use crate::core::config::Compression;

/// Display-ready points plus how many source values each column stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    pub points: Vec<f32>,
    pub ratio: f32,
}

#[inline]
fn window(i: usize, n: usize, w: usize) -> (usize, usize) {
    (i * n / w, (i + 1) * n / w)
}

#[inline]
fn mean(slice: &[f32]) -> f32 {
    slice.iter().sum::<f32>() / slice.len() as f32
}

#[must_use]
pub fn downsample(values: &[f32], width: usize, mode: Compression) -> Sampled {
    let n = values.len();
    let w = width.max(1);

    if n <= w {
        return Sampled {
            points: values.to_vec(),
            ratio: 1.0,
        };
    }

    let ratio = n as f32 / w as f32;
    debug!("compressing {n} values into {w} columns ({mode}, ratio {ratio})");

    let points = (0..w)
        .map(|i| {
            let (start, end) = window(i, n, w);
            match mode {
                Compression::Average => mean(&values[start..end]),
                Compression::Select => values[start],
            }
        })
        .collect();

    Sampled { points, ratio }
}
