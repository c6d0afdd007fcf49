//! Geometry helpers: value range + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{HMAX, LABEL_WIDTH, WMAX, X_MARKER_RESERVE};

/// Inclusive `(min, max)` of `values`, `None` when there is nothing to scan.
#[must_use]
pub fn range(values: &[f32]) -> Option<(f32, f32)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(low, high), &v| (low.min(v), high.max(v))),
    )
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Chart width/height that fill the terminal.
///
/// Leaves room for the y labels, the `X (n)` marker, the `Y` header and the
/// two x scale lines.
#[inline]
#[must_use]
pub fn fit_dims((w, h): (Width, Height)) -> (usize, usize) {
    let width = usize::from(w.0)
        .saturating_sub(LABEL_WIDTH + X_MARKER_RESERVE)
        .clamp(1, WMAX - 1);
    let height = usize::from(h.0).saturating_sub(5).clamp(1, HMAX - 1);
    (width, height)
}
