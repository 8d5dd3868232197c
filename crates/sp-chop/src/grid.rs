//! Deterministic single-matrix strategies
//!
//! Grid tiling, full-band striping, sliding windows, and the sequential
//! inference cover. All of them enumerate windows time-major, drop
//! remainders that do not fill a window (no padding), and return an empty
//! sequence — never an error — when the matrix is too small.

use ndarray::{ArrayView3, s};

use crate::Patch;
use crate::params::Step;

/// Usable frequency extent: lower half of the bins when `upper` is set
pub(crate) fn band_limit(freq_bins: usize, upper: bool) -> usize {
    if upper { freq_bins / 2 } else { freq_bins }
}

/// Row range for the full-band strategies
///
/// `upper` keeps bins `[0, F/2)`. Otherwise bins `[1, F)`: bin 0 (the DC
/// row) is dropped. `tile` has no such exclusion; downstream training data
/// depends on the asymmetry, so it stays.
pub(crate) fn full_band(freq_bins: usize, upper: bool) -> (usize, usize) {
    if upper {
        (0, freq_bins / 2)
    } else {
        (1.min(freq_bins), freq_bins)
    }
}

/// Partition into a non-overlapping grid of `scale × scale` patches
///
/// Iterates time index `0..T/scale`, and within each time step every
/// frequency index `0..limit/scale` in ascending order.
pub fn tile(matrix: ArrayView3<'_, f32>, scale: usize, upper: bool) -> Vec<Patch> {
    let (freq_bins, time_frames, _) = matrix.dim();
    let limit = band_limit(freq_bins, upper);

    let mut patches = Vec::with_capacity((time_frames / scale) * (limit / scale));
    for t in 0..time_frames / scale {
        for f in 0..limit / scale {
            let patch = matrix.slice(s![
                f * scale..(f + 1) * scale,
                t * scale..(t + 1) * scale,
                ..
            ]);
            patches.push(patch.to_owned());
        }
    }
    patches
}

/// One full-band strip of width `scale` per time step
pub fn full(matrix: ArrayView3<'_, f32>, scale: usize, upper: bool) -> Vec<Patch> {
    let (freq_bins, time_frames, _) = matrix.dim();
    let (row_lo, row_hi) = full_band(freq_bins, upper);

    (0..time_frames / scale)
        .map(|t| {
            matrix
                .slice(s![row_lo..row_hi, t * scale..(t + 1) * scale, ..])
                .to_owned()
        })
        .collect()
}

/// Overlapping `scale × scale` windows
///
/// Window starts are multiples of the per-axis advance. A matrix whose
/// usable extent does not exceed `scale` on either axis yields no windows.
pub fn sliding(matrix: ArrayView3<'_, f32>, scale: usize, step: Step, upper: bool) -> Vec<Patch> {
    let (freq_bins, time_frames, _) = matrix.dim();
    let limit = band_limit(freq_bins, upper);
    let (time_step, freq_step) = (step.time(), step.freq());

    let time_count = time_frames.saturating_sub(scale) / time_step;
    let freq_count = limit.saturating_sub(scale) / freq_step;

    let mut patches = Vec::with_capacity(time_count * freq_count);
    for t in 0..time_count {
        for f in 0..freq_count {
            let patch = matrix.slice(s![
                f * freq_step..f * freq_step + scale,
                t * time_step..t * time_step + scale,
                ..
            ]);
            patches.push(patch.to_owned());
        }
    }
    patches
}

/// Full-band strips with overlapping time steps
///
/// Only the time component of `step` is used.
pub fn sliding_full(
    matrix: ArrayView3<'_, f32>,
    scale: usize,
    step: Step,
    upper: bool,
) -> Vec<Patch> {
    let (freq_bins, time_frames, _) = matrix.dim();
    let (row_lo, row_hi) = full_band(freq_bins, upper);
    let time_step = step.time();

    (0..time_frames.saturating_sub(scale) / time_step)
        .map(|t| {
            matrix
                .slice(s![
                    row_lo..row_hi,
                    t * time_step..t * time_step + scale,
                    ..
                ])
                .to_owned()
        })
        .collect()
}

/// Sequential full-band cover for inference
///
/// Emits `T/scale + 1` consecutive strips over the entire frequency axis,
/// clamped to the matrix edge. The trailing strip carries the remainder
/// frames and may be narrower than `scale`, or empty when `scale` divides
/// the frame count.
pub fn infer(matrix: ArrayView3<'_, f32>, scale: usize) -> Vec<Patch> {
    let (_, time_frames, _) = matrix.dim();

    (0..time_frames / scale + 1)
        .map(|t| {
            let start = (t * scale).min(time_frames);
            let end = ((t + 1) * scale).min(time_frames);
            matrix.slice(s![.., start..end, ..]).to_owned()
        })
        .collect()
}
