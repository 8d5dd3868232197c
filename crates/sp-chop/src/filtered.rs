//! Energy-filtered dual-matrix strategies
//!
//! A crude voice-activity gate over the training grid: patches whose vocal
//! energy sits at or below the matrix-wide average are dropped, so the
//! training set skews toward windows that actually contain the target
//! signal.

use ndarray::{ArrayView3, s};

use crate::Patch;
use crate::grid::{self, band_limit, full_band};
use crate::params::FilterMetric;

/// Matrix-wide reference: mean over every non-overlapping tile of `vocal`
///
/// `None` when the matrix is too small to produce a single tile.
fn tile_baseline(vocal: ArrayView3<'_, f32>, scale: usize, upper: bool) -> Option<f32> {
    let baseline = grid::tile(vocal, scale, upper);
    if baseline.is_empty() {
        return None;
    }

    let total: f32 = baseline.iter().map(|patch| patch.sum()).sum();
    let cells = baseline.len() * baseline[0].len();
    Some(total / cells as f32)
}

/// Tile grid gated by vocal energy
///
/// Enumerates the same grid as `tile` and keeps an aligned (mashup, vocal)
/// pair only when `metric` over the vocal patch strictly exceeds the
/// tile baseline. Returns `(mashup_patches, vocal_patches)`, index-aligned.
pub fn filtered(
    mashup: ArrayView3<'_, f32>,
    vocal: ArrayView3<'_, f32>,
    scale: usize,
    upper: bool,
    metric: FilterMetric,
) -> (Vec<Patch>, Vec<Patch>) {
    let Some(threshold) = tile_baseline(vocal, scale, upper) else {
        return (Vec::new(), Vec::new());
    };

    let (freq_bins, time_frames, _) = vocal.dim();
    let limit = band_limit(freq_bins, upper);

    let mut mashup_patches = Vec::new();
    let mut vocal_patches = Vec::new();
    for t in 0..time_frames / scale {
        for f in 0..limit / scale {
            let window = s![
                f * scale..(f + 1) * scale,
                t * scale..(t + 1) * scale,
                ..
            ];
            let vocal_patch = vocal.slice(window);

            if metric.measure(vocal_patch) > threshold {
                mashup_patches.push(mashup.slice(window).to_owned());
                vocal_patches.push(vocal_patch.to_owned());
            }
        }
    }
    (mashup_patches, vocal_patches)
}

/// Full-band strips gated by vocal energy
///
/// Enumerates the `full` strip scheme, but the threshold is still the
/// tile-grid baseline of the vocal matrix, the same reference `filtered`
/// uses. Both filtered strategies share one baseline so their gates agree
/// on a given vocal matrix.
pub fn filtered_full(
    mashup: ArrayView3<'_, f32>,
    vocal: ArrayView3<'_, f32>,
    scale: usize,
    upper: bool,
    metric: FilterMetric,
) -> (Vec<Patch>, Vec<Patch>) {
    let Some(threshold) = tile_baseline(vocal, scale, upper) else {
        return (Vec::new(), Vec::new());
    };

    let (freq_bins, time_frames, _) = vocal.dim();
    let (row_lo, row_hi) = full_band(freq_bins, upper);

    let mut mashup_patches = Vec::new();
    let mut vocal_patches = Vec::new();
    for t in 0..time_frames / scale {
        let window = s![row_lo..row_hi, t * scale..(t + 1) * scale, ..];
        let vocal_patch = vocal.slice(window);

        if metric.measure(vocal_patch) > threshold {
            mashup_patches.push(mashup.slice(window).to_owned());
            vocal_patches.push(vocal_patch.to_owned());
        }
    }
    (mashup_patches, vocal_patches)
}
