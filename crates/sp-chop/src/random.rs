//! Random-sampling dual-matrix strategies
//!
//! Uniform coordinate draws with no deduplication: the same region may be
//! sampled more than once. Callers wanting reproducible or
//! thread-isolated sequences pass their own RNG (the engine defaults to
//! the process-wide one).

use ndarray::{ArrayView3, s};
use rand::Rng;

use crate::Patch;
use crate::error::{ChopError, ChopResult};
use crate::grid::{band_limit, full_band};

/// Usable draw range on one axis, or a `SamplingRange` error
///
/// A draw needs `extent - scale > 0` valid offsets; `extent == scale` has
/// none (offsets are drawn from the half-open `[0, extent - scale)`).
fn draw_span(axis: &'static str, extent: usize, scale: usize) -> ChopResult<usize> {
    let span = extent.saturating_sub(scale);
    if span == 0 {
        return Err(ChopError::SamplingRange {
            axis,
            extent,
            scale,
        });
    }
    Ok(span)
}

/// `slices` uniform random `scale × scale` draws, extracted from both
/// matrices at identical coordinates
///
/// Per draw: time offset first, then frequency offset.
pub fn random<R: Rng + ?Sized>(
    mashup: ArrayView3<'_, f32>,
    vocal: ArrayView3<'_, f32>,
    scale: usize,
    slices: usize,
    upper: bool,
    rng: &mut R,
) -> ChopResult<(Vec<Patch>, Vec<Patch>)> {
    let (freq_bins, time_frames, _) = vocal.dim();
    let limit = band_limit(freq_bins, upper);

    let time_span = draw_span("time", time_frames, scale)?;
    let freq_span = draw_span("frequency", limit, scale)?;

    let mut mashup_patches = Vec::with_capacity(slices);
    let mut vocal_patches = Vec::with_capacity(slices);
    for _ in 0..slices {
        let t0 = rng.random_range(0..time_span);
        let f0 = rng.random_range(0..freq_span);
        let window = s![f0..f0 + scale, t0..t0 + scale, ..];

        vocal_patches.push(vocal.slice(window).to_owned());
        mashup_patches.push(mashup.slice(window).to_owned());
    }
    Ok((mashup_patches, vocal_patches))
}

/// `slices` uniform random full-band strip draws
pub fn random_full<R: Rng + ?Sized>(
    mashup: ArrayView3<'_, f32>,
    vocal: ArrayView3<'_, f32>,
    scale: usize,
    slices: usize,
    upper: bool,
    rng: &mut R,
) -> ChopResult<(Vec<Patch>, Vec<Patch>)> {
    let (freq_bins, time_frames, _) = vocal.dim();
    let (row_lo, row_hi) = full_band(freq_bins, upper);

    let time_span = draw_span("time", time_frames, scale)?;

    let mut mashup_patches = Vec::with_capacity(slices);
    let mut vocal_patches = Vec::with_capacity(slices);
    for _ in 0..slices {
        let t0 = rng.random_range(0..time_span);
        let window = s![row_lo..row_hi, t0..t0 + scale, ..];

        vocal_patches.push(vocal.slice(window).to_owned());
        mashup_patches.push(mashup.slice(window).to_owned());
    }
    Ok((mashup_patches, vocal_patches))
}
