//! # StemPrep Patch-Extraction Engine
//!
//! Slices paired time-frequency matrices into fixed-size, spatially
//! aligned patches for separation-model training and inference:
//! - Grid tiling and full-band striping (`tile`, `full`)
//! - Overlapping windows (`sliding`, `sliding_full`)
//! - Vocal-energy-gated selection (`filtered`, `filtered_full`)
//! - Uniform random sampling (`random`, `random_full`)
//! - Sequential inference cover (`infer`)
//!
//! Matrices are `[freq_bins, time_frames, channels]` arrays; the mashup
//! (mix) and vocal (target) matrices of a pair always share one shape, and
//! every dual strategy extracts both patches of a pair from identical
//! coordinates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sp_chop::{ChopConfig, Chopper};
//!
//! let config = ChopConfig::new("filtered", params); // from chopname/chopparams
//! let chopper = Chopper::from_config(&config)?;
//! let (mashup_patches, vocal_patches) = chopper.chop_pair(mashup.view(), vocal.view())?;
//! let cache_key = config.fingerprint();
//! ```
//!
//! The engine is a pure computational leaf: no I/O, no shared mutable
//! state, safe to invoke concurrently on independent matrix pairs. The
//! random strategies accept a caller-supplied RNG for isolated streams.

mod chopper;
mod config;
mod error;
mod params;
mod strategy;

pub mod filtered;
pub mod grid;
pub mod random;

pub use chopper::Chopper;
pub use config::ChopConfig;
pub use error::{ChopError, ChopResult};
pub use params::{ChopParams, FilterMetric, Step};
pub use strategy::{Arity, StrategyKind};

/// A time-frequency matrix: `[freq_bins, time_frames, channels]`
pub type Matrix = ndarray::Array3<f32>;

/// A contiguous sub-block of a [`Matrix`], full channel depth
pub type Patch = ndarray::Array3<f32>;
