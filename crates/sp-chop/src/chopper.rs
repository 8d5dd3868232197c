//! The bound strategy engine
//!
//! A [`Chopper`] is a strategy resolved from a [`ChopConfig`] with its
//! parameters validated up front: configuration mistakes (unknown name,
//! unknown or missing parameter) surface at bind time, never
//! mid-extraction. The bound engine is immutable and cheap to share.

use log::{debug, trace};
use ndarray::ArrayView3;
use rand::Rng;

use crate::Patch;
use crate::config::ChopConfig;
use crate::error::{ChopError, ChopResult};
use crate::params::ChopParams;
use crate::strategy::{Arity, StrategyKind};
use crate::{filtered, grid, random};

/// A strategy bound to validated parameters
#[derive(Debug, Clone)]
pub struct Chopper {
    kind: StrategyKind,
    params: ChopParams,
}

impl Chopper {
    /// Bind a strategy to already-validated typed parameters
    pub fn new(kind: StrategyKind, params: ChopParams) -> ChopResult<Self> {
        params.validate_for(kind)?;
        debug!(
            "bound strategy {} (scale={}, upper={})",
            kind, params.scale, params.upper
        );
        Ok(Self { kind, params })
    }

    /// Resolve and bind a raw `(name, params)` configuration
    pub fn from_config(config: &ChopConfig) -> ChopResult<Self> {
        let kind = StrategyKind::from_name(&config.name)?;
        let params: ChopParams =
            serde_json::from_value(serde_json::Value::Object(config.params.clone())).map_err(
                |err| ChopError::InvalidParams {
                    reason: err.to_string(),
                },
            )?;
        Self::new(kind, params)
    }

    /// The bound strategy
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// The bound parameters
    pub fn params(&self) -> &ChopParams {
        &self.params
    }

    fn step(&self) -> ChopResult<crate::params::Step> {
        self.params.step.ok_or(ChopError::MissingParam {
            strategy: self.kind.name(),
            param: "step",
        })
    }

    fn slices(&self) -> ChopResult<usize> {
        self.params.slices.ok_or(ChopError::MissingParam {
            strategy: self.kind.name(),
            param: "slices",
        })
    }

    /// Apply a single-matrix strategy
    ///
    /// Dual-only strategies refuse: they need the pair to operate.
    pub fn chop(&self, matrix: ArrayView3<'_, f32>) -> ChopResult<Vec<Patch>> {
        let p = &self.params;
        let patches = match self.kind {
            StrategyKind::Tile => grid::tile(matrix, p.scale, p.upper),
            StrategyKind::Full => grid::full(matrix, p.scale, p.upper),
            StrategyKind::Sliding => grid::sliding(matrix, p.scale, self.step()?, p.upper),
            StrategyKind::SlidingFull => {
                grid::sliding_full(matrix, p.scale, self.step()?, p.upper)
            }
            StrategyKind::Infer => grid::infer(matrix, p.scale),
            dual => {
                return Err(ChopError::RequiresPair {
                    strategy: dual.name(),
                });
            }
        };

        trace!("{}: {} patches from {:?}", self.kind, patches.len(), matrix.dim());
        Ok(patches)
    }

    /// Apply the strategy to an aligned (mashup, vocal) pair
    ///
    /// Random strategies draw from the process-wide RNG; use
    /// [`Chopper::chop_pair_with_rng`] for an isolated stream.
    pub fn chop_pair(
        &self,
        mashup: ArrayView3<'_, f32>,
        vocal: ArrayView3<'_, f32>,
    ) -> ChopResult<(Vec<Patch>, Vec<Patch>)> {
        self.chop_pair_with_rng(mashup, vocal, &mut rand::rng())
    }

    /// Apply the strategy to an aligned pair with a caller-supplied RNG
    ///
    /// Dual strategies run jointly; single-matrix strategies are applied
    /// independently to each input, producing two parallel sequences.
    pub fn chop_pair_with_rng<R: Rng + ?Sized>(
        &self,
        mashup: ArrayView3<'_, f32>,
        vocal: ArrayView3<'_, f32>,
        rng: &mut R,
    ) -> ChopResult<(Vec<Patch>, Vec<Patch>)> {
        if mashup.dim() != vocal.dim() {
            return Err(ChopError::ShapeMismatch {
                mashup: mashup.dim(),
                vocal: vocal.dim(),
            });
        }

        let p = &self.params;
        let (mashup_patches, vocal_patches) = match self.kind {
            StrategyKind::Filtered => {
                filtered::filtered(mashup, vocal, p.scale, p.upper, p.filter)
            }
            StrategyKind::FilteredFull => {
                filtered::filtered_full(mashup, vocal, p.scale, p.upper, p.filter)
            }
            StrategyKind::Random => {
                random::random(mashup, vocal, p.scale, self.slices()?, p.upper, rng)?
            }
            StrategyKind::RandomFull => {
                random::random_full(mashup, vocal, p.scale, self.slices()?, p.upper, rng)?
            }
            _ => {
                debug_assert_eq!(self.kind.arity(), Arity::Single);
                (self.chop(mashup)?, self.chop(vocal)?)
            }
        };

        trace!(
            "{}: {} pairs from {:?}",
            self.kind,
            vocal_patches.len(),
            vocal.dim()
        );
        Ok((mashup_patches, vocal_patches))
    }
}
