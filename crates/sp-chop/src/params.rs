//! Typed strategy parameters
//!
//! The external configuration surface hands the engine a raw JSON mapping
//! (`chopparams`). Binding deserializes it into [`ChopParams`] — a safe,
//! structured parse. Unknown keys are rejected at bind time.

use ndarray::ArrayView3;
use serde::{Deserialize, Serialize};

use crate::error::{ChopError, ChopResult};
use crate::strategy::StrategyKind;

/// Window advance for the sliding strategies
///
/// A scalar applies to both axes; a pair is `[time_step, freq_step]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Same advance on the time and frequency axes
    Every(usize),
    /// Separate `[time_step, freq_step]` advances
    PerAxis(usize, usize),
}

impl Step {
    /// Advance along the time axis
    pub fn time(self) -> usize {
        match self {
            Step::Every(s) => s,
            Step::PerAxis(t, _) => t,
        }
    }

    /// Advance along the frequency axis
    pub fn freq(self) -> usize {
        match self {
            Step::Every(s) => s,
            Step::PerAxis(_, f) => f,
        }
    }
}

/// Per-patch statistic used by the filtered strategies
///
/// Not a strategy: these names never appear in the registry listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMetric {
    /// Average of all patch values
    #[default]
    Mean,
    /// Largest patch value
    Maximum,
}

impl FilterMetric {
    /// Evaluate the statistic over one patch
    pub fn measure(self, patch: ArrayView3<'_, f32>) -> f32 {
        match self {
            FilterMetric::Mean => patch.sum() / patch.len() as f32,
            FilterMetric::Maximum => patch.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        }
    }
}

/// Bound strategy parameters
///
/// Which fields matter depends on the strategy; fields a strategy does not
/// read are accepted and ignored, but keys outside this set fail the bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChopParams {
    /// Patch edge length in matrix cells
    pub scale: usize,

    /// Window advance (sliding family only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,

    /// Number of draws (random family only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slices: Option<usize>,

    /// Energy statistic for the filtered family
    #[serde(default)]
    pub filter: FilterMetric,

    /// Restrict to the lower half of the frequency axis
    #[serde(default)]
    pub upper: bool,
}

impl ChopParams {
    /// Check that the parameters are usable by `kind`
    ///
    /// Catches zero scale/step (which would make the window grids
    /// degenerate) and strategy-required fields that are absent, so a bad
    /// configuration fails at bind time rather than mid-extraction.
    pub fn validate_for(&self, kind: StrategyKind) -> ChopResult<()> {
        if self.scale == 0 {
            return Err(ChopError::InvalidParams {
                reason: "scale must be at least 1".into(),
            });
        }

        if let Some(step) = self.step {
            if step.time() == 0 || step.freq() == 0 {
                return Err(ChopError::InvalidParams {
                    reason: "step components must be at least 1".into(),
                });
            }
        }

        match kind {
            StrategyKind::Sliding | StrategyKind::SlidingFull if self.step.is_none() => {
                Err(ChopError::MissingParam {
                    strategy: kind.name(),
                    param: "step",
                })
            }
            StrategyKind::Random | StrategyKind::RandomFull if self.slices.is_none() => {
                Err(ChopError::MissingParam {
                    strategy: kind.name(),
                    param: "slices",
                })
            }
            _ => Ok(()),
        }
    }
}
