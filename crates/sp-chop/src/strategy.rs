//! Strategy registry
//!
//! Explicit name → variant mapping, built into the type system rather than
//! resolved by reflection: unknown names fail at configuration time, and
//! each variant carries its calling convention as data.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChopError, ChopResult};

/// Calling convention of a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Operates on one matrix at a time
    Single,
    /// Operates jointly on the (mashup, vocal) pair
    Dual,
}

/// The slicing strategies exposed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Non-overlapping `scale × scale` grid
    Tile,
    /// Full-band strips of width `scale`
    Full,
    /// Overlapping `scale × scale` windows
    Sliding,
    /// Full-band strips with overlapping time steps
    SlidingFull,
    /// Sequential full-band cover for inference
    Infer,
    /// Tile grid gated by vocal energy
    Filtered,
    /// Full-band strips gated by vocal energy
    FilteredFull,
    /// Uniform random `scale × scale` draws
    Random,
    /// Uniform random full-band strip draws
    RandomFull,
}

impl StrategyKind {
    /// Every registered strategy, in listing order
    pub const ALL: [StrategyKind; 9] = [
        StrategyKind::Tile,
        StrategyKind::Full,
        StrategyKind::Sliding,
        StrategyKind::SlidingFull,
        StrategyKind::Infer,
        StrategyKind::Filtered,
        StrategyKind::FilteredFull,
        StrategyKind::Random,
        StrategyKind::RandomFull,
    ];

    /// Registry name of this strategy
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Tile => "tile",
            StrategyKind::Full => "full",
            StrategyKind::Sliding => "sliding",
            StrategyKind::SlidingFull => "sliding_full",
            StrategyKind::Infer => "infer",
            StrategyKind::Filtered => "filtered",
            StrategyKind::FilteredFull => "filtered_full",
            StrategyKind::Random => "random",
            StrategyKind::RandomFull => "random_full",
        }
    }

    /// Calling convention of this strategy
    pub fn arity(self) -> Arity {
        match self {
            StrategyKind::Tile
            | StrategyKind::Full
            | StrategyKind::Sliding
            | StrategyKind::SlidingFull
            | StrategyKind::Infer => Arity::Single,
            StrategyKind::Filtered
            | StrategyKind::FilteredFull
            | StrategyKind::Random
            | StrategyKind::RandomFull => Arity::Dual,
        }
    }

    /// Resolve a registry name, failing fast on unknown strategies
    pub fn from_name(name: &str) -> ChopResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ChopError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    /// Names of every registered strategy
    ///
    /// External tooling enumerates this to validate configuration values.
    /// Energy metrics (`mean`, `maximum`) are parameters, not strategies,
    /// and are not listed here.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ChopError;

    fn from_str(s: &str) -> ChopResult<Self> {
        Self::from_name(s)
    }
}
