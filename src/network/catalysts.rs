use crate::AssemblyError;
use crate::reaction::ReactionSet;
use crate::symbol::{elements, symbol_len};
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Strategy used to pick a catalyst for a reaction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalystStrategy {
    /// Uniform choice, every catalyst is used at most once (id `0`).
    Random,
    /// Choice weighted by symbol length, every catalyst is used at most once (id `1`).
    Weighted,
    /// Choice weighted by symbol length, catalysts can be reused (id `2`).
    #[default]
    WeightedReuse,
}

impl CatalystStrategy {
    /// The numeric id of this strategy.
    pub fn id(&self) -> u8 {
        match self {
            CatalystStrategy::Random => 0,
            CatalystStrategy::Weighted => 1,
            CatalystStrategy::WeightedReuse => 2,
        }
    }

    fn allows_reuse(&self) -> bool {
        matches!(self, CatalystStrategy::WeightedReuse)
    }
}

impl TryFrom<u8> for CatalystStrategy {
    type Error = AssemblyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CatalystStrategy::Random),
            1 => Ok(CatalystStrategy::Weighted),
            2 => Ok(CatalystStrategy::WeightedReuse),
            other => Err(AssemblyError::UnknownStrategy(other.to_string())),
        }
    }
}

impl FromStr for CatalystStrategy {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "random" => Ok(CatalystStrategy::Random),
            "1" | "weighted" => Ok(CatalystStrategy::Weighted),
            "2" | "weighted-reuse" => Ok(CatalystStrategy::WeightedReuse),
            other => Err(AssemblyError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for CatalystStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Every symbol that may act as a catalyst in `network`: the atomic elements of the final
/// product together with every distinct product of the set.
///
/// The pool is computed once for the whole set and returned in sorted order.
pub fn catalyst_pool(network: &ReactionSet) -> Vec<String> {
    let mut pool = elements(network.final_product());
    pool.extend(network.iter().map(|r| r.product.clone()));
    pool.into_iter().collect()
}

/// Selection weight of every symbol in `pool`: `len / max_len`, normalised to sum to `1`.
pub fn catalyst_weights(pool: &[String]) -> BTreeMap<String, f64> {
    let max_len = pool.iter().map(|s| symbol_len(s)).max().unwrap_or(0);
    if max_len == 0 {
        return BTreeMap::new();
    }

    let raw: Vec<f64> = pool
        .iter()
        .map(|s| symbol_len(s) as f64 / max_len as f64)
        .collect();
    let total: f64 = raw.iter().sum();
    pool.iter()
        .cloned()
        .zip(raw.into_iter().map(|w| w / total))
        .collect()
}

/// Assign a catalyst (or none) to every reaction of `network`.
///
/// Each reaction independently draws a uniform value in `[0, 1)`. Only when it is below
/// `probability` is a catalyst picked from the pool, excluding both constituents of the
/// reaction (and, unless the strategy allows reuse, every catalyst picked before).
/// If nothing is eligible, the reaction stays uncatalysed.
pub fn assign_catalysts<R: Rng + ?Sized>(
    network: &mut ReactionSet,
    probability: f64,
    strategy: CatalystStrategy,
    rng: &mut R,
) {
    let pool = catalyst_pool(network);
    let weights = catalyst_weights(&pool);
    let mut used: BTreeSet<String> = BTreeSet::new();

    for reaction in network.reactions_mut() {
        reaction.catalyst = None;
        if rng.gen_range(0.0..1.0) >= probability {
            continue;
        }

        let eligible: Vec<&String> = pool
            .iter()
            .filter(|c| **c != reaction.constituent_1 && **c != reaction.constituent_2)
            .filter(|c| strategy.allows_reuse() || !used.contains(*c))
            .collect();

        let chosen = match strategy {
            CatalystStrategy::Random => eligible.choose(rng),
            CatalystStrategy::Weighted | CatalystStrategy::WeightedReuse => eligible
                .choose_weighted(rng, |c| weights.get(*c).copied().unwrap_or(0.0))
                .ok(),
        };

        match chosen {
            Some(catalyst) => {
                trace!(
                    "Reaction #{} ({} + {} -> {}) catalysed by `{}` ({} eligible).",
                    reaction.id,
                    reaction.constituent_1,
                    reaction.constituent_2,
                    reaction.product,
                    catalyst,
                    eligible.len()
                );
                if !strategy.allows_reuse() {
                    used.insert((*catalyst).clone());
                }
                reaction.catalyst = Some((*catalyst).clone());
            }
            None => {
                trace!("Reaction #{} has no eligible catalyst left.", reaction.id);
            }
        }
    }

    debug!(
        "Assigned catalysts with strategy {} (p={}); pool size={}, used={}.",
        strategy,
        probability,
        pool.len(),
        used.len()
    );
}
