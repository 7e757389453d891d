use crate::log_reactions;
use crate::reaction::Reaction;
use crate::subnetwork::{ClosureConfig, Subnetwork};
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::debug;
use std::collections::BTreeSet;

/// Intermediate state of a backward closure from one target product.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureState {
    pub iteration: usize,
    /// The product whose closure is computed.
    pub target: String,
    /// Accumulated reaction rows (may contain repeated rows until the closure finishes).
    pub reactions: Vec<Reaction>,
    /// Products of all accumulated rows.
    pub products: BTreeSet<String>,
    /// Symbols whose producing reactions are collected in the next iteration.
    pub frontier: BTreeSet<String>,
}

impl From<&str> for ClosureState {
    fn from(value: &str) -> Self {
        ClosureState::from(value.to_string())
    }
}

impl From<String> for ClosureState {
    fn from(value: String) -> Self {
        ClosureState {
            iteration: 0,
            frontier: BTreeSet::from([value.clone()]),
            target: value,
            reactions: Vec::new(),
            products: BTreeSet::new(),
        }
    }
}

/// A [`ComputationStep`] that expands the closure frontier by one layer of producing
/// reactions per step.
///
/// The closure is complete once the new frontier, minus everything already seen as a
/// product, is empty. Atomic elements are never produced, so they end the expansion.
pub struct FrontierExpansion;

impl ComputationStep<ClosureConfig, ClosureState, Subnetwork> for FrontierExpansion {
    fn step(context: &ClosureConfig, state: &mut ClosureState) -> Completable<Subnetwork> {
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Closure of `{}` canceled (exceeded iteration count).",
                state.iteration, state.target
            );

            return Err(Cancelled::new("ClosureConfig::max_iterations").into());
        } else {
            state.iteration += 1;
        }

        let mut next = BTreeSet::new();
        for symbol in &state.frontier {
            is_cancelled!()?;
            for reaction in context.producers_of(symbol) {
                state.reactions.push(reaction.clone());
                state.products.insert(reaction.product.clone());
                next.extend(reaction.constituents().map(String::from));
            }
        }
        next.retain(|symbol| !state.products.contains(symbol));

        if next.is_empty() {
            let mut seen = BTreeSet::new();
            let reactions: Vec<Reaction> = std::mem::take(&mut state.reactions)
                .into_iter()
                .filter(|reaction| seen.insert(reaction.id))
                .collect();

            debug!(
                "[iteration:{}] Closure of `{}` finished with ({}).",
                state.iteration,
                state.target,
                log_reactions(&reactions)
            );

            Ok(Subnetwork::new(state.target.clone(), reactions))
        } else {
            debug!(
                "[iteration:{}] Closure of `{}` expanded to {} rows; frontier={:?}.",
                state.iteration,
                state.target,
                state.reactions.len(),
                next
            );

            state.frontier = next;
            Err(Suspended)
        }
    }
}
