use crate::reaction::ReactionSet;
use crate::subnetwork::{ClosureConfig, ClosureState, Subnetwork, SubnetworkClosure};
use computation_process::Incomplete::Suspended;
use computation_process::{Algorithm, Completable, GeneratorStep};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Internal state of the subnetwork extraction.
///
/// Tracks symbols whose closure is still pending and symbols that were already processed,
/// so that every reachable symbol is visited exactly once.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionState {
    final_product: String,
    to_process: Vec<String>,
    processed: BTreeSet<String>,
}

impl From<&ReactionSet> for ExtractionState {
    fn from(value: &ReactionSet) -> Self {
        ExtractionState::from(value.final_product())
    }
}

impl From<&str> for ExtractionState {
    fn from(value: &str) -> Self {
        ExtractionState {
            final_product: value.to_string(),
            to_process: vec![value.to_string()],
            processed: BTreeSet::new(),
        }
    }
}

/// Step implementation of the subnetwork extraction.
///
/// Each step takes one pending symbol, computes its closure and enqueues every constituent
/// of that closure which was not processed yet. Non-empty closures of symbols other than
/// the final product are reported.
pub struct ExtractionStep;

impl GeneratorStep<ClosureConfig, ExtractionState, Subnetwork> for ExtractionStep {
    fn step(
        context: &ClosureConfig,
        state: &mut ExtractionState,
    ) -> Completable<Option<Subnetwork>> {
        let Some(symbol) = state.to_process.pop() else {
            // If there is nothing to process, we are done.
            return Ok(None);
        };

        if !state.processed.insert(symbol.clone()) {
            return Err(Suspended);
        }

        let subnetwork =
            SubnetworkClosure::run(context.clone(), ClosureState::from(symbol.as_str()))?;
        if subnetwork.is_empty() {
            trace!("Symbol `{symbol}` is an element; nothing to extract.");
            return Err(Suspended);
        }

        // Pushed in reverse, so that constituents are processed in sorted order.
        let pending: Vec<String> = subnetwork
            .constituents()
            .into_iter()
            .filter(|c| !state.processed.contains(*c))
            .map(String::from)
            .collect();
        debug!(
            "Extracted closure of `{}` ({} reactions); {} symbols enqueued, {} remaining.",
            symbol,
            subnetwork.len(),
            pending.len(),
            state.to_process.len()
        );
        state.to_process.extend(pending.into_iter().rev());

        if symbol == state.final_product {
            // The whole network is not one of its own subnetworks.
            Err(Suspended)
        } else {
            Ok(Some(subnetwork))
        }
    }
}
