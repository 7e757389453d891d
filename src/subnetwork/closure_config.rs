use crate::reaction::{Reaction, ReactionSet};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A "flat" configuration object for subnetwork closures and extraction.
///
/// The reaction table is shared (`Arc`) so that the configuration can be cheaply cloned
/// into every closure computation of one extraction.
#[derive(Clone, Debug)]
pub struct ClosureConfig {
    /// The full reaction table the closures are computed in.
    pub network: Arc<ReactionSet>,
    /// Cancel the procedure if a single closure exceeds the specified number of
    /// iterations (default: `usize::MAX`).
    ///
    /// One iteration expands the frontier by one layer of producing reactions, so a closure
    /// never needs more iterations than the length of the final product.
    pub max_iterations: usize,
    /// Reaction indices keyed by the product they synthesise.
    producers: Arc<BTreeMap<String, Vec<usize>>>,
}

impl From<ReactionSet> for ClosureConfig {
    fn from(value: ReactionSet) -> Self {
        ClosureConfig::new(Arc::new(value))
    }
}

impl From<&ReactionSet> for ClosureConfig {
    fn from(value: &ReactionSet) -> Self {
        ClosureConfig::new(Arc::new(value.clone()))
    }
}

impl From<Arc<ReactionSet>> for ClosureConfig {
    fn from(value: Arc<ReactionSet>) -> Self {
        ClosureConfig::new(value)
    }
}

impl ClosureConfig {
    /// Create a new instance of [`ClosureConfig`] over the given reaction table.
    pub fn new(network: Arc<ReactionSet>) -> ClosureConfig {
        let mut producers: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, reaction) in network.iter().enumerate() {
            producers
                .entry(reaction.product.clone())
                .or_default()
                .push(index);
        }
        ClosureConfig {
            network,
            max_iterations: usize::MAX,
            producers: Arc::new(producers),
        }
    }

    /// All reactions whose product is `symbol`, in generation order.
    pub fn producers_of<'a>(&'a self, symbol: &str) -> impl Iterator<Item = &'a Reaction> + 'a {
        let reactions = self.network.reactions();
        self.producers
            .get(symbol)
            .into_iter()
            .flatten()
            .map(move |index| &reactions[*index])
    }
}
