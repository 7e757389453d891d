//! Random autocatalytic reaction networks and their assembly statistics.
//!
//! A target symbol (the *final product*) is recursively split into a binary tree of
//! reactions ([`network`]), catalysts are assigned to the reactions, the closure of every
//! intermediate product is recovered ([`subnetwork`]), and each (sub)network is tested for
//! autocatalysis ([`autocatalysis`]). The [`statistics`] module repeats this many times
//! and aggregates the resulting assembly indices.
//!
//! ```no_run
//! use autocatalytic_assembly::network::{CatalystStrategy, NetworkConfig};
//! use autocatalytic_assembly::statistics::{Amplification, AssemblySummary, BatchConfig, run_batch};
//!
//! let network = NetworkConfig::new("ABCDEFGH", 0.75, CatalystStrategy::WeightedReuse).unwrap();
//! let config = BatchConfig::new(network, 1000)
//!     .with_amplification(Amplification::Linear)
//!     .with_seed(42);
//! let result = run_batch(&config).unwrap();
//! println!("{}", AssemblySummary::from_result(&result));
//! ```

use crate::reaction::{Reaction, max_layer};

#[cfg(test)]
mod test_utils;

pub mod autocatalysis;
pub mod error;
pub mod network;
pub mod reaction;
pub mod statistics;
pub mod subnetwork;
pub mod symbol;

pub use error::AssemblyError;

/// A utility method for printing useful metadata of reaction tables.
fn log_reactions(reactions: &[Reaction]) -> String {
    let catalysed = reactions.iter().filter(|r| r.catalyst.is_some()).count();
    format!(
        "reactions={}; catalysed={}; max layer={}",
        reactions.len(),
        catalysed,
        max_layer(reactions)
    )
}
