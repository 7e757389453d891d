//! Extraction of subnetworks from a reaction table.
//!
//! The *subnetwork* of a product is the closure of all reactions needed to build it:
//! the reactions producing it, the reactions producing their constituents, and so on
//! until only atomic elements remain.
//!
//! # Algorithms
//!
//! - [`SubnetworkClosure`]: a backward fixed-point computation of one closure. Each step
//!   collects the producers of the current frontier; the computation ends when no new
//!   symbol (one that is not already a collected product) enters the frontier.
//! - [`SubnetworkExtraction`]: a generator that starts at the final product and reports the
//!   closure of every reachable intermediate product exactly once. The final product itself
//!   only seeds the traversal and is never reported.
//!
//! [`extract_subnetworks`] collects the extraction into a [`SubnetworkDict`].

mod closure;
mod closure_config;
mod extraction;


pub use closure::{ClosureState, FrontierExpansion};
pub use closure_config::ClosureConfig;
pub use extraction::{ExtractionState, ExtractionStep};

use crate::AssemblyError;
use crate::autocatalysis::is_autocatalytic;
use crate::reaction::{Reaction, ReactionSet, max_layer, write_reactions_csv, write_table};
use cancel_this::Cancellable;
use computation_process::{Computation, Generator, Stateful};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;

/// Compute the closure of a single product.
pub type SubnetworkClosure =
    Computation<ClosureConfig, ClosureState, Subnetwork, FrontierExpansion>;

/// Enumerate the closures of all intermediate products of a reaction table.
pub type SubnetworkExtraction =
    Generator<ClosureConfig, ExtractionState, Subnetwork, ExtractionStep>;

/// Subnetworks keyed by the intermediate product they build.
pub type SubnetworkDict = BTreeMap<String, Subnetwork>;

/// The reactions needed to build one product, copied out of the full reaction table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subnetwork {
    product: String,
    reactions: Vec<Reaction>,
}

impl Subnetwork {
    pub fn new(product: impl Into<String>, reactions: Vec<Reaction>) -> Subnetwork {
        Subnetwork {
            product: product.into(),
            reactions,
        }
    }

    /// The product this subnetwork builds.
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Distinct constituents used anywhere in this subnetwork.
    pub fn constituents(&self) -> BTreeSet<&str> {
        self.reactions
            .iter()
            .flat_map(|r| r.constituents())
            .collect()
    }

    /// The greatest layer in the subnetwork plus one.
    ///
    /// Layers are inherited from the full table, so this is measured from the root of
    /// the whole network, not from the subnetwork's own product.
    pub fn max_depth(&self) -> usize {
        max_layer(&self.reactions) + 1
    }

    /// Check whether this subnetwork is autocatalytic (requires at least one catalyst).
    pub fn is_autocatalytic(&self) -> bool {
        is_autocatalytic(&self.reactions, true)
    }

    /// Write the subnetwork as CSV with the six reaction columns.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AssemblyError> {
        write_reactions_csv(&self.reactions, writer)
    }
}

impl fmt::Display for Subnetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, &self.reactions)
    }
}

/// Extract the subnetwork of every intermediate product of `network`.
///
/// The returned map never contains the final product itself, and every entry is a
/// non-empty subset of `network`.
pub fn extract_subnetworks(network: &ReactionSet) -> Cancellable<SubnetworkDict> {
    let config = ClosureConfig::from(network);
    let mut result = SubnetworkDict::new();
    for subnetwork in SubnetworkExtraction::configure(config, network) {
        let subnetwork = subnetwork?;
        result
            .entry(subnetwork.product().to_string())
            .or_insert(subnetwork);
    }
    debug!(
        "Extracted {} subnetworks of `{}`.",
        result.len(),
        network.final_product()
    );
    Ok(result)
}
