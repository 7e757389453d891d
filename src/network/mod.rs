//! Generation of random reaction networks.
//!
//! A network is generated in two passes:
//!
//! - [`build_reactions`] recursively splits the final product at a uniformly random
//!   position into a binary tree of reactions. Child reactions are recorded before their
//!   parent and the root reaction has layer `0`.
//! - [`assign_catalysts`] then walks the finished table and assigns a catalyst (or none)
//!   to every reaction according to a [`CatalystStrategy`].
//!
//! [`build_network`] runs both passes for a validated [`NetworkConfig`]. All stochastic
//! functions take an explicit random source, so a seeded generator reproduces the same
//! network exactly.
//!
//! # Example
//!
//! ```
//! use autocatalytic_assembly::network::{CatalystStrategy, NetworkConfig, build_network};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = NetworkConfig::new("ABCDEFGH", 0.75, CatalystStrategy::WeightedReuse).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let network = build_network(&config, &mut rng);
//! assert_eq!(network.len(), 7);
//! ```

mod catalysts;
mod network_config;
mod tree_builder;

#[cfg(test)]
mod tests;

pub use catalysts::{CatalystStrategy, assign_catalysts, catalyst_pool, catalyst_weights};
pub use network_config::NetworkConfig;
pub use tree_builder::{build_reactions, random_split};

use crate::log_reactions;
use crate::reaction::ReactionSet;
use log::debug;
use rand::Rng;

/// Build the reaction tree of `config.final_product` and assign its catalysts.
pub fn build_network<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> ReactionSet {
    let mut network = build_reactions(&config.final_product, rng);
    assign_catalysts(
        &mut network,
        config.catalyst_probability,
        config.strategy,
        rng,
    );
    debug!(
        "Generated network for `{}` ({}).",
        config.final_product,
        log_reactions(network.reactions())
    );
    network
}
