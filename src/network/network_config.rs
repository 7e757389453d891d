use crate::AssemblyError;
use crate::network::CatalystStrategy;
use crate::symbol::canonical;

/// A validated configuration for generating one reaction network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// The symbol the network synthesises, in canonical (sorted) spelling.
    pub final_product: String,
    /// Probability in `[0, 1]` that a reaction attempts to receive a catalyst.
    pub catalyst_probability: f64,
    /// How catalysts are drawn from the candidate pool.
    pub strategy: CatalystStrategy,
}

impl NetworkConfig {
    /// Create a new [`NetworkConfig`], rejecting an empty product and a probability
    /// outside of `[0, 1]`.
    ///
    /// The final product is stored in its canonical spelling, so that the root reaction
    /// satisfies the same `product == canonical(constituent_1 + constituent_2)` rule as
    /// every other reaction.
    pub fn new(
        final_product: &str,
        catalyst_probability: f64,
        strategy: CatalystStrategy,
    ) -> Result<NetworkConfig, AssemblyError> {
        let config = NetworkConfig {
            final_product: canonical(final_product),
            catalyst_probability,
            strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the invariants of [`NetworkConfig::new`]; the fields are public and may
    /// have been modified since.
    pub fn validate(&self) -> Result<(), AssemblyError> {
        if self.final_product.is_empty() {
            return Err(AssemblyError::EmptyProduct);
        }
        if !(0.0..=1.0).contains(&self.catalyst_probability) {
            // `contains` is false for NaN as well.
            return Err(AssemblyError::InvalidProbability(self.catalyst_probability));
        }
        Ok(())
    }
}
