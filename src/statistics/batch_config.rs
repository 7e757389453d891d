use crate::AssemblyError;
use crate::network::{CatalystStrategy, NetworkConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;

/// How autocatalysis amplifies the contribution of one trial to the assembly-index list.
///
/// With multiplier `m = 1 + whole_set_autocatalytic + autocatalytic_subnetwork_count`,
/// the trial's depth is repeated once (`None`), `m` times (`Linear`) or `m²` times (`Square`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Amplification {
    #[default]
    None,
    Linear,
    Square,
}

impl Amplification {
    /// Number of copies of the trial depth for the given multiplier.
    pub fn repetitions(&self, multiplier: usize) -> usize {
        match self {
            Amplification::None => 1,
            Amplification::Linear => multiplier,
            Amplification::Square => multiplier * multiplier,
        }
    }
}

impl FromStr for Amplification {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "false" => Ok(Amplification::None),
            "linear" | "true" => Ok(Amplification::Linear),
            "square" => Ok(Amplification::Square),
            _ => Err(AssemblyError::UnknownAmplification(s.to_string())),
        }
    }
}

impl fmt::Display for Amplification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Amplification::None => "none",
            Amplification::Linear => "linear",
            Amplification::Square => "square",
        };
        write!(f, "{name}")
    }
}

/// A configuration object for a batch of independent trials.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// The network generated in every trial.
    pub network: NetworkConfig,
    /// Number of independent trials.
    pub trials: usize,
    /// How autocatalysis amplifies each trial's contribution (default: none).
    pub amplification: Amplification,
    /// Base seed; trial `i` is seeded with `seed + i` (wrapping).
    pub seed: u64,
}

impl From<NetworkConfig> for BatchConfig {
    fn from(value: NetworkConfig) -> Self {
        BatchConfig::new(value, 1)
    }
}

impl BatchConfig {
    /// Create a new [`BatchConfig`] with a random base seed and no amplification.
    pub fn new(network: NetworkConfig, trials: usize) -> BatchConfig {
        BatchConfig {
            network,
            trials,
            amplification: Amplification::None,
            seed: rand::random(),
        }
    }

    /// Build a configuration from raw user input, validating everything before any trial
    /// runs.
    pub fn parse(
        final_product: &str,
        trials: usize,
        catalyst_probability: f64,
        strategy: &str,
        amplification: &str,
    ) -> Result<BatchConfig, AssemblyError> {
        let strategy = CatalystStrategy::from_str(strategy)?;
        let amplification = Amplification::from_str(amplification)?;
        let network = NetworkConfig::new(final_product, catalyst_probability, strategy)?;
        let config = BatchConfig::new(network, trials);
        Ok(config.with_amplification(amplification))
    }

    pub fn with_amplification(mut self, amplification: Amplification) -> BatchConfig {
        self.amplification = amplification;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> BatchConfig {
        self.seed = seed;
        self
    }

    /// The independent random source of trial `index`.
    pub fn trial_rng(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(index as u64))
    }
}
