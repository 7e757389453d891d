//! Monte-Carlo statistics of the assembly index.
//!
//! One *trial* generates a random network for a [`crate::network::NetworkConfig`], extracts
//! its subnetworks and records a [`TrialOutcome`]: the network depth, the number of
//! (autocatalytic) subnetworks and whether the whole reaction set is autocatalytic.
//!
//! A batch of trials is described by a [`BatchConfig`]. Trial `i` draws its randomness
//! from its own generator seeded with `seed + i`, so a batch is reproducible and the
//! sequential [`run_batch`] and parallel [`run_batch_parallel`] drivers agree exactly.
//!
//! Autocatalysis can *amplify* the weight of a trial in the assembly-index list (see
//! [`Amplification`]). The smallest value of that list is the reported assembly index,
//! the rest of [`AssemblySummary`] describes its distribution.

mod batch;
mod batch_config;
mod summary;
mod trial;


pub use batch::{BatchResult, BatchState, TrialStep, run_batch, run_batch_parallel};
pub use batch_config::{Amplification, BatchConfig};
pub use summary::AssemblySummary;
pub use trial::{TrialOutcome, analyze_network, run_trial};

use computation_process::Generator;

/// Lazily run the trials of a batch, one [`TrialOutcome`] per item.
pub type AssemblyBatch = Generator<BatchConfig, BatchState, TrialOutcome, TrialStep>;
