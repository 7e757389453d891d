use crate::network::{NetworkConfig, build_network};
use crate::reaction::ReactionSet;
use crate::statistics::Amplification;
use crate::subnetwork::extract_subnetworks;
use cancel_this::Cancellable;
use log::debug;
use rand::Rng;

/// The numeric result of analysing one generated network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialOutcome {
    /// Greatest reaction layer plus one.
    pub max_depth: usize,
    /// Number of extracted subnetworks (intermediate products).
    pub subnetwork_count: usize,
    /// Number of extracted subnetworks that are autocatalytic.
    pub autocatalytic_subnetwork_count: usize,
    /// Whether the whole reaction set is autocatalytic.
    pub whole_set_autocatalytic: bool,
}

impl TrialOutcome {
    /// `1 + whole_set_autocatalytic + autocatalytic_subnetwork_count`.
    pub fn multiplier(&self) -> usize {
        1 + usize::from(self.whole_set_autocatalytic) + self.autocatalytic_subnetwork_count
    }

    /// How many copies of `max_depth` this trial contributes to the assembly-index list.
    pub fn contribution_count(&self, amplification: Amplification) -> usize {
        amplification.repetitions(self.multiplier())
    }
}

/// Extract the subnetworks of `network` and measure its depth and autocatalysis.
pub fn analyze_network(network: &ReactionSet) -> Cancellable<TrialOutcome> {
    let subnetworks = extract_subnetworks(network)?;
    let autocatalytic_subnetwork_count = subnetworks
        .values()
        .filter(|subnetwork| subnetwork.is_autocatalytic())
        .count();

    Ok(TrialOutcome {
        max_depth: network.max_depth(),
        subnetwork_count: subnetworks.len(),
        autocatalytic_subnetwork_count,
        whole_set_autocatalytic: network.is_autocatalytic(),
    })
}

/// Generate one network for `config` and analyse it.
pub fn run_trial<R: Rng + ?Sized>(
    config: &NetworkConfig,
    rng: &mut R,
) -> Cancellable<TrialOutcome> {
    let network = build_network(config, rng);
    let outcome = analyze_network(&network)?;
    debug!(
        "Trial outcome: depth={}, subnetworks={}, autocatalytic={}, whole set autocatalytic={}.",
        outcome.max_depth,
        outcome.subnetwork_count,
        outcome.autocatalytic_subnetwork_count,
        outcome.whole_set_autocatalytic
    );
    Ok(outcome)
}
