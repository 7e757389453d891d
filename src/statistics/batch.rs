use crate::AssemblyError;
use crate::statistics::{Amplification, AssemblyBatch, BatchConfig, TrialOutcome, run_trial};
use cancel_this::{Cancellable, is_cancelled};
use computation_process::{Completable, GeneratorStep, Stateful};
use log::{debug, info};
use rayon::prelude::*;

/// Internal state of [`AssemblyBatch`]: the index of the next trial.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchState {
    pub next_trial: usize,
}

impl From<&BatchConfig> for BatchState {
    fn from(_value: &BatchConfig) -> Self {
        BatchState::default()
    }
}

/// Step implementation of [`AssemblyBatch`]: every step runs one complete trial.
pub struct TrialStep;

impl GeneratorStep<BatchConfig, BatchState, TrialOutcome> for TrialStep {
    fn step(context: &BatchConfig, state: &mut BatchState) -> Completable<Option<TrialOutcome>> {
        if state.next_trial >= context.trials {
            return Ok(None);
        }
        is_cancelled!()?;

        let index = state.next_trial;
        state.next_trial += 1;

        let mut rng = context.trial_rng(index);
        let outcome = run_trial(&context.network, &mut rng)?;
        debug!(
            "[trial:{index}] Finished with multiplier {}.",
            outcome.multiplier()
        );
        Ok(Some(outcome))
    }
}

/// Aggregated per-trial results of a batch.
///
/// `assembly_indices` holds the (possibly amplified) depth contributions, the remaining
/// lists hold exactly one value per trial, in trial order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchResult {
    pub assembly_indices: Vec<usize>,
    pub subnetwork_counts: Vec<usize>,
    pub autocatalytic_subnetwork_counts: Vec<usize>,
    pub max_depths: Vec<usize>,
    /// Number of trials whose whole reaction set was autocatalytic.
    pub whole_set_autocatalytic_count: usize,
}

impl BatchResult {
    /// Add one trial outcome.
    pub fn record(&mut self, outcome: &TrialOutcome, amplification: Amplification) {
        let copies = outcome.contribution_count(amplification);
        self.assembly_indices
            .extend(std::iter::repeat_n(outcome.max_depth, copies));
        self.subnetwork_counts.push(outcome.subnetwork_count);
        self.autocatalytic_subnetwork_counts
            .push(outcome.autocatalytic_subnetwork_count);
        self.max_depths.push(outcome.max_depth);
        if outcome.whole_set_autocatalytic {
            self.whole_set_autocatalytic_count += 1;
        }
    }

    /// Append the results of another batch.
    pub fn merge(&mut self, other: BatchResult) {
        self.assembly_indices.extend(other.assembly_indices);
        self.subnetwork_counts.extend(other.subnetwork_counts);
        self.autocatalytic_subnetwork_counts
            .extend(other.autocatalytic_subnetwork_counts);
        self.max_depths.extend(other.max_depths);
        self.whole_set_autocatalytic_count += other.whole_set_autocatalytic_count;
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> usize {
        self.max_depths.len()
    }
}

/// Run all trials of `config` one after another.
///
/// The configuration is validated before the first trial.
pub fn run_batch(config: &BatchConfig) -> Result<BatchResult, AssemblyError> {
    config.network.validate()?;
    log_start(config, "sequential");

    let mut result = BatchResult::default();
    for outcome in AssemblyBatch::configure(config.clone(), config) {
        result.record(&outcome?, config.amplification);
        let done = result.trials();
        if done % 1000 == 0 {
            info!("{done}/{} trials done.", config.trials);
        }
    }

    log_finish(config, &result);
    Ok(result)
}

/// Run all trials of `config` in parallel (one rayon task per trial).
///
/// Every trial uses the same random source as in [`run_batch`] and outcomes are merged in
/// trial order, so both functions return identical results.
pub fn run_batch_parallel(config: &BatchConfig) -> Result<BatchResult, AssemblyError> {
    config.network.validate()?;
    log_start(config, "parallel");

    let outcomes = (0..config.trials)
        .into_par_iter()
        .map(|index| {
            let mut rng = config.trial_rng(index);
            run_trial(&config.network, &mut rng)
        })
        .collect::<Cancellable<Vec<TrialOutcome>>>()?;

    let mut result = BatchResult::default();
    for outcome in &outcomes {
        result.record(outcome, config.amplification);
    }

    log_finish(config, &result);
    Ok(result)
}

fn log_start(config: &BatchConfig, mode: &str) {
    info!(
        "Running {} {mode} trials for `{}` (p={}, strategy={}, amplification={}, seed={}).",
        config.trials,
        config.network.final_product,
        config.network.catalyst_probability,
        config.network.strategy,
        config.amplification,
        config.seed
    );
}

fn log_finish(config: &BatchConfig, result: &BatchResult) {
    info!(
        "Finished {} trials for `{}`: {} assembly indices, {} autocatalytic whole sets.",
        result.trials(),
        config.network.final_product,
        result.assembly_indices.len(),
        result.whole_set_autocatalytic_count
    );
}
