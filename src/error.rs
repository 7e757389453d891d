use cancel_this::Cancelled;
use thiserror::Error;

/// Errors reported by network configuration and batch statistics.
///
/// Apart from cancellation and CSV output, all variants are input-validation failures
/// that are raised before any network is generated.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Catalyst probability is not a finite number in `[0, 1]`.
    #[error("catalyst probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The final product has no symbols to assemble.
    #[error("final product must not be empty")]
    EmptyProduct,

    /// Catalyst strategy id other than `0`, `1` or `2`.
    #[error("unknown catalyst strategy `{0}` (expected 0, 1 or 2)")]
    UnknownStrategy(String),

    /// Amplification mode other than `none`, `linear` or `square`.
    #[error("unknown amplification mode `{0}` (expected none, linear or square)")]
    UnknownAmplification(String),

    /// The computation was cancelled through `cancel-this`.
    #[error("computation cancelled: {0}")]
    Cancelled(Cancelled),

    /// Writing a reaction table failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<Cancelled> for AssemblyError {
    fn from(value: Cancelled) -> Self {
        AssemblyError::Cancelled(value)
    }
}
