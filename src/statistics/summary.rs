use crate::statistics::BatchResult;
use std::fmt;

/// Descriptive statistics of the assembly-index list of a batch.
///
/// Every value is `NaN` (and `length` is zero) when the list is empty. The standard
/// deviation and variance are population statistics, quartiles use linear interpolation
/// between the closest ranks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblySummary {
    pub min: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub std: f64,
    pub var: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub length: usize,
    pub mean_autocatalytic_subnetwork_count: f64,
}

impl AssemblySummary {
    pub fn from_result(result: &BatchResult) -> AssemblySummary {
        AssemblySummary::from_values(
            &result.assembly_indices,
            &result.autocatalytic_subnetwork_counts,
        )
    }

    /// Summarise `assembly_indices`; `autocatalytic_counts` only contributes its mean.
    pub fn from_values(
        assembly_indices: &[usize],
        autocatalytic_counts: &[usize],
    ) -> AssemblySummary {
        let mean_autocatalytic_subnetwork_count = mean(autocatalytic_counts);
        if assembly_indices.is_empty() {
            return AssemblySummary {
                min: f64::NAN,
                mean: f64::NAN,
                median: f64::NAN,
                max: f64::NAN,
                std: f64::NAN,
                var: f64::NAN,
                range: f64::NAN,
                q1: f64::NAN,
                q3: f64::NAN,
                iqr: f64::NAN,
                length: 0,
                mean_autocatalytic_subnetwork_count,
            };
        }

        let mut sorted: Vec<f64> = assembly_indices.iter().map(|x| *x as f64).collect();
        sorted.sort_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let mean = mean(assembly_indices);
        let var = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / sorted.len() as f64;
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);

        AssemblySummary {
            min,
            mean,
            median: quantile(&sorted, 0.5),
            max,
            std: var.sqrt(),
            var,
            range: max - min,
            q1,
            q3,
            iqr: q3 - q1,
            length: sorted.len(),
            mean_autocatalytic_subnetwork_count,
        }
    }

    /// The reported assembly index: the smallest observed depth.
    pub fn assembly_index(&self) -> Option<usize> {
        if self.length == 0 {
            None
        } else {
            Some(self.min as usize)
        }
    }
}

impl fmt::Display for AssemblySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Median: {}", self.median)?;
        writeln!(f, "Max: {}", self.max)?;
        writeln!(f, "Std: {}", self.std)?;
        writeln!(f, "Var: {}", self.var)?;
        writeln!(f, "Range: {}", self.range)?;
        writeln!(f, "Q1: {}", self.q1)?;
        writeln!(f, "Q3: {}", self.q3)?;
        writeln!(f, "IQR: {}", self.iqr)?;
        writeln!(f, "Length: {}", self.length)?;
        write!(
            f,
            "Mean autocatalytic subnetworks: {}",
            self.mean_autocatalytic_subnetwork_count
        )
    }
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().map(|x| *x as f64).sum::<f64>() / values.len() as f64
}

/// Linearly interpolated quantile of non-empty, sorted `values`.
fn quantile(values: &[f64], q: f64) -> f64 {
    let position = (values.len() - 1) as f64 * q;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    values[low] + (position - low as f64) * (values[high] - values[low])
}
