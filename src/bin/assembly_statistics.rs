use autocatalytic_assembly::AssemblyError;
use autocatalytic_assembly::statistics::{
    AssemblySummary, BatchConfig, BatchResult, run_batch, run_batch_parallel,
};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "assembly_statistics")]
#[command(about = "Estimate assembly-index statistics of random autocatalytic networks")]
struct Args {
    /// Final products to assemble (comma separated)
    #[arg(long, value_delimiter = ',', required = true, require_equals = true)]
    products: Vec<String>,

    /// Catalyst probabilities (comma separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "0.0,0.1,0.2,0.3,0.4,0.5,0.6,0.7,0.8,0.9,1.0",
        require_equals = true
    )]
    probabilities: Vec<f64>,

    /// Catalyst strategies (comma separated; 0 = random, 1 = weighted, 2 = weighted with reuse)
    #[arg(long, value_delimiter = ',', default_value = "0,1,2", require_equals = true)]
    strategies: Vec<String>,

    /// Amplification modes (comma separated; none, linear or square)
    #[arg(long, value_delimiter = ',', default_value = "none", require_equals = true)]
    amplifications: Vec<String>,

    /// Number of networks generated per configuration
    #[arg(long, default_value_t = 1000, require_equals = true)]
    trials: usize,

    /// Base seed shared by all configurations (random if omitted)
    #[arg(long, require_equals = true)]
    seed: Option<u64>,

    /// Run the trials of each configuration in parallel
    #[arg(long)]
    parallel: bool,

    /// Write one summary row per configuration as CSV
    #[arg(long, value_name = "FILE", require_equals = true)]
    output: Option<String>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for a specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

const SUMMARY_COLUMNS: [&str; 18] = [
    "Product",
    "Probability",
    "Strategy",
    "Amplification",
    "Trials",
    "Min",
    "Mean",
    "Median",
    "Max",
    "Std",
    "Var",
    "Range",
    "Q1",
    "Q3",
    "IQR",
    "Length",
    "Mean autocatalytic subnetworks",
    "Autocatalytic whole sets",
];

fn main() {
    let args = Args::parse();

    Builder::from_default_env()
        .filter_level(log_level(&args.verbose))
        .init();

    // Validate the whole sweep before running anything.
    let configs = sweep(&args).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    println!("Running {} configurations.", configs.len());

    let mut writer = args.output.as_ref().map(|path| {
        let mut writer = csv::Writer::from_path(path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {}", path, e);
            std::process::exit(1);
        });
        if let Err(e) = writer.write_record(SUMMARY_COLUMNS) {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
        writer
    });

    for config in &configs {
        let result = if args.parallel {
            run_batch_parallel(config)
        } else {
            run_batch(config)
        };
        let result = result.unwrap_or_else(|e| {
            eprintln!("Error during batch computation: {}", e);
            std::process::exit(1);
        });
        let summary = AssemblySummary::from_result(&result);

        println!(
            "{} p={} strategy={} amplification={}: assembly index {}, mean {:.3}, median {}, std {:.3}, mean autocatalytic subnetworks {:.3}",
            config.network.final_product,
            config.network.catalyst_probability,
            config.network.strategy,
            config.amplification,
            summary
                .assembly_index()
                .map(|index| index.to_string())
                .unwrap_or_else(|| "-".to_string()),
            summary.mean,
            summary.median,
            summary.std,
            summary.mean_autocatalytic_subnetwork_count
        );

        if let Some(writer) = writer.as_mut() {
            let row = summary_row(config, &result, &summary);
            if let Err(e) = writer.write_record(&row) {
                eprintln!("Failed to write summary row: {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(mut writer) = writer {
        if let Err(e) = writer.flush() {
            eprintln!("Failed to flush summary file: {}", e);
            std::process::exit(1);
        }
    }
}

/// None = not specified, Some(None) = `-v` without value, Some(Some(level)) = `-v=level`.
fn log_level(verbose: &Option<Option<LogLevel>>) -> LevelFilter {
    match verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.clone().into(),
    }
}

/// Every combination of products, probabilities, strategies and amplification modes.
fn sweep(args: &Args) -> Result<Vec<BatchConfig>, AssemblyError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut configs = Vec::new();
    for product in &args.products {
        for probability in &args.probabilities {
            for strategy in &args.strategies {
                for amplification in &args.amplifications {
                    let config = BatchConfig::parse(
                        product,
                        args.trials,
                        *probability,
                        strategy,
                        amplification,
                    )?;
                    configs.push(config.with_seed(seed));
                }
            }
        }
    }
    Ok(configs)
}

fn summary_row(
    config: &BatchConfig,
    result: &BatchResult,
    summary: &AssemblySummary,
) -> Vec<String> {
    vec![
        config.network.final_product.clone(),
        config.network.catalyst_probability.to_string(),
        config.network.strategy.to_string(),
        config.amplification.to_string(),
        config.trials.to_string(),
        summary.min.to_string(),
        summary.mean.to_string(),
        summary.median.to_string(),
        summary.max.to_string(),
        summary.std.to_string(),
        summary.var.to_string(),
        summary.range.to_string(),
        summary.q1.to_string(),
        summary.q3.to_string(),
        summary.iqr.to_string(),
        summary.length.to_string(),
        summary.mean_autocatalytic_subnetwork_count.to_string(),
        result.whole_set_autocatalytic_count.to_string(),
    ]
}
