use autocatalytic_assembly::AssemblyError;
use autocatalytic_assembly::network::{CatalystStrategy, NetworkConfig, build_network};
use autocatalytic_assembly::subnetwork::extract_subnetworks;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "autocatalytic_network")]
#[command(about = "Generate one random autocatalytic reaction network")]
struct Args {
    /// The final product to assemble (e.g. ABCDEFGH)
    #[arg(value_name = "PRODUCT")]
    product: String,

    /// Probability that a reaction receives a catalyst
    #[arg(long, default_value_t = 1.0, require_equals = true)]
    probability: f64,

    /// Catalyst strategy (0 = random, 1 = weighted, 2 = weighted with reuse)
    #[arg(long, default_value = "2", require_equals = true)]
    strategy: String,

    /// Seed of the random generator (random if omitted)
    #[arg(long, require_equals = true)]
    seed: Option<u64>,

    /// Also print the reaction table of every subnetwork
    #[arg(long)]
    subnetworks: bool,

    /// Write the reaction table as CSV
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

fn main() {
    let args = Args::parse();

    let log_level = match &args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.clone().into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let config = CatalystStrategy::from_str(&args.strategy)
        .and_then(|strategy| NetworkConfig::new(&args.product, args.probability, strategy))
        .unwrap_or_else(|e| {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        });

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let network = build_network(&config, &mut rng);

    println!(
        "Network for `{}` (p={}, strategy={}, seed={}):",
        config.final_product, config.catalyst_probability, config.strategy, seed
    );
    println!("{}", network);
    println!("Max depth: {}", network.max_depth());
    println!("Whole set autocatalytic: {}", network.is_autocatalytic());

    let subnetworks = extract_subnetworks(&network).unwrap_or_else(|e| {
        eprintln!("Error during subnetwork extraction: {}", e);
        std::process::exit(1);
    });

    let autocatalytic = subnetworks
        .values()
        .filter(|subnetwork| subnetwork.is_autocatalytic())
        .count();
    println!(
        "Subnetworks: {} ({} autocatalytic)",
        subnetworks.len(),
        autocatalytic
    );
    for (product, subnetwork) in &subnetworks {
        println!(
            " - {}: {} reactions, autocatalytic: {}",
            product,
            subnetwork.len(),
            subnetwork.is_autocatalytic()
        );
        if args.subnetworks {
            println!("{}", subnetwork);
        }
    }

    if let Some(path) = args.output {
        let written = File::create(&path)
            .map_err(|e| AssemblyError::from(csv::Error::from(e)))
            .and_then(|file| network.write_csv(file));
        if let Err(e) = written {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Reaction table written to {}.", path);
    }
}
