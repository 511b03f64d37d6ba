use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use ms_apriori::Item;
use ms_apriori::constraints::CannotTogetherGroup;
use ms_apriori::dataset::read_transactions;
use ms_apriori::miner::{MinerConfig, MiningReport, MsApriori};
use ms_apriori::support::InvertedIndexCounter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

#[derive(Parser)]
#[command(name = "ms_apriori")]
#[command(about = "Mine frequent itemsets under multiple minimum support thresholds")]
struct Args {
    /// Path to the transaction file (one transaction per line, item ids separated by spaces)
    #[arg(value_name = "FILE")]
    file: String,

    /// Output file for the frequent itemsets
    #[arg(long, short = 'o', default_value = "frequent_itemsets.txt", require_equals = true)]
    output: String,

    /// Least support: the floor below which no item's MIS may fall
    #[arg(long, default_value_t = 0.01, require_equals = true)]
    ls: f64,

    /// Scale factor turning an item's support into its MIS
    #[arg(long, default_value_t = 0.5, require_equals = true)]
    beta: f64,

    /// Maximum allowed support difference between joined items
    #[arg(long, default_value_t = 1.0, require_equals = true)]
    sup_dif: f64,

    /// Must-have item ids separated by spaces, e.g. "3 17"
    #[arg(long, require_equals = true)]
    must_have: Option<String>,

    /// Cannot-be-together groups separated by ';', units within a group by ',',
    /// items of a multi-item unit by spaces, e.g. "1, 2, 3, 2 3; 45, 96, 81"
    #[arg(long, require_equals = true)]
    cannot_together: Option<String>,

    /// Counting strategy: "naive" or "inverted"
    #[arg(long, default_value = "naive", require_equals = true)]
    counter: Counter,

    /// Verbose logging level: "trace", "debug", or "info"
    /// If specified without a value (--verbose or -v), defaults to "info"
    /// Use --verbose=LEVEL to specify a level, or just --verbose/-v for info
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum Counter {
    Naive,
    Inverted,
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

fn parse_items(raw: &str, what: &str) -> Vec<Item> {
    raw.split_whitespace()
        .map(|token| {
            token
                .parse()
                .unwrap_or_else(|_| panic!("Invalid {} item id `{}`", what, token))
        })
        .collect()
}

/// Parse the cannot-be-together syntax of the reference tool: groups are
/// separated by ';', units by ',', and a unit with spaces is a pre-combined
/// multi-item tuple.
fn parse_cannot_together(raw: &str) -> Vec<CannotTogetherGroup> {
    raw.split(';')
        .filter(|group| !group.trim().is_empty())
        .map(|group| {
            let units = group
                .split(',')
                .map(|unit| parse_items(unit, "cannot-be-together"))
                .collect();
            CannotTogetherGroup::new(units)
        })
        .collect()
}

fn write_report(path: &str, report: &MiningReport) {
    let file = File::create(path)
        .unwrap_or_else(|e| panic!("Failed to create output file {}: {}", path, e));
    let mut out = BufWriter::new(file);
    for found in report.iter() {
        let rendered: Vec<String> = found.items.iter().map(|item| item.to_string()).collect();
        writeln!(out, "{} #Sup: {}", rendered.join(" "), found.count)
            .unwrap_or_else(|e| panic!("Failed to write output file {}: {}", path, e));
    }
    out.flush()
        .unwrap_or_else(|e| panic!("Failed to write output file {}: {}", path, e));
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    // Load the transaction file
    let file = File::open(&args.file)
        .unwrap_or_else(|e| panic!("Failed to open dataset file {}: {}", args.file, e));
    let transactions = read_transactions(BufReader::new(file))
        .unwrap_or_else(|e| panic!("Failed to read dataset file {}: {}", args.file, e));

    println!("Loaded {} transactions.", transactions.len());

    let mut config = MinerConfig::new()
        .ls(args.ls)
        .beta(args.beta)
        .sup_dif_allowed(args.sup_dif);
    if let Some(raw) = &args.must_have {
        config = config.must_have(parse_items(raw, "must-have"));
    }
    if let Some(raw) = &args.cannot_together {
        for group in parse_cannot_together(raw) {
            config = config.cannot_together(group);
        }
    }

    let report = match args.counter {
        Counter::Naive => MsApriori::configure(config, transactions)
            .unwrap_or_else(|e| panic!("Invalid configuration: {}", e))
            .run(),
        Counter::Inverted => MsApriori::with_counter(config, transactions, InvertedIndexCounter)
            .unwrap_or_else(|e| panic!("Invalid configuration: {}", e))
            .run(),
    };

    write_report(&args.output, &report);

    println!("Frequent itemsets written to {}.", args.output);
    println!("Max size of frequent itemset found is {}.", report.max_size);
    println!(
        "Total no. of frequent itemsets generated is {}.",
        report.total
    );
}
