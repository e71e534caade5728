use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use splendor_anneal::{
    Board, Card, Catalogue, EstimatorConfig, MonteCarloDriver, ProgressLine, SolutionDump,
};

#[derive(Debug, Parser)]
#[command(
    name = "splendor-anneal",
    about = "Estimate the win likelihood of a partially known solitaire Splendor setup"
)]
struct Args {
    /// Known cards, one per line as `black red green blue white <color> <value>` (default: stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Catalogue of every card in the same format (default: built-in)
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// JSON configuration file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random deck completions
    #[arg(long)]
    trials: Option<u32>,

    /// Seed of the deck-completion generator
    #[arg(long)]
    setup_seed: Option<u32>,

    /// Seed of the search generator
    #[arg(long)]
    search_seed: Option<u32>,

    /// Search trials on all cores with per-trial seeds
    #[arg(long)]
    parallel: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<EstimatorConfig> {
    let mut config = match &args.config {
        Some(path) => EstimatorConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EstimatorConfig::default(),
    };

    if let Some(trials) = args.trials {
        config.driver.trials = trials;
    }
    if let Some(seed) = args.setup_seed {
        config.driver.setup_seed = seed;
    }
    if let Some(seed) = args.search_seed {
        config.driver.search_seed = seed;
    }
    if args.parallel {
        config.driver.parallel = true;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn read_cards(reader: impl BufRead) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading input")?;
        if let Some(card) = Card::parse_line(&line)? {
            cards.push(card);
        }
    }
    Ok(cards)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;

    let catalogue = match &args.catalogue {
        Some(path) => Catalogue::from_path(path)
            .with_context(|| format!("loading catalogue from {}", path.display()))?,
        None => Catalogue::builtin()?,
    };

    let cards = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_cards(BufReader::new(file))?
        }
        None => read_cards(io::stdin().lock())?,
    };
    let board = Board::from_cards(cards, &catalogue)?;

    let driver = MonteCarloDriver::new(&catalogue, &config.rules, &config.anneal, &config.driver);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    driver.run(&board, |report| {
        if write_error.is_some() {
            return;
        }
        let written = (|| -> io::Result<()> {
            if let Some(win) = &report.first_win {
                write!(out, "{}", SolutionDump::new(win, &config.rules))?;
            }
            write!(out, "{}", ProgressLine(&report.estimate))?;
            out.flush()
        })();
        if let Err(err) = written {
            write_error = Some(err);
        }
    })?;

    if let Some(err) = write_error {
        return Err(err).context("writing to stdout");
    }
    writeln!(out)?;
    Ok(())
}
