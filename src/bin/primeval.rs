use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use primeval::cards::{cards_to_string, parse_cards};
use primeval::config::{Config, TableSource, TABLES_ENV};
use primeval::deck::{Deck, DeckType};
use primeval::evaluator::{Category, EvalOptions, HandEvaluator};
use primeval::table::{PersistedTables, TableFormat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[clap(version, about = "Prime-product poker hand evaluator")]
struct Cli {
    /// Load lookup tables from this file instead of building them.
    #[clap(long, global = true, env = TABLES_ENV)]
    tables: Option<PathBuf>,
    /// Reject hands that contain the same card twice.
    #[clap(long, global = true)]
    reject_duplicates: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enumerate all five-card hands and write the tables.
    Build {
        /// Output file.
        #[clap(long, short)]
        out: PathBuf,
        /// json or binary; defaults to the output file extension.
        #[clap(long)]
        format: Option<TableFormat>,
    },
    /// Check that every five-card hand resolves to a class.
    Verify,
    /// Evaluate one or more hands of 5 to 7 cards.
    Eval {
        /// Hands such as "As Ks Qs Js Ts" or "7sAd5s9c2h".
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Deal and evaluate random hands.
    Sample {
        /// Number of hands.
        #[clap(long, short, default_value_t = 10)]
        count: usize,
        /// Cards per hand.
        #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Seed for a reproducible deal.
        #[clap(long)]
        seed: Option<u64>,
        /// Deck type, e.g. english, low, onejoker.
        #[clap(long, default_value = "english")]
        deck: DeckType,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config::new(
        TableSource::from_path(cli.tables),
        EvalOptions { reject_duplicates: cli.reject_duplicates },
    );

    match cli.command {
        Command::Build { out, format } => build(&out, format),
        Command::Verify => verify(&config),
        Command::Eval { hands } => eval(&config, &hands),
        Command::Sample { count, cards, seed, deck } => sample(&config, count, cards.into(), seed, deck),
    }
}

fn evaluator(config: &Config) -> Result<HandEvaluator> {
    let evaluator = HandEvaluator::from_config(config).with_context(|| match &config.table {
        TableSource::Build => "building tables".to_string(),
        TableSource::File(path) => format!("loading tables from {}", path.display()),
    })?;
    Ok(evaluator)
}

fn build(out: &Path, format: Option<TableFormat>) -> Result<()> {
    let evaluator = HandEvaluator::build().context("building tables")?;
    let tables = PersistedTables::from_tables(evaluator.eclasses(), evaluator.lookup());
    let format = format.unwrap_or_else(|| TableFormat::from_path(out));
    tables.save(out, format).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {} classes and {} hashes to {}", tables.eclass_count, tables.hash_count, out.display());
    Ok(())
}

fn verify(config: &Config) -> Result<()> {
    let evaluator = evaluator(config)?;
    let census = evaluator.census().context("evaluating every five-card hand")?;
    for category in Category::ALL {
        println!("{:<16} {:>9}", category.name(), census.count(category));
    }
    println!("{:<16} {:>9}", "total", census.hands);
    info!("all {} hands resolved", census.hands);
    Ok(())
}

fn eval(config: &Config, hands: &[String]) -> Result<()> {
    let evaluator = evaluator(config)?;
    for text in hands {
        let cards = parse_cards(text).with_context(|| format!("parsing '{text}'"))?;
        let e = evaluator.evaluate(&cards).with_context(|| format!("evaluating '{text}'"))?;
        println!(
            "{}  {:>4}  {:<15}  {}  [{}]",
            cards_to_string(&cards),
            e.strength(),
            e.category().name(),
            e.class.description(),
            cards_to_string(&e.best_five)
        );
    }
    Ok(())
}

fn sample(config: &Config, count: usize, cards: usize, seed: Option<u64>, deck: DeckType) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let evaluator = evaluator(config)?;
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::seed_from_u64(rand::rng().random()),
    };
    for _ in 0..count {
        let mut d = Deck::new(deck);
        d.shuffle_with(&mut rng);
        let hand = d.draw_n(cards);
        match evaluator.evaluate(&hand) {
            Ok(e) => println!(
                "{}  {:>4}  {}",
                cards_to_string(&hand),
                e.strength(),
                e.class.description()
            ),
            Err(err) => warn!("{}: {err}", cards_to_string(&hand)),
        }
    }
    Ok(())
}
