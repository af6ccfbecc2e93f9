use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use loteria_caller::cards::{CardSet, CardSetProvider, JsonCardSet, StandardDeck};
use loteria_caller::core::{CallerConfig, MonotonicClock, DEFAULT_INTERVAL_MS};
use loteria_caller::game::{Advance, GameController};

const LOG_TARGET: &str = "bin::caller";
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Parser)]
#[command(name = "caller")]
#[command(about = "Call a shuffled Loteria deck on a timer", long_about = None)]
struct Args {
    /// How long each card stays up, in milliseconds
    #[arg(long, env = "LOTERIA_INTERVAL_MS", default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Shuffle seed for a reproducible call order
    #[arg(long)]
    seed: Option<u64>,

    /// JSON card list to play with instead of the standard 54 cards
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Asset prefix for the standard card set
    #[arg(long, default_value = "cards")]
    asset_prefix: String,

    /// How often to poll the caller, in milliseconds
    #[arg(long, default_value_t = 100)]
    poll_ms: u64,

    /// Toggle structured (JSON) tracing output
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json)?;

    let mut config = CallerConfig::default()
        .with_interval_ms(args.interval_ms)
        .with_asset_prefix(args.asset_prefix.clone());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let cards = load_cards(&args, &config)?;
    let mut game = GameController::new(config, MonotonicClock::new(), &cards)
        .context("invalid caller configuration")?;

    game.start_auto_play();
    if let Some(card) = game.current() {
        println!("{card}");
    }

    let poll = Duration::from_millis(args.poll_ms.max(1));
    loop {
        thread::sleep(poll);
        match game.tick() {
            Advance::Revealed(card) => println!("{card}"),
            Advance::Exhausted => break,
            Advance::Ignored => {}
        }
    }

    println!("All cards have been called!");
    let snapshot = game.snapshot();
    for row in snapshot.history_rows(GRID_COLUMNS) {
        let names: Vec<&str> = row.iter().map(|c| c.name.as_str()).collect();
        println!("  {}", names.join(" | "));
    }
    info!(target: LOG_TARGET, called = snapshot.history.len(), "game over");
    Ok(())
}

fn load_cards(args: &Args, config: &CallerConfig) -> Result<CardSet> {
    match &args.cards {
        Some(path) => JsonCardSet::from_path(path)
            .load()
            .with_context(|| format!("loading cards from {}", path.display())),
        None => StandardDeck::new(config.asset_prefix.clone())
            .load()
            .context("building the standard card set"),
    }
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bin::caller=info,loteria_caller=info"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(Uptime::default())
            .with_ansi(false)
            .json()
            .try_init()
            .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_timer(Uptime::default())
            .try_init()
            .map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))?;
    }
    Ok(())
}
