use std::path::PathBuf;

use anyhow::Context;
use board_sim::{
    AlwaysBuy, Board, CashReserveBuyer, Game, GameConfig, NeverBuy, PlayerAgent, RandomBuyer,
    StandardBoard,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    /// Buy whenever affordable
    Always,
    /// Never buy
    Never,
    /// Buy while keeping a cash reserve
    Reserve,
    /// Buy with probability 0.5
    Random,
}

#[derive(Parser)]
struct Args {
    /// Path to a JSON game config; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of players (overrides the config file)
    #[arg(short, long)]
    players: Option<usize>,

    /// Number of turns to play (overrides the config file)
    #[arg(short, long)]
    max_moves: Option<u64>,

    /// Master seed from which dice and deck seeds are derived
    #[arg(long)]
    seed: Option<u64>,

    /// Decision policy used by every seat
    #[arg(short, long, value_enum, default_value_t = AgentKind::Always)]
    agent: AgentKind,

    /// Cash kept back by the "reserve" policy
    #[arg(long, default_value_t = 500)]
    reserve: i64,

    /// Print the full report as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Could not parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(players) = args.players {
        config = config.with_players(players);
    }
    if let Some(moves) = args.max_moves {
        config = config.with_max_moves(moves);
    }
    if let Some(seed) = args.seed {
        config = config.seeded_from(seed);
    }
    Ok(config)
}

fn make_agents(args: &Args, board: &StandardBoard, config: &GameConfig) -> Vec<Box<dyn PlayerAgent>> {
    let prices: Vec<i64> = (0..board.total_cells()).map(|cell| board.price(cell)).collect();

    (0..config.player_count)
        .map(|seat| -> Box<dyn PlayerAgent> {
            match args.agent {
                AgentKind::Always => Box::new(AlwaysBuy::default()),
                AgentKind::Never => Box::new(NeverBuy),
                AgentKind::Reserve => Box::new(CashReserveBuyer::new(args.reserve, prices.clone())),
                AgentKind::Random => Box::new(RandomBuyer::new(0.5, config.deck_seed ^ seat as u64)),
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let config = load_config(&args)?;
    info!(?config, "loaded config");

    let board = StandardBoard::new();
    let agents = make_agents(&args, &board, &config);
    let report = Game::new(config, board, agents)
        .context("Invalid game setup")?
        .run()
        .context("Game aborted")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
