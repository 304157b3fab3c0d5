//! One Night CLI - deal, play and inspect single rounds

mod autopilot;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use onenight_core::{Game, GameConfig, MatchState, RoundScript};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::autopilot::Autopilot;

#[derive(Parser)]
#[command(name = "onenight")]
#[command(about = "One Night - resolve a six-seat round of hidden-role werewolf")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play a full round and print the report
    Play {
        /// Configuration file path (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Round script with night choices, speeches and votes (JSON);
        /// without one every seat plays randomly
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,
        /// Six comma-separated player names
        #[arg(long, value_delimiter = ',')]
        names: Option<Vec<String>>,
        /// Include the night action log in the report
        #[arg(long)]
        reveal_log: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal a round and show every seat's card
    Deal {
        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,
        /// Six comma-separated player names
        #[arg(long, value_delimiter = ',')]
        names: Option<Vec<String>>,
        /// Print the deal as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check configuration validity
    Check {
        /// Configuration file path (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "onenight=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Play {
            config,
            script,
            seed,
            names,
            reveal_log,
            json,
        }) => {
            let mut config = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => GameConfig::default(),
            };
            if let Some(names) = names {
                config = config.with_names(names);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if reveal_log {
                config = config.with_night_log(true);
            }
            play(config, script, json)?;
        }
        Some(Commands::Deal { seed, names, json }) => {
            let names = names.unwrap_or_else(|| GameConfig::default().table.player_names);
            let state = MatchState::setup(&names, seed)?;
            print_deal(&state, json)?;
        }
        Some(Commands::Check { config }) => {
            let parsed = GameConfig::from_file(&config)
                .with_context(|| format!("loading config {}", config.display()))?;
            parsed.validate()?;
            println!("Config OK: {}", config.display());
            println!("  players:    {}", parsed.table.player_names.join(", "));
            match parsed.table.seed {
                Some(seed) => println!("  seed:       {}", seed),
                None => println!("  seed:       (random)"),
            }
            println!("  wake rule:  {:?}", parsed.night.wake_rule);
            println!("  night log:  {}", parsed.report.reveal_night_log);
        }
        None => {
            println!("One Night v{} - Use --help for commands", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn play(config: GameConfig, script: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let seed = config.table.seed;
    let mut game = Game::new(config)?;

    match script {
        Some(path) => {
            let script = RoundScript::from_file(&path)
                .with_context(|| format!("loading script {}", path.display()))?;
            info!("Playing scripted round from {}", path.display());
            game.play(&script);
        }
        None => {
            info!("Playing round on autopilot");
            let mut pilot = Autopilot::new(seed);
            game.run_night(&mut pilot);

            let ids: Vec<_> = game.state().players().iter().map(|p| p.id).collect();
            for voter in ids {
                if let Some(target) = pilot.vote(game.state(), voter) {
                    game.cast_vote(voter, target);
                }
            }
            game.resolve();
        }
    }

    let report = game
        .report()
        .context("round finished without a resolution")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn print_deal(state: &MatchState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }
    for player in state.players() {
        println!(
            "  {}. {:<10} {:<12} ({})",
            player.id,
            player.name,
            player.current_role(),
            player.current_role().faction()
        );
    }
    let center: Vec<String> = state
        .center()
        .iter()
        .map(|(i, role)| format!("{}: {}", i, role))
        .collect();
    println!("  center: {}", center.join(", "));
    Ok(())
}
