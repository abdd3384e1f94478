use std::net::TcpListener;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gomoku::host::{serve, Host, HostConfig};
use gomoku::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "gomoku-server", version, about = "Multi-room five-in-a-row server")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    bind: String,
    /// Maximum number of concurrent rooms
    #[arg(long, default_value_t = 10)]
    max_rooms: usize,
    /// Maximum players per room, spectators included
    #[arg(long, default_value_t = 50)]
    max_players: usize,
    /// Maximum stones per game
    #[arg(long, default_value_t = 256)]
    max_stones: usize,
    /// Negamax depth for AI moves
    #[arg(long, default_value_t = 2)]
    depth: u8,
    /// Forcing plies for the threat search
    #[arg(long, default_value_t = 2)]
    threat_depth: u8,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = HostConfig {
        max_rooms: args.max_rooms,
        max_players: args.max_players,
        max_stones: args.max_stones,
    };
    let engine = EngineConfig {
        search_depth: args.depth,
        threat_depth: args.threat_depth,
    };
    info!("starting with {:?}, {:?}", config, engine);

    let listener = TcpListener::bind(&args.bind)
        .with_context(|| format!("failed to bind {}", args.bind))?;
    serve(listener, Arc::new(Host::new(config, engine)))?;
    Ok(())
}
