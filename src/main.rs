use clap::Parser;
use fantasy::{Config, FantasyError, Handler, League};
use std::io;
use std::io::prelude::*;

/// Answers fantasy football questions about one ESPN league
#[derive(Parser)]
#[command(name = "fantasy")]
struct Cli {
    /// TOML config file. Without one the FANTASY_* environment variables are used
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    league_id: Option<String>,

    #[arg(long)]
    season_id: Option<String>,

    /// Where the league pages live, e.g. a local copy of the site
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// A single command to answer, e.g. `player Tom Brady`. Reads commands from stdin
    /// when left out.
    command: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> fantasy::Result<Config> {
    let config = match (&cli.config, &cli.league_id) {
        (Some(path), _) => Config::load(path)?,
        // Enough to go on without touching the environment
        (None, Some(league_id)) => Config::new(league_id)?,
        (None, None) => Config::from_env()?,
    };
    let config = Config {
        league_id: cli.league_id.clone().unwrap_or(config.league_id),
        season_id: cli.season_id.clone().unwrap_or(config.season_id),
        base_url: match &cli.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => config.base_url,
        },
        timeout_secs: cli.timeout.unwrap_or(config.timeout_secs),
    };
    if config.league_id.trim().is_empty() {
        return Err(FantasyError::Config("league_id is required".to_string()));
    }
    Ok(config)
}

fn run(cli: Cli) -> fantasy::Result<()> {
    let config = load_config(&cli)?;
    let handler = Handler::new(League::new(config)?);

    if !cli.command.is_empty() {
        reply(&handler, &cli.command.join(" "));
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            reply(&handler, &line);
        }
    }
    Ok(())
}

fn reply(handler: &Handler, line: &str) {
    match handler.handle(line) {
        Some(messages) => {
            for message in messages {
                println!("{}", message);
            }
        }
        None => println!("Unknown command, try `help`"),
    }
}
