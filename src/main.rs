use cinedex::presenter::{self, SearchParams};
use cinedex::server::{self, AppState};
use cinedex_core::config::Config;
use cinedex_core::pirate::ThreadRngPicker;
use cinedex_core::Catalog;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinedex", about = "Cinedex — movie catalog search, optionally in pirate speak")]
struct Cli {
    /// Write debug logs to /tmp/cinedex-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/cinedex/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Address to bind, overriding `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one search and print the JSON result.
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        /// Answer in pirate speak.
        #[arg(long)]
        pirate: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, user_config_error) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::defaults(), Some(err)),
        },
    };
    init_tracing(cli.debug, &config)?;
    if let Some(err) = user_config_error {
        tracing::warn!(error = %err, "ignoring unreadable user config; using defaults");
    }

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = AppState::from_config(&config);
            tokio::runtime::Runtime::new()?.block_on(server::serve(state, &addr))
        }
        Command::Search { name, id, genre, pirate } => {
            let params = SearchParams {
                name,
                id,
                genre,
                pirate: pirate.then(|| "true".to_string()),
            };

            let loaded;
            let catalog = match config.catalog.movies_file() {
                Some(path) => {
                    loaded = Catalog::load_or_empty(path);
                    &loaded
                }
                None => cinedex_core::catalog(),
            };

            let payload = presenter::search_payload(catalog, &params, ThreadRngPicker)?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
    }
}

fn init_tracing(debug: bool, config: &Config) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cinedex-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!("cinedex debug log started — tail -f /tmp/cinedex-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter(&config.logging.filter))
            .init();
    }
    Ok(())
}
