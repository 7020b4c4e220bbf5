use std::io::Write;

use clap::{Parser, ValueEnum};
use client::config::timeout_from_millis;
use client::input::{ParseCommandError, HELP};
use client::{ClientConfig, ClientError, Command, EndpointContract, GameView, HttpGameServer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

mod telemetry;

#[derive(Clone, ValueEnum)]
enum Contract {
    Underscore,
    Slash,
}

#[derive(Parser)]
#[command(name = "hand-cricket")]
#[command(about = "Play hand cricket against a remote game server")]
struct Args {
    /// Game server base URL (overrides HAND_CRICKET_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Start endpoint spelling: /start_batting or /start/batting
    #[arg(long, value_enum)]
    contract: Option<Contract>,

    /// Pull /score on load and after every action
    #[arg(long)]
    score_sync: bool,

    /// Per-request timeout in milliseconds (0 disables)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<ClientConfig, ClientError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(contract) = &args.contract {
        config = config.with_contract(match contract {
            Contract::Underscore => EndpointContract::Underscore,
            Contract::Slash => EndpointContract::Slash,
        });
    }
    if args.score_sync {
        config = config.with_score_sync(true);
    }
    if let Some(ms) = args.timeout_ms {
        config = config.with_timeout(timeout_from_millis(ms));
    }
    Ok(config)
}

/// A fresh view stands in for a page reload.
async fn fresh_view(server: &HttpGameServer, config: &ClientConfig) -> GameView<HttpGameServer> {
    let mut view = GameView::new(server.clone()).with_score_sync(config.score_sync());
    if let Err(e) = view.load().await {
        debug!(code = %e.code(), error = %e, "initial score pull failed");
    }
    view
}

fn prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    let server = match HttpGameServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        base_url = config.base_url(),
        contract = %config.contract(),
        score_sync = config.score_sync(),
        "hand cricket client ready"
    );

    let mut view = fresh_view(&server, &config).await;
    println!("{}", view.render());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("❌ failed to read input: {e}");
                break;
            }
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        // The view's message already carries the outcome for the screen.
        let result = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::New => {
                view = fresh_view(&server, &config).await;
                Ok(())
            }
            Command::StartBatting => view.start_batting().await.map(|_| ()),
            Command::StartBowling(target) => view.start_bowling(target).await.map(|_| ()),
            Command::Move(value) => view.make_move(value).await.map(|_| ()),
            Command::Score => view.fetch_score().await.map(|_| ()),
        };
        if let Err(e) = result {
            debug!(code = %e.code(), error = %e, ?command, "command failed");
        }

        println!();
        println!("{}", view.render());
    }
}
