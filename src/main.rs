use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{cursor, execute, terminal as term};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, warn};

use portfolio_shell::render;
use portfolio_shell::terminal::process_start;
use portfolio_shell::{
    CommandResult, HostAction, HostConfig, HostEnvironment, LocationData, Terminal,
};

type Error = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "portfolio-shell")]
#[command(about = "Browse a portfolio through a simulated Unix shell")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Host configuration file (TOML)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Location metadata (JSON) reported by `status`
    #[arg(long = "location")]
    location: Option<PathBuf>,

    /// Output each result as a JSON line
    #[arg(long = "json")]
    json: bool,
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// What `status` can honestly say about a character terminal.
fn host_environment(language: Option<String>) -> HostEnvironment {
    let size = term::size().ok();
    HostEnvironment {
        user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        language: language
            .or_else(|| std::env::var("LANG").ok())
            .unwrap_or_else(|| "Unknown".to_string()),
        platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
        screen: size,
        viewport: size,
        online: true,
        cookies_enabled: false,
    }
}

async fn read_location(path: &Path) -> std::io::Result<LocationData> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Start the lookup in the background; the receiver yields once it resolves.
fn spawn_location_lookup(path: PathBuf) -> oneshot::Receiver<LocationData> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match read_location(&path).await {
            Ok(data) => {
                let _ = tx.send(data);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "location lookup failed"),
        }
    });
    rx
}

/// Hand over the location once it has arrived, without waiting for it.
fn poll_location(pending: &mut Option<oneshot::Receiver<LocationData>>, terminal: &mut Terminal) {
    let Some(rx) = pending.as_mut() else { return };
    match rx.try_recv() {
        Ok(data) => {
            terminal.update_location_data(data);
            *pending = None;
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Closed) => *pending = None,
    }
}

/// Print one result. Returns false once the session should end.
fn emit(result: &CommandResult, json: bool) -> Result<bool, Error> {
    let mut stdout = std::io::stdout();

    if json {
        writeln!(stdout, "{}", serde_json::to_string(result)?)?;
        return Ok(result.action != Some(HostAction::CloseSession));
    }

    if let Some(HostAction::ClearTranscript) = result.action {
        execute!(stdout, term::Clear(term::ClearType::All), cursor::MoveTo(0, 0))?;
    }

    if !result.text.is_empty() || result.graphic.is_some() {
        let text = if stdout.is_terminal() {
            render::to_ansi(result)
        } else {
            render::to_plain(result)
        };
        writeln!(stdout, "{}", text)?;
    }

    match &result.action {
        Some(HostAction::OpenUrl { url }) => writeln!(stdout, "{}", url)?,
        Some(HostAction::CloseSession) => return Ok(false),
        _ => {}
    }
    stdout.flush()?;
    Ok(true)
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    let options = config.terminal_options(host_environment(config.language.clone()));
    let mut terminal = Terminal::with_portfolio(options)?;

    let mut pending = cli
        .location
        .clone()
        .or_else(|| config.location_file.clone())
        .map(spawn_location_lookup);

    if let Some(line) = cli.command {
        if let Some(rx) = pending.take() {
            if let Ok(data) = rx.await {
                terminal.update_location_data(data);
            }
        }
        emit(&terminal.execute_command(&line), cli.json)?;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !cli.json {
            print!("{}", terminal.prompt());
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        poll_location(&mut pending, &mut terminal);
        let result = terminal.execute_command(&line);
        if !emit(&result, cli.json)? {
            break;
        }
    }

    debug!(commands = terminal.history().len(), "session ended");
    Ok(())
}

#[tokio::main]
async fn main() {
    process_start();
    init_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
