//! Student roster, interactive terminal front end.
//!
//! Reads one command per line from stdin, applies it to an in-memory roster
//! and prints the result. Nothing is saved when the process exits.
//!
//! Usage:
//!   roster --config roster.toml

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster_cli::{Command, Flow, HELP, ParseError, execute};
use roster_session::{DEFAULT_CONFIG_FILE, RosterApp, RosterConfig};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Create, edit and search student records in memory")]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RosterConfig::load_from(&args.config);

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.filter))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!(config = %args.config.display(), "Roster starting");
    let mut app = RosterApp::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("Failed to read stdin")?;
        if read == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                warn!("{}", e);
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        if execute(&mut app, command, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    info!(records = app.store().len(), "Roster closed");
    Ok(())
}
