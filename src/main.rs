use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ledger_cli::cli::{handle_ledger_command, load_with_notices, run_interactive, LedgerCommands};
use ledger_cli::config::{LedgerPaths, Settings};
use ledger_cli::reports::{Clock, FixedClock, SystemClock};
use ledger_cli::storage::{open_ledger, Ledger};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal transaction ledger",
    long_about = "Records deposits and payments to a flat file and reports on them: \
                  full listings, deposits or payments only, month/year-to-date and \
                  previous month/year reports, and vendor search."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "LEDGER_CLI_FILE")]
    file: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today for reports and entries
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let mut ledger = match cli.file {
        Some(path) => Ledger::new(path, settings.storage_format),
        None => {
            paths.ensure_directories()?;
            open_ledger(&paths, &settings)
        }
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            println!("Starting Transaction Ledger Application...");
            let load_error = load_with_notices(&mut ledger, &mut io::stdout())?;

            run_interactive(&mut ledger, clock.as_ref(), &settings.currency_symbol)?;

            if load_error.is_some() {
                println!(
                    "Application exited. {} was left unchanged because it could not be loaded.",
                    ledger.path().display()
                );
                return Ok(());
            }

            match ledger.save() {
                Ok(()) => println!(
                    "Application exited. All data saved to {}",
                    ledger.path().display()
                ),
                Err(e) => println!("Error saving transactions: {}", e),
            }
        }
        Commands::Ledger(cmd) => {
            if let Some(e) = load_with_notices(&mut ledger, &mut io::stderr())? {
                return Err(e.into());
            }
            handle_ledger_command(&mut ledger, clock.as_ref(), &settings.currency_symbol, cmd)?;
        }
        Commands::Config => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger.path().display());
            println!();
            println!("Settings:");
            println!("  Storage format:  {:?}", ledger.format());
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
