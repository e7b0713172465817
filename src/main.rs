use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hledger_tools::cli::{
    handle_accounts_command, handle_add_command, handle_ask_command, handle_balance_command,
    handle_import_command, handle_review_command, AskArgs, ImportArgs, ReviewArgs,
};
use hledger_tools::config::Settings;

#[derive(Parser)]
#[command(
    name = "hledger-tools",
    version,
    about = "Companion tools for hledger journals",
    long_about = "hledger-tools adds an interactive transaction entry form to \
                  hledger, plus helpers that query the journal and build prompts \
                  for language-model assisted review and import."
)]
struct Cli {
    /// Path to the hledger journal file
    #[arg(short = 'j', long, env = "LEDGER_FILE", global = true)]
    journal: Option<PathBuf>,

    /// hledger executable to run
    #[arg(long = "hledger", env = "HLEDGER_BIN", global = true)]
    hledger_bin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a transaction in an interactive form
    Add,

    /// List the accounts used in the journal
    Accounts,

    /// Show the balance sheet with percentages
    #[command(alias = "bs")]
    Balance,

    /// Build a prompt asking a question about your finances
    Ask(AskArgs),

    /// Build a prompt converting raw data into journal entries
    Import(ImportArgs),

    /// Build a prompt reviewing your financial health
    Review(ReviewArgs),

    /// Show the effective configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    hledger_tools::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::new(cli.journal, cli.hledger_bin)?;
    tracing::debug!(
        journal = %settings.journal.display(),
        hledger = %settings.hledger_bin,
        "settings resolved"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Add => {
            drop(out);
            handle_add_command(&settings)?;
        }
        Commands::Accounts => {
            handle_accounts_command(&settings.hledger(), &mut out)?;
        }
        Commands::Balance => {
            handle_balance_command(&settings.hledger(), &mut out)?;
        }
        Commands::Ask(args) => {
            handle_ask_command(&settings, &args, &mut out)?;
        }
        Commands::Import(args) => {
            handle_import_command(&settings, &args, &mut out)?;
        }
        Commands::Review(args) => {
            handle_review_command(&settings, &args, &mut out)?;
        }
        Commands::Config { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
            } else {
                writeln!(out, "hledger-tools Configuration")?;
                writeln!(out, "===========================")?;
                writeln!(out, "Journal file:   {}", settings.journal.display())?;
                writeln!(out, "hledger binary: {}", settings.hledger_bin)?;
            }
        }
    }

    Ok(())
}
