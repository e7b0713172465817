//! Prompt commands
//!
//! `ask`, `import` and `review` gather ledger data, build a prompt and print
//! it for an external model client.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::ToolsResult;
use crate::hledger::AccountSource;
use crate::prompt::{ask_prompt, import_prompt, review_prompt, ChatPrompt, DEFAULT_MODEL};
use crate::storage::{read_optional, read_text};

/// Output options shared by the prompt commands
#[derive(Args, Debug, Clone)]
pub struct PromptOutput {
    /// Print a chat-completions request body instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Model named in the JSON request body
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl PromptOutput {
    fn write(&self, prompt: &ChatPrompt, out: &mut impl Write) -> ToolsResult<()> {
        if self.json {
            writeln!(out, "{}", prompt.to_json(&self.model)?)?;
        } else {
            write!(out, "{}", prompt.to_text())?;
        }
        Ok(())
    }
}

/// Arguments of `ask`
#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Question about your finances
    pub question: String,

    /// Extra context file (goals, notes)
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    #[command(flatten)]
    pub output: PromptOutput,
}

/// Arguments of `import`
#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Raw transactions to convert (CSV, JSON, bank export)
    pub source: PathBuf,

    /// Extra context file (categorisation hints)
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    /// Include the whole journal in the prompt
    #[arg(long)]
    pub include_journal: bool,

    #[command(flatten)]
    pub output: PromptOutput,
}

/// Arguments of `review`
#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    /// Extra context file (goals, notes)
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    #[command(flatten)]
    pub output: PromptOutput,
}

/// Contents of the context file, or empty when absent or unreadable
fn load_context(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return String::new();
    };
    match read_optional(path, "context file") {
        Some(context) => {
            eprintln!("Using context file: {}", path.display());
            context
        }
        None => String::new(),
    }
}

/// Handle the ask command
pub fn handle_ask_command(settings: &Settings, args: &AskArgs, out: &mut impl Write) -> ToolsResult<()> {
    let balance = settings.hledger().balance_sheet()?;
    let context = load_context(args.context.as_deref());

    let prompt = ask_prompt(&balance, &context, &args.question);
    args.output.write(&prompt, out)
}

/// Handle the review command
pub fn handle_review_command(
    settings: &Settings,
    args: &ReviewArgs,
    out: &mut impl Write,
) -> ToolsResult<()> {
    let balance = settings.hledger().balance_sheet()?;
    let context = load_context(args.context.as_deref());

    let prompt = review_prompt(&balance, &context);
    args.output.write(&prompt, out)
}

/// Handle the import command
pub fn handle_import_command(
    settings: &Settings,
    args: &ImportArgs,
    out: &mut impl Write,
) -> ToolsResult<()> {
    let source = read_text(&args.source)?;
    let accounts = settings.hledger().list_accounts()?;
    let context = load_context(args.context.as_deref());

    let journal = if args.include_journal {
        read_optional(&settings.journal, "journal")
    } else {
        None
    };

    let prompt = import_prompt(&accounts, &source, &context, journal.as_deref());
    args.output.write(&prompt, out)
}
