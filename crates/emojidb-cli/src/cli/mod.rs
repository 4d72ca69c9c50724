//! CLI for the EmojiDB search tool.

mod search;

use anyhow::Result;
use clap::Parser;
use emojidb_core::config;
use emojidb_core::console::Console;

pub use search::{prepare_client, print_usage, run_search, Outcome};

/// Search EmojiDB and print the matching emojis as a table.
#[derive(Debug, Parser)]
#[command(name = "emojidb", version)]
#[command(about = "Search EmojiDB and print matching emojis", long_about = None)]
pub struct Cli {
    /// Search term. All words are joined with spaces.
    #[arg(
        value_name = "SEARCH-TERM",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

/// Parses process arguments and runs one search cycle.
pub fn run_from_args() -> Result<Outcome> {
    let cli = Cli::parse();
    let mut console = Console::stdout();

    if cli.words.is_empty() {
        return Ok(print_usage(&mut console)?);
    }

    let (client, cfg) = match prepare_client(&mut console, config::load())? {
        Ok(prepared) => prepared,
        Err(outcome) => return Ok(outcome),
    };

    let outcome = run_search(&cli.words, &client, &mut console, cfg.columns)?;
    console.flush()?;
    Ok(outcome)
}
