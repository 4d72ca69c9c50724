//! One search-and-display cycle: status line, search, then table or message.

use std::io::{self, Write};
use std::num::NonZeroUsize;

use emojidb_core::client::{EmojiClient, EmojiSource};
use emojidb_core::config::EmojiDbConfig;
use emojidb_core::console::{Console, Style};
use emojidb_core::table;

/// Terminal result of a run. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No search term given; nothing was fetched.
    Usage,
    /// Fetch, parse or config failure.
    Failed,
    /// Search succeeded with zero emojis.
    Empty,
    /// Table printed with this many emojis.
    Found(usize),
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Found(_) | Outcome::Empty => 0,
            Outcome::Usage | Outcome::Failed => 1,
        }
    }
}

pub fn print_usage<W: Write>(console: &mut Console<W>) -> io::Result<Outcome> {
    console.line(Style::Error, "Error: Please provide a search term.")?;
    console.line(Style::Plain, "Usage: emojidb <search-term>")?;
    Ok(Outcome::Usage)
}

pub(super) fn report_error<W: Write>(
    console: &mut Console<W>,
    message: &str,
) -> io::Result<Outcome> {
    console.line(Style::Error, &format!("❌ Error: {}", message))?;
    Ok(Outcome::Failed)
}

/// Turns a loaded config into a client, or prints why it cannot.
pub fn prepare_client<W: Write>(
    console: &mut Console<W>,
    loaded: anyhow::Result<EmojiDbConfig>,
) -> io::Result<Result<(EmojiClient, EmojiDbConfig), Outcome>> {
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!("config: {:#}", err);
            return report_error(console, &format!("{:#}", err)).map(Err);
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    match EmojiClient::new(&cfg) {
        Ok(client) => Ok(Ok((client, cfg))),
        Err(err) => report_error(console, &err.to_string()).map(Err),
    }
}

/// Joins `words` into a query, searches `source`, and prints the result.
pub fn run_search<S, W>(
    words: &[String],
    source: &S,
    console: &mut Console<W>,
    columns: NonZeroUsize,
) -> io::Result<Outcome>
where
    S: EmojiSource + ?Sized,
    W: Write,
{
    if words.is_empty() {
        return print_usage(console);
    }
    let query = words.join(" ");

    console.line(
        Style::Header,
        &format!("🔎 Searching EmojiDB for: '{}'...", query),
    )?;

    let emojis = match source.search(&query) {
        Ok(emojis) => emojis,
        Err(err) => {
            tracing::warn!("search for {:?} failed: {}", query, err);
            return report_error(console, &err.to_string());
        }
    };

    if emojis.is_empty() {
        console.line(
            Style::Warning,
            &format!("⚠️  No emojis found for '{}'.", query),
        )?;
        return Ok(Outcome::Empty);
    }

    console.blank()?;
    table::render_table(console, &emojis, columns)?;
    console.blank()?;
    console.line(
        Style::Success,
        &format!("✅ Done! Found {} emojis.", emojis.len()),
    )?;
    Ok(Outcome::Found(emojis.len()))
}
