//! Emoji extraction from the search result page.
//!
//! The page lists results as `.emoji` items inside `.emoji-ctn` containers.
//! That structure is an unversioned external contract: if it changes, fewer or
//! no matches come back rather than an error.

use scraper::{Html, Selector};

use crate::error::SearchError;

/// Container/item pattern of the EmojiDB result page.
pub const EMOJI_ITEM_SELECTOR: &str = ".emoji-ctn .emoji";

/// Accepted tokens are strictly shorter than this many UTF-8 bytes. Admits a
/// single glyph (up to 4 bytes) and rejects text labels.
pub const MAX_EMOJI_BYTES: usize = 5;

/// Given raw HTML, returns the text of every matching element in document order.
pub trait DocumentQuery {
    fn matching_texts(&self, html: &[u8]) -> Vec<String>;
}

/// CSS-selector backed query using the `scraper` crate.
#[derive(Debug, Clone)]
pub struct ScraperQuery {
    selector: Selector,
}

impl ScraperQuery {
    pub fn new(selector: &str) -> Result<Self, SearchError> {
        let selector =
            Selector::parse(selector).map_err(|e| SearchError::Selector(e.to_string()))?;
        Ok(Self { selector })
    }

    /// Query for `.emoji-ctn .emoji`.
    pub fn emoji_items() -> Result<Self, SearchError> {
        Self::new(EMOJI_ITEM_SELECTOR)
    }
}

impl DocumentQuery for ScraperQuery {
    fn matching_texts(&self, html: &[u8]) -> Vec<String> {
        let source = String::from_utf8_lossy(html);
        let doc = Html::parse_document(&source);
        doc.select(&self.selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}

/// Filters raw element texts down to emoji candidates.
///
/// Each text is trimmed; it is kept if non-empty and shorter than
/// [`MAX_EMOJI_BYTES`]. Once `max` entries are accepted the rest are skipped.
/// Duplicates are kept.
pub fn collect_emojis<I, S>(texts: I, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut emojis = Vec::new();
    for text in texts {
        if emojis.len() >= max {
            break;
        }
        let token = text.as_ref().trim();
        if !token.is_empty() && token.len() < MAX_EMOJI_BYTES {
            emojis.push(token.to_string());
        }
    }
    emojis
}

/// Runs `query` over `html` and filters the matches.
pub fn extract_emojis<Q: DocumentQuery + ?Sized>(
    query: &Q,
    html: &[u8],
    max: usize,
) -> Vec<String> {
    let texts = query.matching_texts(html);
    let emojis = collect_emojis(&texts, max);
    tracing::debug!(
        "extracted {} emojis from {} matching nodes",
        emojis.len(),
        texts.len()
    );
    emojis
}
