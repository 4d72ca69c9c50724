//! EmojiDB search client: URL builder, fetch and extraction in one call.

use crate::config::EmojiDbConfig;
use crate::error::SearchError;
use crate::extract::{self, DocumentQuery, ScraperQuery};
use crate::fetch::{self, FetchOptions};
use crate::query;

/// Anything that can turn a query into an ordered emoji list.
pub trait EmojiSource {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

/// Scrapes the EmojiDB search page.
pub struct EmojiClient<Q = ScraperQuery> {
    base_url: String,
    max_emojis: usize,
    fetch: FetchOptions,
    document_query: Q,
}

impl EmojiClient<ScraperQuery> {
    /// Client for the configured host using the `.emoji-ctn .emoji` query.
    pub fn new(cfg: &EmojiDbConfig) -> Result<Self, SearchError> {
        cfg.validate()?;
        Ok(Self::with_query(cfg, ScraperQuery::emoji_items()?))
    }
}

impl<Q: DocumentQuery> EmojiClient<Q> {
    pub fn with_query(cfg: &EmojiDbConfig, document_query: Q) -> Self {
        Self {
            base_url: cfg.base_url.clone(),
            max_emojis: cfg.max_emojis,
            fetch: cfg.fetch_options(),
            document_query,
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        query::build_search_url(&self.base_url, query)
    }
}

impl<Q: DocumentQuery> EmojiSource for EmojiClient<Q> {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.search_url(query);
        tracing::info!("searching {}", url);
        let body = fetch::fetch_page(&url, &self.fetch)?;
        Ok(extract::extract_emojis(
            &self.document_query,
            &body,
            self.max_emojis,
        ))
    }
}
