//! Single blocking HTTP GET for the search page.
//!
//! Uses the curl crate (libcurl). The easy handle and the body buffer are owned
//! by `fetch_page` and dropped on every return path.

use std::str;
use std::time::Duration;

use crate::error::SearchError;

/// Transport knobs. Everything unset means libcurl defaults, i.e. no overall
/// timeout: a stalled server blocks the caller indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Performs one GET and returns the response body.
///
/// Follows redirects. Any status other than 200 is an error carrying the code.
/// Runs in the current thread.
pub fn fetch_page(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, SearchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                tracing::trace!("header: {}", line.trim_end());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    if code != 200 {
        return Err(SearchError::Status(code));
    }

    Ok(body)
}
