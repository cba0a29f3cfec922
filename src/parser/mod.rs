pub mod dom;
pub mod extract;

use crate::error::{CollectError, ParseError};
use crate::fetch::Fetch;
use crate::model::ErrorDetail;

pub use extract::{curl::Curl, linux::Linux, windows::Windows};

/// A documentation site with its own markup conventions and output file.
pub trait Source {
    /// Short name used for logging and the CLI.
    fn name(&self) -> &'static str;

    /// Pages to collect, in output order.
    fn urls(&self) -> &'static [&'static str];

    fn file_name(&self) -> &'static str;

    /// Pull records out of one page of this source, in document order.
    fn parse(&self, html: &str) -> Result<Vec<ErrorDetail>, ParseError>;

    /// Fetch → parse for a single page.
    fn extract(&self, fetcher: &dyn Fetch, url: &str) -> Result<Vec<ErrorDetail>, CollectError> {
        let html = fetcher.get(url)?;
        self.parse(&html).map_err(|source| CollectError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

/// Parse a decimal error code, ignoring surrounding whitespace.
pub fn parse_code(text: &str) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyCode);
    }
    trimmed.parse().map_err(|source| ParseError::InvalidCode {
        value: trimmed.to_string(),
        source,
    })
}
