// One submit cycle: validate, fetch, convert.
use crate::{convert, error::Error, validate::is_likely_markdown};

use std::future::Future;

/// Substituted when the input field is left blank.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/luvit/luv/refs/heads/master/docs/docs.md";

/// Runs the pipeline for one submit. The fetch step is passed in so the
/// cycle can be driven without a network in tests.
pub async fn submit<F, Fut>(input: &str, fetch: F) -> Result<String, Error>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, Error>>,
{
    let trimmed = input.trim();
    let url = if trimmed.is_empty() { DEFAULT_URL } else { trimmed };

    if !is_likely_markdown(url) {
        return Err(Error::NotMarkdown);
    }

    let markdown = fetch(url.to_string()).await?;
    convert::to_html(markdown).await
}
