// HTTP GET for remote Markdown documents.
use crate::error::Error;

use actix_web::web::Data;
use awc::Client;
use log::debug;

/// Refuse to buffer bodies beyond this size.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub async fn fetch_markdown(url: &str, client: Data<Client>) -> Result<String, Error> {
    debug!("Fetching markdown from {}", url);

    let mut response = client
        .get(url)
        .insert_header(("User-Agent", "mdview"))
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }

    let body = response
        .body()
        .limit(BODY_LIMIT)
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    // Decode as text the way a browser would, replacing invalid sequences.
    Ok(String::from_utf8_lossy(&body).into_owned())
}
