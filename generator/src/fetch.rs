//! Network fallback for entries without a usable inline integrity.

use log::debug;
use offline_manifest::integrity;

use crate::error::EntryError;

/// Blocking GET of `url`, sha512 of the full body as lowercase hex.
///
/// No retry and no explicit timeout, the transport default applies. An
/// incomplete body read surfaces as an error here, so a truncated
/// download never produces a hash.
pub fn fetch_sha512(url: &str) -> Result<String, EntryError> {
    debug!("fetching {url} for digest");

    let response =
        reqwest::blocking::get(url).map_err(|e| EntryError::Fetch(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EntryError::Fetch(format!("{url}: status {status}")));
    }

    let body = response
        .bytes()
        .map_err(|e| EntryError::Fetch(format!("{url}: {e}")))?;

    Ok(integrity::sha512_hex(&body))
}
