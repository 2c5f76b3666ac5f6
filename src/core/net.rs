// src/core/net.rs
// Blocking HTTP GET with reqwest. The archive serves legacy single-byte text.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

pub fn client() -> Result<Client, FetchError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// GET `url` with `query`, fail on non-2xx, return the raw body.
pub fn http_get(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
    timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    let resp = client.get(url).query(query).timeout(timeout).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: resp.url().to_string(), status: status.as_u16() });
    }
    let body = resp.bytes()?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body.to_vec())
}

/// GET and decode as ISO-8859-1, whatever the response headers claim.
pub fn http_get_latin1(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
    timeout: Duration,
) -> Result<String, FetchError> {
    http_get(client, url, query, timeout).map(|body| decode_latin1(&body))
}

/// ISO-8859-1 maps every byte to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_umlauts() {
        let raw = b"Z\xfcrich, Gesch\xe4ftsnummer, Gem\xe4ss \xa7 5";
        assert_eq!(decode_latin1(raw), "Zürich, Geschäftsnummer, Gemäss § 5");
    }

    #[test]
    fn latin1_ascii_passthrough() {
        assert_eq!(decode_latin1(b"VB.2024.00012"), "VB.2024.00012");
    }
}
