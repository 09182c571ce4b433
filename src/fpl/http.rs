//! Request helper shared by every accessor: URL building, one GET, JSON decode.

use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::Endpoint;
use crate::{FplError, Result};


/// Query for endpoints that take no parameters.
pub const NO_QUERY: &[(&str, &str)] = &[];

/// Parse and check a base URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| FplError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    check_base_url(url)
}

/// A base URL must be able to carry path segments (`mailto:` and the like can't).
pub fn check_base_url(url: Url) -> Result<Url> {
    if url.cannot_be_a_base() {
        return Err(FplError::InvalidBaseUrl {
            url: url.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        });
    }

    Ok(url)
}

/// Append the endpoint's segments to the base URL's path.
///
/// A trailing slash on the base is absorbed, so `https://host/api/` and
/// `https://host/api` both yield `https://host/api/entry/1`. Any query or
/// fragment on the base is dropped.
pub fn build_url(base: &Url, endpoint: &Endpoint) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| FplError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(endpoint.segments());

    Ok(url)
}

/// GET `endpoint` under `base` and decode the body as JSON.
///
/// The status code is not inspected and nothing is retried: whatever JSON the
/// server sends back is returned unchanged. A body that is not JSON surfaces
/// as [`FplError::Json`], a transport failure as [`FplError::Http`].
pub async fn get_json<Q>(
    client: &Client,
    base: &Url,
    endpoint: Endpoint,
    query: &Q,
) -> Result<Value>
where
    Q: Serialize + ?Sized,
{
    let url = build_url(base, &endpoint)?;
    let request = client.get(url).query(query).build()?;

    debug!(endpoint = endpoint.name(), url = %request.url(), "GET");

    let response = client.execute(request).await?;
    let status = response.status();
    let body = response.bytes().await?;

    debug!(
        endpoint = endpoint.name(),
        status = status.as_u16(),
        bytes = body.len(),
        "response received"
    );

    let value: Value = serde_json::from_slice(&body)?;
    note_error_field(endpoint, &value);

    Ok(value)
}

/// Upstream error payloads are data, not failures. Only record that one was seen.
fn note_error_field(endpoint: Endpoint, value: &Value) {
    if let Some(error) = value.as_object().and_then(|map| map.get("error")) {
        debug!(endpoint = endpoint.name(), %error, "response carries an error field");
    }
}
