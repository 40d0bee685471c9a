//! URL assembly
//!
//! Composes one final URL from a source configuration, a resource path and a
//! parameter set, signing the result when the source is secure. The signature
//! is always the last query parameter and is computed over the normalized
//! (unencoded) path plus the already-serialized query string.

use tracing::trace;

use crate::encode::{encode_path, encode_query, normalize_path};
use crate::error::Result;
use crate::params::Params;
use crate::signature;
use crate::source::Source;

/// Builds the URL for `path` on `source` with the given parameters.
pub fn build(source: &Source, path: &str, params: &Params) -> Result<String> {
    let normalized_path = normalize_path(path);
    let normalized_params = params.dasherized();

    let encoded_path = encode_path(normalized_path);
    let query = query_string(source, normalized_path, &normalized_params)?;

    let mut url = format!("{}://{}", source.scheme(), source.host());
    if let Some(port) = source.port {
        url.push(':');
        url.push_str(&port.to_string());
    }
    url.push('/');
    url.push_str(&source.path(&encoded_path));
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }

    trace!(source = %source.name, path = normalized_path, "built url");

    Ok(url)
}

/// Serialized query for the URL, or `None` when there is nothing to render.
///
/// Secure sources always carry a query: even with no parameters the signature
/// itself is emitted as the sole entry.
fn query_string(source: &Source, path: &str, params: &Params) -> Result<Option<String>> {
    if params.is_empty() {
        if source.is_secure() {
            let token = signature::generate(source, path, None)?;
            return Ok(Some(format!("signature={}", token)));
        }
        return Ok(None);
    }

    let query = encode_query(params)?;
    if source.is_secure() {
        let token = signature::generate(source, path, Some(&query))?;
        return Ok(Some(format!("{}&signature={}", query, token)));
    }
    Ok(Some(query))
}
