//! Path and query encoding
//!
//! Paths are percent-encoded segment by segment. A path that is itself an
//! absolute web URI is encoded as a single opaque component, which is how a
//! full URL is embedded as a nested resource (for example a watermark
//! reference). Queries are serialized as
//! `application/x-www-form-urlencoded`, preserving insertion order and
//! rendering explicitly empty values as bare keys.

use crate::error::{Error, Result};
use crate::params::{Params, Value};

/// Strips all leading and trailing slashes; internal slashes are kept.
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Whether a path is an absolute `http`/`https` URI (scheme is
/// case-insensitive).
pub fn is_web_uri(path: &str) -> bool {
    let mut scheme_end = 0;
    for (i, c) in path.char_indices() {
        if !c.is_ascii_alphabetic() {
            scheme_end = i;
            break;
        }
    }
    let scheme = &path[..scheme_end];
    let rest = &path[scheme_end..];
    rest.starts_with("://")
        && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
}

/// Percent-encodes a normalized path.
///
/// A web URI becomes one opaque component; anything else is encoded per
/// segment so internal slashes survive.
pub fn encode_path(path: &str) -> String {
    if is_web_uri(path) {
        urlencoding::encode(path).into_owned()
    } else {
        path.split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Serializes parameters as a www-form query string in insertion order.
///
/// `Value::Empty` renders as a bare key with no `=`. Multi-values (lists and
/// ranges) have no single-URL rendering; they must be expanded through the
/// srcset path first.
pub fn encode_query(params: &Params) -> Result<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        match value {
            Value::Empty => {
                serializer.append_key_only(key);
            }
            Value::List(_) | Value::Range(..) => {
                return Err(Error::InvalidParams(format!(
                    "{} as a list or range cannot render into a single URL; expand it through srcset",
                    key
                )));
            }
            scalar => {
                // render() is Some for every scalar variant
                if let Some(rendered) = scalar.render() {
                    serializer.append_pair(key, &rendered);
                }
            }
        }
    }
    Ok(serializer.finish())
}
