//! Client-side URL builder for the picdn image CDN
//!
//! Generates ready-to-use delivery URLs on the caller's side, with no network
//! round trips:
//!
//! - single URLs with arbitrary transformation parameters, via [`url()`];
//! - whole `srcset` attribute values, via [`srcset()`], expanding width, dpr
//!   and quality lists/ranges into ordered candidate lists;
//! - HMAC-SHA256 signed URLs when the [`Source`] carries signing secrets;
//! - helper formatters for [`color`] and [`position`] parameter values.
//!
//! # Examples
//!
//! ```
//! use picdn::{url, Params};
//!
//! let u = url("assets", "example.jpeg", Params::new().with("width", 500)).unwrap();
//! assert_eq!(u, "https://assets.picdn.net/example.jpeg?width=500");
//! ```
//!
//! A width range expands into a geometric srcset ladder:
//!
//! ```
//! use picdn::{srcset, Params};
//!
//! let s = srcset("assets", "example.jpeg", Params::new().with("width", 100..=200)).unwrap();
//! assert!(s.starts_with("https://assets.picdn.net/example.jpeg?width=100 100w,\n"));
//! assert!(s.ends_with("https://assets.picdn.net/example.jpeg?width=200 200w"));
//! ```
//!
//! All operations are pure functions over their inputs; a [`Source`] can be
//! built once and shared across threads.

pub mod color;
mod encode;
pub mod error;
pub mod params;
pub mod position;
pub mod sequence;
pub mod signature;
pub mod source;
pub mod srcset;
mod url;

pub use error::{Error, Result};
pub use params::{Params, Value};
pub use source::{IntoSource, Source, DEFAULT_HOST};

/// Builds the delivery URL for `path` with the given transformation
/// parameters.
///
/// `source` can be a [`Source`] (by value or reference) or a plain source
/// name, which uses the default host over https with subdomain addressing.
/// Parameter keys written with underscores are normalized to hyphens, and
/// insertion order is preserved in the query string. When the source carries
/// signing secrets the URL gets a trailing `signature` parameter.
///
/// Fails when a parameter holds a list or range (those only make sense for
/// [`srcset()`]) or when the signing secrets are not valid base64.
pub fn url<'a>(source: impl IntoSource<'a>, path: &str, params: Params) -> Result<String> {
    let source = source.into_source();
    url::build(source.as_ref(), path, &params)
}

/// Builds the value of an HTML `srcset` attribute for `path`: one URL plus
/// width (`Nw`) or density (`Nx`) descriptor per line, joined with `",\n"`.
///
/// The expansion axis follows the shape of the size parameters; see the
/// [`srcset`](mod@crate::srcset) module docs for the full rules.
///
/// ```
/// use picdn::{srcset, Params};
///
/// let params = Params::new().with("width", vec![400, 800]).with("format", "webp");
/// assert_eq!(
///     srcset("assets", "example.jpeg", params).unwrap(),
///     "https://assets.picdn.net/example.jpeg?width=400&format=webp 400w,\n\
///      https://assets.picdn.net/example.jpeg?width=800&format=webp 800w"
/// );
/// ```
pub fn srcset<'a>(source: impl IntoSource<'a>, path: &str, params: Params) -> Result<String> {
    let source = source.into_source();
    srcset::render(source.as_ref(), path, &params)
}
