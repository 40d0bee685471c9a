//! CDN source configuration
//!
//! A [`Source`] describes one CDN origin: its host, scheme, optional port,
//! whether the source name is addressed as a subdomain or a path prefix, and
//! the optional signing secrets that turn it into a secure source. Sources
//! are immutable once constructed and cheap to clone; concurrent callers can
//! share one freely.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Default CDN host used when a source is created from just a name.
pub const DEFAULT_HOST: &str = "picdn.net";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_https() -> bool {
    true
}

fn default_subdomains() -> bool {
    true
}

/// Configuration for a CDN source
///
/// # Example
/// ```
/// use picdn::Source;
///
/// let source = Source::new("assets");
/// assert_eq!(source.host(), "assets.picdn.net");
///
/// let source = Source::new("assets").with_subdomains(false).with_port(8080);
/// assert_eq!(source.host(), "picdn.net");
/// assert_eq!(source.path("example.jpeg"), "assets/example.jpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Source name, as registered with the CDN
    pub name: String,
    /// Base CDN host
    #[serde(default = "default_host")]
    pub host: String,
    /// Whether URLs use the https scheme
    #[serde(default = "default_https")]
    pub https: bool,
    /// Optional explicit port
    #[serde(default)]
    pub port: Option<u16>,
    /// Whether the source name is addressed as a subdomain (`name.host`)
    /// instead of a path prefix (`host/name`)
    #[serde(default = "default_subdomains")]
    pub subdomains: bool,
    /// Base64-encoded signing key for secure sources
    #[serde(default)]
    pub secure_key: Option<String>,
    /// Base64-encoded signing salt for secure sources
    #[serde(default)]
    pub secure_salt: Option<String>,
}

impl Source {
    /// Creates a source with the default host, https scheme and subdomain
    /// addressing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: default_host(),
            https: default_https(),
            port: None,
            subdomains: default_subdomains(),
            secure_key: None,
            secure_salt: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_subdomains(mut self, subdomains: bool) -> Self {
        self.subdomains = subdomains;
        self
    }

    /// Attaches base64-encoded signing secrets, making this a secure source.
    pub fn with_secrets(mut self, key: impl Into<String>, salt: impl Into<String>) -> Self {
        self.secure_key = Some(key.into());
        self.secure_salt = Some(salt.into());
        self
    }

    /// URL scheme for this source.
    pub fn scheme(&self) -> &'static str {
        if self.https {
            "https"
        } else {
            "http"
        }
    }

    /// Effective host: `name.host` with subdomain addressing, `host` otherwise.
    pub fn host(&self) -> String {
        if self.subdomains {
            format!("{}.{}", self.name, self.host)
        } else {
            self.host.clone()
        }
    }

    /// Effective path: `path` with subdomain addressing, `name/path` otherwise.
    pub fn path(&self, path: &str) -> String {
        if self.subdomains {
            path.to_string()
        } else {
            format!("{}/{}", self.name, path)
        }
    }

    /// A source is secure when both signing secrets are configured.
    pub fn is_secure(&self) -> bool {
        self.secure_key.is_some() && self.secure_salt.is_some()
    }
}

/// Conversion of source arguments accepted by [`crate::url()`] and
/// [`crate::srcset()`]: a source name (`&str`/`String`) builds a default
/// source on the fly, while `Source`/`&Source` values are used as-is.
pub trait IntoSource<'a> {
    fn into_source(self) -> Cow<'a, Source>;
}

impl<'a> IntoSource<'a> for &'a Source {
    fn into_source(self) -> Cow<'a, Source> {
        Cow::Borrowed(self)
    }
}

impl IntoSource<'static> for Source {
    fn into_source(self) -> Cow<'static, Source> {
        Cow::Owned(self)
    }
}

impl IntoSource<'static> for &str {
    fn into_source(self) -> Cow<'static, Source> {
        Cow::Owned(Source::new(self))
    }
}

impl IntoSource<'static> for String {
    fn into_source(self) -> Cow<'static, Source> {
        Cow::Owned(Source::new(self))
    }
}
