use crate::UrlError;
use url::{Origin, Url};

/// Parses the seed argument into an absolute address
///
/// Only `http` and `https` seeds with a host are accepted, since the seed's
/// host names the output folder and its origin scopes link discovery.
///
/// # Examples
///
/// ```
/// use sumi_scribe::url::parse_seed;
///
/// let seed = parse_seed("https://example.com/docs").unwrap();
/// assert_eq!(seed.as_str(), "https://example.com/docs");
/// assert!(parse_seed("/docs").is_err());
/// ```
pub fn parse_seed(seed: &str) -> Result<Url, UrlError> {
    let url = Url::parse(seed.trim())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Resolves a possibly-relative link against a base address
///
/// Standard URL reference resolution applies: relative paths, protocol-relative
/// references and absolute URLs are all accepted. Query and fragment are kept
/// as written.
///
/// # Examples
///
/// ```
/// use sumi_scribe::url::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(resolve("setup?x=1", &base).unwrap().as_str(), "https://example.com/docs/setup?x=1");
/// assert_eq!(resolve("//cdn.example.com/a", &base).unwrap().as_str(), "https://cdn.example.com/a");
/// ```
pub fn resolve(href: &str, base: &Url) -> Result<Url, UrlError> {
    Ok(base.join(href)?)
}

/// Projects an address onto its origin (scheme, host, port)
pub fn origin_of(url: &Url) -> Origin {
    url.origin()
}

/// Returns true if both addresses share scheme, host and port
///
/// Opaque origins (`mailto:`, `javascript:`, `data:` and friends) never
/// compare equal, so such links are never considered same-origin.
pub fn same_origin(a: &Url, b: &Url) -> bool {
    origin_of(a) == origin_of(b)
}
