//! Output identity derivation
//!
//! Maps an address to the folder and file its converted document is written to.
//! Both mappings are pure string transforms of the address, so the same address
//! always lands on the same file and re-running a crawl overwrites in place.
//!
//! # Collisions
//!
//! Only the path component takes part in the file identity. Addresses that
//! differ solely in their query string or fragment (`/list?page=1` and
//! `/list?page=2`) map to the same file, and whichever is written last wins.
//! A trailing slash is significant: `/docs` and `/docs/` map to `_docs.md` and
//! `_docs_.md` respectively.

use std::path::{Path, PathBuf};
use url::Url;

/// Extension appended to every output document
pub const DOCUMENT_EXTENSION: &str = "md";

/// Path used in place of an empty or root path component
const INDEX_PATH: &str = "/index";

/// Derives the destination folder name from the seed's host
///
/// Every `.` in the host becomes `_`. The `:` separators of an IPv6 literal
/// are replaced too, and its brackets dropped, so the result is always a single
/// path segment. The port is not part of the folder name.
///
/// # Examples
///
/// ```
/// use sumi_scribe::url::folder_identity;
/// use url::Url;
///
/// let seed = Url::parse("https://docs.example.com:8443/intro").unwrap();
/// assert_eq!(folder_identity(&seed), "docs_example_com");
/// ```
pub fn folder_identity(seed: &Url) -> String {
    seed.host_str()
        .unwrap_or_default()
        .chars()
        .filter(|c| !matches!(c, '[' | ']'))
        .map(|c| if c == '.' || c == ':' { '_' } else { c })
        .collect()
}

/// Derives the document path for an address, joined under `folder`
///
/// Every `/` in the address path becomes `_`; an empty or root path becomes
/// `index`. The document extension is appended.
///
/// # Examples
///
/// ```
/// use sumi_scribe::url::file_identity;
/// use std::path::Path;
/// use url::Url;
///
/// let page = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(file_identity(&page, "example_com"), Path::new("example_com/_docs_intro.md"));
///
/// let root = Url::parse("https://example.com/").unwrap();
/// assert_eq!(file_identity(&root, "example_com"), Path::new("example_com/_index.md"));
/// ```
pub fn file_identity(url: &Url, folder: &str) -> PathBuf {
    Path::new(folder).join(file_name(url))
}

/// Builds the bare file name (no folder) for an address
fn file_name(url: &Url) -> String {
    let path = match url.path() {
        "" | "/" => INDEX_PATH,
        path => path,
    };

    format!("{}.{}", path.replace('/', "_"), DOCUMENT_EXTENSION)
}

/// Destination of one converted page, relative to the output root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationPath {
    /// Per-origin folder name
    pub folder: String,

    /// Document file name inside the folder
    pub file: String,
}

impl DestinationPath {
    /// Computes the destination for `url` inside `folder`
    pub fn new(url: &Url, folder: &str) -> Self {
        Self {
            folder: folder.to_string(),
            file: file_name(url),
        }
    }

    /// Returns the relative path `folder/file`
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.folder).join(&self.file)
    }
}
