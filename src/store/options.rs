//! store::options
//!
//! Construction-time and per-call configuration.
//!
//! Construction options fix the registry and default formats for the
//! store's lifetime. Per-call options are plain `Default` structs,
//! immutable for the duration of one operation.

use crate::formats::{FormatRegistry, TEXT_TURTLE};
use crate::transport::Method;

/// Configuration fixed at store construction.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Parse and serialize handlers available to the store.
    pub formats: FormatRegistry,

    /// Media type parsed when the response declares none, an unregistered
    /// one, or the caller forces an unregistered one. Assumed valid.
    pub default_parse_format: String,

    /// Media type every write serializes to.
    pub default_write_format: String,

    /// Media type merge serializes to. `None` falls back to
    /// [`default_write_format`](Self::default_write_format).
    pub default_patch_format: Option<String>,

    /// Treat a transport-reported status of `0` on reads as success.
    ///
    /// Some non-network transports (local file loads) complete without a
    /// real status code. Applies to reads only; writes and deletes always
    /// require a 2xx.
    pub treat_status_zero_as_success: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            formats: FormatRegistry::defaults(),
            default_parse_format: TEXT_TURTLE.to_string(),
            default_write_format: TEXT_TURTLE.to_string(),
            default_patch_format: None,
            treat_status_zero_as_success: true,
        }
    }
}

/// Per-call options for [`LdpStore::read`](crate::store::LdpStore::read).
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Parse the response as this media type, overriding the declared
    /// content type and the default. Ignored unless a parser is
    /// registered for it.
    pub forced_content_type: Option<String>,

    /// Capture the response's `ETag` header onto the returned graph.
    pub use_etag: bool,
}

/// Per-call options for [`LdpStore::write`](crate::store::LdpStore::write)
/// and [`LdpStore::merge`](crate::store::LdpStore::merge).
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Verb override for writes. Defaults to PUT. Merge ignores this:
    /// it always issues PATCH.
    pub method: Option<Method>,

    /// Require this entity tag via `If-Match`. Takes precedence over a
    /// graph-carried tag even when [`use_etag`](Self::use_etag) is set.
    pub etag: Option<String>,

    /// Require the graph's own entity tag via `If-Match`, when it
    /// carries one.
    pub use_etag: bool,
}
