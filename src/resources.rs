//! Bundled fallback configuration documents.
//!
//! One console configuration document per severity level, compiled into
//! the crate. These back the `classpath:` resolution strategy's default
//! search path and the severity-keyed fallback.

use rust_embed::RustEmbed;

use crate::level::Level;
use crate::resolve::ResourceHandle;

/// Prefix under which the fallback documents live in the bundled set.
pub const FALLBACK_PREFIX: &str = "fallback";

#[derive(RustEmbed)]
#[folder = "resources"]
struct Bundled;

/// Bundled path of the fallback document for `level`.
pub fn fallback_path(level: Level) -> String {
    format!("{FALLBACK_PREFIX}/logbackwebfragment-{level}.xml")
}

/// Look up `path` in the bundled resource set.
pub fn lookup(path: &str) -> Option<ResourceHandle> {
    if Bundled::get(path).is_some() {
        Some(ResourceHandle::Bundled(path.to_string()))
    } else {
        None
    }
}

/// Read the bytes of a bundled resource.
pub fn read(path: &str) -> Option<Vec<u8>> {
    Bundled::get(path).map(|asset| asset.data.into_owned())
}
