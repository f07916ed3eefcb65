//! Location resolution: strategy list, first success wins.
//!
//! # Responsibilities
//! - Try the resolution strategies in their fixed order
//! - Short-circuit on the first strategy that produces a handle
//! - Degrade every lookup failure to "try the next strategy"
//!
//! # Design Decisions
//! - Strategies are plain functions in an ordered slice, not trait
//!   objects; the order is the contract and lives in one place
//! - No strategy may panic or return an error: resolution either
//!   produces a handle or it doesn't

use url::Url;

use crate::host::HostEnvironment;
use crate::resolve::{file_probe, ResourceHandle};

/// Prefix selecting the bundled-resource search path.
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// Resolve a location string to a resource handle.
///
/// Strategy order: context-relative (`/...`), bundled (`classpath:...`),
/// absolute URL, filesystem probe. A location yields at most one handle.
pub fn resolve(location: &str, env: &dyn HostEnvironment) -> Option<ResourceHandle> {
    const STRATEGIES: &[fn(&str, &dyn HostEnvironment) -> Option<ResourceHandle>] = &[
        resolve_context_relative,
        resolve_bundled,
        resolve_url,
        resolve_file,
    ];

    for strategy in STRATEGIES {
        if let Some(handle) = strategy(location, env) {
            tracing::debug!(location, resolved = %handle, "location resolved");
            return Some(handle);
        }
    }
    tracing::debug!(location, "location did not resolve");
    None
}

/// Strategy 1: `/`-prefixed paths against the host's resource namespace.
fn resolve_context_relative(location: &str, env: &dyn HostEnvironment) -> Option<ResourceHandle> {
    if !location.starts_with('/') {
        return None;
    }
    env.resolve_context_resource(location)
}

/// Strategy 2: `classpath:` locations against the bundled search path.
fn resolve_bundled(location: &str, env: &dyn HostEnvironment) -> Option<ResourceHandle> {
    let rest = location.strip_prefix(CLASSPATH_PREFIX)?;
    env.resolve_bundled_resource(rest)
}

/// Strategy 3: the location itself is an absolute URL.
fn resolve_url(location: &str, _env: &dyn HostEnvironment) -> Option<ResourceHandle> {
    // A classpath location that missed in strategy 2 must stay
    // unresolved, not become a URL with scheme "classpath".
    if location.starts_with(CLASSPATH_PREFIX) {
        return None;
    }
    let url = Url::parse(location).ok()?;
    // Single-letter schemes are Windows drive letters, owned by the
    // filesystem probe.
    if url.scheme().len() == 1 {
        return None;
    }
    Some(ResourceHandle::Url(url))
}

/// Strategy 4: the location is a filesystem path.
fn resolve_file(location: &str, _env: &dyn HostEnvironment) -> Option<ResourceHandle> {
    file_probe::probe(location)
}
