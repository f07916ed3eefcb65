//! Host environment collaborator.
//!
//! # Responsibilities
//! - Supply init parameters (location, default level)
//! - Resolve context-relative and bundled resource paths
//! - Carry the host's own diagnostic log channel
//!
//! # Design Decisions
//! - One trait seam for everything the host contributes, so the whole
//!   startup flow is testable against an in-memory fake
//! - Default methods cover the common case: no context namespace, the
//!   crate's own bundled set, environment-variable substitution

use crate::resolve::ResourceHandle;
use crate::{resources, subst};

/// The hosting environment a startup or shutdown event runs against.
pub trait HostEnvironment {
    /// Look up a named init parameter.
    fn init_param(&self, name: &str) -> Option<String>;

    /// Resolve a `/`-prefixed path against the host's own resource
    /// namespace. Hosts without such a namespace return `None`.
    fn resolve_context_resource(&self, _path: &str) -> Option<ResourceHandle> {
        None
    }

    /// Resolve a path against the bundled-resource search path.
    ///
    /// Defaults to the crate's embedded set; hosts that ship their own
    /// bundled configurations can override.
    fn resolve_bundled_resource(&self, path: &str) -> Option<ResourceHandle> {
        resources::lookup(path)
    }

    /// Apply placeholder substitution to a raw location string.
    fn substitute(&self, raw: &str) -> String {
        subst::expand_env(raw)
    }

    /// Write a one-line diagnostic to the host's own log channel.
    fn log(&self, message: &str);
}

/// Environment backed by process environment variables.
///
/// Init parameters are read verbatim from `std::env`, and host
/// diagnostics go through `tracing`. This is the plain-process
/// counterpart of a container-managed environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl HostEnvironment for ProcessEnvironment {
    fn init_param(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}
