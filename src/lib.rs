//! Logging bootstrap: resolve a configuration location, apply it.
//!
//! Resolves a logging-configuration location string to a loadable
//! resource and applies it to a logging subsystem at application
//! startup, with an optional fallback to a bundled default
//! configuration keyed by severity level.
//!
//! # Architecture Overview
//!
//! ```text
//!   host environment (init params, resource namespace, log channel)
//!        │
//!        │  LOG_CONFIG_LOCATION            LOG_CONFIG_DEFAULT
//!        ▼                                        │
//!   ┌──────────┐   location    ┌───────────────┐  │ level
//!   │ lifecycle│──────────────▶│    resolve    │  │
//!   │ startup  │               │ 1 context  /..│  │
//!   │          │◀──────────────│ 2 classpath:  │◀─┘ (fallback goes
//!   └────┬─────┘ ResourceHandle│ 3 absolute URL│     through the same
//!        │                     │ 4 file probe  │     bundled strategy)
//!        │                     └───────────────┘
//!        ▼
//!   ┌──────────┐  stop → feed document → print diagnostics
//!   │ applier  │─────────────────────────────────────────────▶ logging
//!   └──────────┘                                               subsystem
//! ```
//!
//! Location forms, as accepted by [`resolve::resolve`]:
//! - `/WEB-INF/log.xml` — resolved by the host's resource namespace
//! - `classpath:foo/log.xml` — resolved in the bundled resource set
//! - `file:/opt/conf/log.xml` — used as a URL directly
//! - `/opt/conf/log.xml` — absolute file
//! - `log.xml` — file relative to the process working directory
//!
//! Placeholders (`${HOME}/log.xml`) are expanded before resolution.
//!
//! If `LOG_CONFIG_DEFAULT` is set (to `off`, `error`, `warn`, `info`,
//! `debug`, `trace`, or anything else meaning `info`) and the location
//! yields no active configuration, a bundled console configuration for
//! that level is applied instead. Without it, a failed resolution
//! leaves the subsystem unconfigured and logs a diagnostic.

// Core flow
pub mod applier;
pub mod lifecycle;
pub mod resolve;

// Collaborator seams
pub mod host;
pub mod subsystem;

// Supporting pieces
pub mod level;
pub mod resources;
pub mod subst;

pub use applier::ApplyError;
pub use host::{HostEnvironment, ProcessEnvironment};
pub use level::Level;
pub use lifecycle::{on_start, on_stop, StartupOutcome, DEFAULT_LEVEL_PARAM, LOCATION_PARAM};
pub use resolve::{ResourceError, ResourceHandle};
pub use subsystem::{LoggingSubsystem, SubsystemError};
