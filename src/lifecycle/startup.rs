//! Startup orchestration.
//!
//! # Responsibilities
//! - Read the location and default-level params from the host
//! - Drive resolution and application of the primary configuration
//! - Fall back to a bundled severity-keyed document when enabled
//! - Log a host diagnostic on every path
//!
//! # Design Decisions
//! - One shot, run to completion: no retries, no background work
//! - Every failure ends in a diagnostic, never a propagated error
//! - The host guarantees a single, non-overlapping startup event, so
//!   no locking guards the process-wide subsystem

use crate::applier;
use crate::host::HostEnvironment;
use crate::level::Level;
use crate::resolve::{self, ResourceHandle, CLASSPATH_PREFIX};
use crate::resources;
use crate::subsystem::LoggingSubsystem;

/// Init parameter naming the primary configuration location.
pub const LOCATION_PARAM: &str = "LOG_CONFIG_LOCATION";

/// Init parameter enabling the bundled fallback. Any present value
/// enables it; the value selects the severity level (empty means info).
pub const DEFAULT_LEVEL_PARAM: &str = "LOG_CONFIG_DEFAULT";

/// Observable result of one startup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// The configuration at the resolved handle is active.
    Applied(ResourceHandle),
    /// The bundled document for this level is active.
    FallbackApplied(Level),
    /// The active logging binding is not one this crate can configure.
    WrongBinding,
    /// No configuration was applied; the subsystem keeps its prior state.
    NotConfigured,
}

/// Run one startup event: resolve, apply, fall back.
///
/// Never panics and never returns an error; every failure path ends in
/// a diagnostic on the host's log channel and a terminal outcome.
pub fn on_start(
    env: &dyn HostEnvironment,
    subsystem: &mut dyn LoggingSubsystem,
) -> StartupOutcome {
    if !subsystem.is_expected_binding() {
        env.log(
            "Can not configure logging: the active logging binding is not the expected implementation.",
        );
        return StartupOutcome::WrongBinding;
    }

    let location = env
        .init_param(LOCATION_PARAM)
        .map(|raw| env.substitute(&raw));

    if let Some(location) = location.as_deref() {
        if let Some(handle) = resolve::resolve(location, env) {
            env.log(&format!(
                "Configuring logging. Config location = \"{location}\", resolved = \"{handle}\"."
            ));
            match applier::apply(&handle, subsystem) {
                Ok(()) => return StartupOutcome::Applied(handle),
                Err(error) => {
                    env.log(&format!(
                        "Failed to configure logging from \"{handle}\": {error}"
                    ));
                }
            }
        }
    }

    fall_back(env, subsystem, location.as_deref())
}

/// Apply the bundled default configuration, if enabled.
fn fall_back(
    env: &dyn HostEnvironment,
    subsystem: &mut dyn LoggingSubsystem,
    location: Option<&str>,
) -> StartupOutcome {
    let Some(default_param) = env.init_param(DEFAULT_LEVEL_PARAM) else {
        env.log(&format!(
            "Can not configure logging. Could not find logging config, config location = {location:?}."
        ));
        return StartupOutcome::NotConfigured;
    };

    let level = Level::parse(&default_param);
    env.log(&format!(
        "Configuring logging default config for level [{level}]. Could not find logging config, config location = {location:?}."
    ));

    let bundled_location = format!("{CLASSPATH_PREFIX}{}", resources::fallback_path(level));
    let Some(handle) = resolve::resolve(&bundled_location, env) else {
        env.log(&format!(
            "Can not configure logging: bundled default \"{bundled_location}\" is missing."
        ));
        return StartupOutcome::NotConfigured;
    };

    match applier::apply(&handle, subsystem) {
        Ok(()) => StartupOutcome::FallbackApplied(level),
        Err(error) => {
            env.log(&format!(
                "Failed to configure logging default for level [{level}]: {error}"
            ));
            StartupOutcome::NotConfigured
        }
    }
}
