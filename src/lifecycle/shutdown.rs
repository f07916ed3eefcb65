//! Shutdown hook for the logging subsystem.

use crate::subsystem::LoggingSubsystem;

/// Run one shutdown event: stop the subsystem if it is the expected
/// binding, otherwise leave it untouched. Idempotent.
pub fn on_stop(subsystem: &mut dyn LoggingSubsystem) {
    if subsystem.is_expected_binding() {
        tracing::debug!("stopping logging subsystem");
        subsystem.stop();
    }
}
