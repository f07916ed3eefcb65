//! Logging subsystem collaborator.
//!
//! The engine being configured (its document parser, appenders,
//! filters) is external to this crate; everything it must expose for
//! bootstrap sits behind this trait.

/// Error produced by the subsystem's own configuration parser.
pub type SubsystemError = Box<dyn std::error::Error + Send + Sync>;

/// The process-wide logging engine being (re)configured.
pub trait LoggingSubsystem {
    /// Whether the active logging binding is one this bootstrapper
    /// knows how to configure. A mismatch aborts startup entirely.
    fn is_expected_binding(&self) -> bool {
        true
    }

    /// Stop the subsystem. Must be idempotent.
    fn stop(&mut self);

    /// Feed a configuration document to the subsystem's own parser.
    fn load_configuration(&mut self, document: &[u8]) -> Result<(), SubsystemError>;

    /// Flush warnings/errors the subsystem accumulated while loading.
    /// Invoked after every load attempt, successful or not.
    fn print_pending_diagnostics(&self) {}
}
