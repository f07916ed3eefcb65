//! Configuration application: stop, feed, report.
//!
//! # Responsibilities
//! - Stop the subsystem before any new configuration takes effect
//! - Read the resolved resource and feed it to the subsystem's parser
//! - Trigger the subsystem's pending-diagnostics dump after every attempt
//!
//! # Design Decisions
//! - The stop always happens first, so no two configurations overlap
//! - Failures carry their cause but never propagate past the caller

use thiserror::Error;

use crate::resolve::{ResourceError, ResourceHandle};
use crate::subsystem::{LoggingSubsystem, SubsystemError};

/// Errors surfaced while applying a resolved configuration.
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The resource's byte stream could not be read.
    #[error("failed to read configuration resource '{handle}': {source}")]
    Read {
        handle: ResourceHandle,
        source: ResourceError,
    },

    /// The subsystem's parser rejected the document.
    #[error("logging subsystem rejected configuration: {0}")]
    Subsystem(#[source] SubsystemError),
}

/// Apply the configuration at `handle` to `subsystem`.
///
/// The subsystem is stopped first (idempotent if already stopped) and
/// its pending diagnostics are printed after the attempt regardless of
/// the outcome.
pub fn apply(
    handle: &ResourceHandle,
    subsystem: &mut dyn LoggingSubsystem,
) -> Result<(), ApplyError> {
    subsystem.stop();

    let result = match handle.read() {
        Ok(document) => subsystem
            .load_configuration(&document)
            .map_err(ApplyError::Subsystem),
        Err(source) => Err(ApplyError::Read {
            handle: handle.clone(),
            source,
        }),
    };

    subsystem.print_pending_diagnostics();

    match &result {
        Ok(()) => tracing::debug!(resource = %handle, "configuration applied"),
        Err(error) => tracing::warn!(resource = %handle, %error, "configuration not applied"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use url::Url;

    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum Event {
        Stopped,
        Loaded(Vec<u8>),
    }

    /// Subsystem that records call order and can be scripted to fail.
    #[derive(Default)]
    struct Recording {
        events: Vec<Event>,
        diagnostics_printed: Cell<usize>,
        fail_load: bool,
    }

    impl LoggingSubsystem for Recording {
        fn stop(&mut self) {
            self.events.push(Event::Stopped);
        }

        fn load_configuration(&mut self, document: &[u8]) -> Result<(), SubsystemError> {
            self.events.push(Event::Loaded(document.to_vec()));
            if self.fail_load {
                Err("malformed document".into())
            } else {
                Ok(())
            }
        }

        fn print_pending_diagnostics(&self) {
            self.diagnostics_printed.set(self.diagnostics_printed.get() + 1);
        }
    }

    fn file_handle(contents: &[u8]) -> (tempfile::NamedTempFile, ResourceHandle) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents).expect("write");
        let url = Url::from_file_path(file.path()).expect("file url");
        (file, ResourceHandle::Url(url))
    }

    #[test]
    fn test_stops_before_loading() {
        let (_file, handle) = file_handle(b"<configuration/>");
        let mut subsystem = Recording::default();

        apply(&handle, &mut subsystem).expect("applied");
        assert_eq!(
            subsystem.events,
            vec![Event::Stopped, Event::Loaded(b"<configuration/>".to_vec())]
        );
        assert_eq!(subsystem.diagnostics_printed.get(), 1);
    }

    #[test]
    fn test_parser_rejection_surfaces_as_subsystem_error() {
        let (_file, handle) = file_handle(b"garbage");
        let mut subsystem = Recording {
            fail_load: true,
            ..Recording::default()
        };

        let err = apply(&handle, &mut subsystem).unwrap_err();
        assert!(matches!(err, ApplyError::Subsystem(_)));
        // Stopped first, and diagnostics still printed after the failure.
        assert_eq!(subsystem.events[0], Event::Stopped);
        assert_eq!(subsystem.diagnostics_printed.get(), 1);
    }

    #[test]
    fn test_unreadable_resource_surfaces_as_read_error() {
        let handle = ResourceHandle::Url(Url::parse("file:///no/such/file.xml").unwrap());
        let mut subsystem = Recording::default();

        let err = apply(&handle, &mut subsystem).unwrap_err();
        assert!(matches!(err, ApplyError::Read { .. }));
        // The subsystem was still stopped first and diagnostics flushed.
        assert_eq!(subsystem.events, vec![Event::Stopped]);
        assert_eq!(subsystem.diagnostics_printed.get(), 1);
    }

    #[test]
    fn test_bundled_document_applies() {
        let handle = ResourceHandle::Bundled("fallback/logbackwebfragment-warn.xml".into());
        let mut subsystem = Recording::default();

        apply(&handle, &mut subsystem).expect("applied");
        assert!(matches!(&subsystem.events[1], Event::Loaded(doc) if !doc.is_empty()));
    }
}
