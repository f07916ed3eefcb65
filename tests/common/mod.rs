//! Shared fakes for startup and shutdown scenario tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Mutex;

use log_bootstrap::{HostEnvironment, LoggingSubsystem, ResourceHandle, SubsystemError};

/// In-memory host: init params, a context-resource namespace, and a
/// recorded diagnostic log.
#[derive(Default)]
pub struct FakeEnvironment {
    params: HashMap<String, String>,
    context: HashMap<String, ResourceHandle>,
    log_lines: Mutex<Vec<String>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_context_resource(mut self, path: &str, handle: ResourceHandle) -> Self {
        self.context.insert(path.to_string(), handle);
        self
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log_lines.lock().unwrap().clone()
    }

    pub fn logged_containing(&self, needle: &str) -> bool {
        self.log_lines().iter().any(|line| line.contains(needle))
    }
}

impl HostEnvironment for FakeEnvironment {
    fn init_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn resolve_context_resource(&self, path: &str) -> Option<ResourceHandle> {
        self.context.get(path).cloned()
    }

    fn log(&self, message: &str) {
        self.log_lines.lock().unwrap().push(message.to_string());
    }
}

/// What the fake subsystem observed, in call order.
#[derive(Debug, PartialEq)]
pub enum SubsystemEvent {
    Stopped,
    Loaded(Vec<u8>),
}

/// Recording subsystem with a scriptable binding check and load result.
pub struct RecordingSubsystem {
    pub events: Vec<SubsystemEvent>,
    pub diagnostics_printed: Cell<usize>,
    pub expected_binding: bool,
    /// Number of upcoming `load_configuration` calls that should fail.
    pub fail_next_loads: usize,
}

impl RecordingSubsystem {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            diagnostics_printed: Cell::new(0),
            expected_binding: true,
            fail_next_loads: 0,
        }
    }

    pub fn loaded_documents(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SubsystemEvent::Loaded(doc) => Some(doc.as_slice()),
                SubsystemEvent::Stopped => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SubsystemEvent::Stopped))
            .count()
    }
}

impl LoggingSubsystem for RecordingSubsystem {
    fn is_expected_binding(&self) -> bool {
        self.expected_binding
    }

    fn stop(&mut self) {
        self.events.push(SubsystemEvent::Stopped);
    }

    fn load_configuration(&mut self, document: &[u8]) -> Result<(), SubsystemError> {
        self.events.push(SubsystemEvent::Loaded(document.to_vec()));
        if self.fail_next_loads > 0 {
            self.fail_next_loads -= 1;
            Err("scripted parse failure".into())
        } else {
            Ok(())
        }
    }

    fn print_pending_diagnostics(&self) {
        self.diagnostics_printed
            .set(self.diagnostics_printed.get() + 1);
    }
}
