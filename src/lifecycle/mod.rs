//! Lifecycle subsystem: one startup event, one shutdown event.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read params → Substitute placeholders → Resolve location
//!         → Apply configuration → or fall back to bundled default
//!         → terminal outcome, always
//!
//! Shutdown (shutdown.rs):
//!     Expected binding? → Stop subsystem
//! ```
//!
//! # Design Decisions
//! - The host guarantees at most one startup and one shutdown event,
//!   strictly ordered and never overlapping; this is a documented
//!   precondition, not something enforced with a lock
//! - No event ever propagates an error to the host

pub mod shutdown;
pub mod startup;

pub use shutdown::on_stop;
pub use startup::{on_start, StartupOutcome, DEFAULT_LEVEL_PARAM, LOCATION_PARAM};
