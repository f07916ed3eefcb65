//! Location resolution subsystem.
//!
//! # Data Flow
//! ```text
//! location string
//!     → resolver.rs (ordered strategies, first success wins)
//!         1. context-relative  ("/...", host namespace)
//!         2. bundled           ("classpath:...", embedded set)
//!         3. absolute URL      (any scheme)
//!         4. filesystem probe  (file_probe.rs)
//!     → ResourceHandle (handle.rs)
//! ```
//!
//! # Design Decisions
//! - A location yields at most one handle; strategies never merge
//! - Strategies degrade on failure, they never error or panic
//! - The two historical file-probe variants collapse into one function

pub mod file_probe;
pub mod handle;
pub mod resolver;

pub use handle::{ResourceError, ResourceHandle};
pub use resolver::{resolve, CLASSPATH_PREFIX};
