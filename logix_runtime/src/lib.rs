#![forbid(unsafe_code)]

//! Logix Runtime
//!
//! Wraps `logix_core` for the editor: an in-memory journal of applied
//! edits, replay, and signal drift reports for redrawing.
//!
//! No circuit logic lives here; every edit is delegated to the core.

pub mod drift;
pub mod error;
pub mod journal;
pub mod replay;
pub mod session;

pub use drift::DriftReport;
pub use error::SessionError;
pub use session::Session;
