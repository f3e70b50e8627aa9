//! Centralized user-facing text for the todl application.
//!
//! Every string the user sees is a [`Message`] variant rendered through its
//! `Display` impl, and printed via the `msg_*` macros which route output to
//! the console normally and to `tracing` in debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
