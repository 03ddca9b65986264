//! Type-safe async wrapper around the library actor's mailbox.

pub mod library_client;

pub use library_client::*;
