//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`LibrarySystem`] - Starts the library actor and shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod library_system;
pub mod tracing;

pub use library_system::*;
pub use self::tracing::*;
