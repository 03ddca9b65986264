//! Actor front-end that serves a [`Library`](crate::library::Library) over channels.
//!
//! # Main Components
//!
//! - [`LibraryActor`] - Owns the library and processes requests sequentially
//! - [`LibraryRequest`] - One message variant per library operation
//! - [`ServiceError`] - Channel failures plus wrapped [`LibraryError`](crate::library::LibraryError)s

pub mod actor;
pub mod error;
pub mod request;

pub use actor::*;
pub use error::*;
pub use request::*;
