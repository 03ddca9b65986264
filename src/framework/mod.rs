//! Generic record management for the catalog.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be stored in a registry
//! - [`Registry`] - Insertion-ordered in-memory store keyed by entity id

pub mod core;

pub use self::core::*;
