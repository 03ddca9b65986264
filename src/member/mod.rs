//! Member-specific logic: snapshots and the borrow/return workflow.

pub mod entity;
pub mod error;

pub use error::*;
