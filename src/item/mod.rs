//! Item-specific logic: snapshots, overdue checks, and fines.

pub mod entity;
pub mod error;
pub mod fine;

pub use error::*;
pub use fine::fine_for_days;
