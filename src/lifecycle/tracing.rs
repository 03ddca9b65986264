//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix (`with_target(false)`).
//! Records are identified by structured fields instead (`item_id`, `member_id`,
//! `entity_type`).
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown with catalog sizes
//! - **Registry**: Every store and removal, with the registry size afterwards
//! - **Lending**: Lend and return outcomes, including due dates
//! - **Rejections**: Unknown ids, double borrows, removal of items on loan
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Include registry and request events
//! RUST_LOG=debug cargo run
//!
//! # Filter to the registry only
//! RUST_LOG=library_catalog::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Library actor started items=0 members=0
//! INFO Member created member_id=5b0c... size=1
//! INFO Item added item_id=9e4f... size=1
//! INFO Item lent member_id=5b0c... item_id=9e4f... due_date=Some(2026-10-23T09:12:44Z)
//! ```

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Calling it twice in one process panics, as `tracing_subscriber`'s `init` does.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
