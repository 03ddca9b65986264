//! # Library Catalog
//!
//! > **An in-memory library catalog with lending, overdue tracking, and fines.**
//!
//! The crate manages a catalog of items (books, magazines, DVDs) and a roster of members,
//! and mediates lending between them. Items carry their loan state (`is_borrowed`,
//! `borrowed_by`, `due_date`), members carry the ids of what they hold, and the
//! [`Library`](library::Library) keeps both sides in step.
//!
//! ## Lending Rules
//!
//! - A loan runs for four days by default ([`LibraryConfig::loan_period_days`](config::LibraryConfig)).
//! - Fines accrue in bands: 15 per day for the first month, 500 per full 30-day month
//!   until a year, then a flat 10 000.
//! - A member cannot borrow an item they already hold, nor return one they do not.
//! - Items on loan cannot be removed from the catalog.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each component defines its own error type ([`ItemError`](item::ItemError),
//! [`MemberError`](member::MemberError), [`LibraryError`](library::LibraryError)).
//! The `#[from]` attribute lifts lower-level errors into the registry's error, and
//! [`LibraryError::kind`](library::LibraryError::kind) classifies any failure as
//! validation, not-found, state-conflict, or bad-argument.
//!
//! ### 2. Ids, Not References
//! An item records its borrower as a [`MemberId`](model::MemberId). Snapshots resolve the
//! id against the member registry, so `borrowed_by` renders as a nested `{id, name}`.
//!
//! ### 3. Concurrency Model
//! The [`Library`](library::Library) itself is plain synchronous code. For shared use, the
//! [`LibrarySystem`](lifecycle::LibrarySystem) moves it into a single
//! [`LibraryActor`](service::LibraryActor) task that handles requests one at a time, so no
//! locks are involved.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic [`Registry`](framework::Registry) both catalogs are built on.
//! - [`model`]: plain data ([`LibraryItem`](model::LibraryItem), [`Member`](model::Member))
//!   and snapshots ([`ItemInfo`](model::ItemInfo), [`MemberInfo`](model::MemberInfo)).
//! - [`item`], [`member`]: per-entity behavior and errors.
//! - [`library`]: the registry and lending workflow.
//! - [`service`], [`clients`], [`lifecycle`]: the async actor front-end.
//! - [`config`]: lending policy and runtime settings.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod item;
pub mod library;
pub mod lifecycle;
pub mod member;
pub mod model;
pub mod service;
