//! # Listwise Architecture
//!
//! Listwise is a **UI-agnostic list controller library**: the search /
//! filter / sort / select / bulk-action logic every list page of a
//! dashboard-style product repeats, factored out once. It is not a terminal
//! application that happens to have some library code — it's a library that
//! happens to ship a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (cli/, wired by main.rs)                      │
//! │  - Parses arguments, renders tables, prints messages        │
//! │  - Implements the ActionSink side effects (export archive)  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade Layer (controller.rs)                               │
//! │  - One ListController per list page                         │
//! │  - Owns store + query + selection, keeps them consistent    │
//! │  - Returns structured types, never formatted output         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (filter.rs, compare.rs, view.rs, actions.rs)  │
//! │  - Pure functions over records + descriptor tables          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and Schemas
//!
//! Each entity kind (Contact, Campaign, ...) is a concrete struct
//! implementing [`model::Record`] plus a [`model::Schema`] — a small field
//! name → kind table. The engines dispatch on the declared kind instead of
//! probing records at runtime, which is what keeps one controller reusable
//! across every record shape in the product.
//!
//! ## Key Principle: Safe Defaults, Not Errors
//!
//! The engines never fail on user input: an unknown facet is ignored, an
//! unparseable sort value orders below every valid one, a stale selected id
//! is dropped, an empty bulk target set becomes a reported no-op. The crate
//! error type exists for the edges — action sinks and the CLI — not for the
//! core.
//!
//! ## Everything Is Synchronous
//!
//! One mutator at a time, no background work, no staleness: every call to
//! [`controller::ListController::view`] recomputes the projection from the
//! current store and query. A new query simply supersedes the old one.
//!
//! ## Module Overview
//!
//! - [`controller`]: The facade — entry point for all operations
//! - [`filter`]: Keep/drop predicate (free-text search + facet filters)
//! - [`compare`]: Typed comparator (text / number / date ordering)
//! - [`view`]: Filtered + stable-sorted projection
//! - [`selection`]: Checked-row tracking scoped to the visible view
//! - [`actions`]: Bulk action dispatch and outcome reporting
//! - [`store`]: In-memory record storage with raw CRUD
//! - [`model`]: Record trait, ids, field values, schemas
//! - [`query`]: The declarative query descriptor
//! - [`records`]: Concrete shapes (Contact, Campaign)
//! - [`error`]: Error types
//! - `cli`: Argument parsing, table rendering and the export sink for the
//!   binary (not part of the lib API)

pub mod actions;
pub mod compare;
pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod records;
pub mod selection;
pub mod store;
pub mod view;

pub use actions::{ActionKind, ActionSink, BulkOutcome, Message, MessageLevel, NullSink};
pub use controller::ListController;
pub use error::{ListwiseError, Result};
pub use model::{FieldKind, FieldValue, Record, RecordId, Schema};
pub use query::{Query, SortDirection};
pub use selection::Selection;
pub use store::RecordStore;
