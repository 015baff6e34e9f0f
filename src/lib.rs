//! # procboard - Procurement Dashboard Query Core
//!
//! procboard is the data core behind a role-based procurement
//! dashboard. The presentation layer owns navigation, dialogs, and
//! rendering; this crate owns the logic those screens share:
//! filtering record collections, partitioning them into ordered
//! status buckets, and deriving progress percentages.
//!
//! ## Core Concepts
//!
//! - **Record**: one row of domain data (a pipeline item, purchase
//!   order, supplier, survey, or audit log entry)
//! - **Query**: a free-text search term plus exact-match field
//!   clauses, ANDed together
//! - **Domain**: the fixed, ordered set of status values a screen
//!   partitions by; every domain key gets a bucket even when empty
//! - **Badge**: the pure status-to-visual mapping tables render with
//!
//! ## Usage
//!
//! ```rust
//! use procboard::{filter, group_by_status, Query};
//! use procboard::model::PipelineStage;
//! use procboard::samples;
//!
//! let items = samples::pipeline_items();
//!
//! // The list view: search plus dropdown constraints, ANDed.
//! let query = Query::builder()
//!     .search("material")
//!     .field("region", "East Java")
//!     .build()?;
//! let matched = filter(&items, &query)?;
//!
//! // The board view: one ordered bucket per stage, none dropped.
//! let board = group_by_status(&items, PipelineStage::DOMAIN)?;
//! assert_eq!(board.total_records(), items.len());
//! # Ok::<(), procboard::QueryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod display;
pub mod error;
pub mod query;
pub mod record;
pub mod role;
pub mod value;

// Engine and domain data
pub mod engine;
pub mod model;
pub mod samples;

// Re-export primary types at crate root for convenience
pub use display::{BadgeVariant, StatusDisplay};
pub use engine::{filter, group_by_status, percentage, StatusBuckets};
pub use error::{QueryError, QueryResult};
pub use query::{Clause, Query, QueryBuilder};
pub use record::{Grouped, Queryable};
pub use role::Role;
pub use value::FieldValue;
