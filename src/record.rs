//! Traits records implement to participate in querying and grouping.
//!
//! The engine never knows concrete record shapes. Each dashboard
//! screen's record type implements [`Queryable`] (named-field lookup
//! plus the screen's designated free-text search fields) and
//! [`Grouped`] (the status-like key its pipeline view partitions by).
//! Traits keep the engine a single implementation shared by every
//! screen instead of one copy per record shape.

use std::fmt;

use crate::value::FieldValue;

/// A record the filter engine can evaluate clauses against.
pub trait Queryable {
    /// Human-readable name of the record type, used in error messages.
    fn record_type() -> &'static str
    where
        Self: Sized;

    /// The record's opaque identifier.
    fn record_id(&self) -> &str;

    /// Looks up a named field.
    ///
    /// Returns `None` when the record type has no such field; the
    /// engine turns that into [`QueryError::UnknownField`] rather than
    /// treating the clause as a silent non-match.
    ///
    /// [`QueryError::UnknownField`]: crate::QueryError::UnknownField
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// The free-text fields a search term is matched against.
    ///
    /// Screen-specific: the pipeline searches title and supplier name,
    /// the supplier directory searches name and location, and so on.
    fn search_haystacks(&self) -> Vec<&str>;
}

/// A record carrying a status-like key for pipeline/bucket views.
pub trait Grouped {
    /// The status type this record is partitioned by.
    type Key: PartialEq + Clone + fmt::Debug + fmt::Display;

    /// The record's current status.
    fn group_key(&self) -> &Self::Key;
}
