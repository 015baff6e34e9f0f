//! Query construction.
//!
//! A [`Query`] is what the presentation layer derives from its UI
//! controls: the search box text plus the dropdown selections, ANDed
//! together. [`QueryBuilder`] provides a fluent, validated way to
//! assemble one.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::value::FieldValue;

/// One exact-match constraint: `field == value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Name of the record field to constrain.
    pub field: String,
    /// Value the field must equal (list fields match on membership).
    pub expected: FieldValue,
}

/// A multi-clause filter query.
///
/// All clauses are ANDed. An empty search term and an empty clause
/// list form the identity query, which matches every record.
///
/// # Examples
///
/// ```
/// use procboard::Query;
///
/// let query = Query::builder()
///     .search("java")
///     .field("category", "Raw Materials")
///     .build()
///     .unwrap();
///
/// assert!(!query.is_identity());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Case-insensitive substring search term (empty means no constraint).
    #[serde(default)]
    pub search: String,

    /// Exact-match constraints (empty means no constraint).
    #[serde(default)]
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Creates the identity query, which matches all records.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Starts a new query builder.
    #[must_use]
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Returns true if this query constrains nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.clauses.is_empty()
    }

    /// Returns true if the search term constrains results.
    #[must_use]
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }
}

/// Builder for [`Query`].
///
/// # Example
/// ```
/// use procboard::Query;
///
/// let query = Query::builder()
///     .search("chemtech")
///     .field("region", "Central Java")
///     .field("priority", "high")
///     .build()
///     .unwrap();
///
/// assert_eq!(query.clauses.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    search: Option<String>,
    clauses: Vec<Clause>,
}

impl QueryBuilder {
    /// Creates a new builder with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    ///
    /// Surrounding whitespace is trimmed; a blank term leaves the
    /// query unconstrained, mirroring an empty search box.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Adds an exact-match clause.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, expected: impl Into<FieldValue>) -> Self {
        self.clauses.push(Clause {
            field: name.into(),
            expected: expected.into(),
        });
        self
    }

    /// Builds the query.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyClauseField`] if any clause was
    /// added with a blank field name.
    pub fn build(self) -> QueryResult<Query> {
        for clause in &self.clauses {
            if clause.field.trim().is_empty() {
                return Err(QueryError::EmptyClauseField);
            }
        }

        let search = self
            .search
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(Query {
            search,
            clauses: self.clauses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_query() {
        let query = Query::identity();
        assert!(query.is_identity());
        assert!(!query.has_search());

        let built = Query::builder().build().unwrap();
        assert_eq!(built, query);
    }

    #[test]
    fn test_search_is_trimmed() {
        let query = Query::builder().search("  java  ").build().unwrap();
        assert_eq!(query.search, "java");
    }

    #[test]
    fn test_blank_search_is_identity() {
        let query = Query::builder().search("   ").build().unwrap();
        assert!(query.is_identity());
    }

    #[test]
    fn test_clauses_preserved_in_order() {
        let query = Query::builder()
            .field("region", "Bali")
            .field("category", "Textiles")
            .build()
            .unwrap();

        assert_eq!(query.clauses[0].field, "region");
        assert_eq!(query.clauses[1].field, "category");
    }

    #[test]
    fn test_empty_clause_field_fails() {
        let result = Query::builder().field("  ", "x").build();
        assert_eq!(result.unwrap_err(), QueryError::EmptyClauseField);
    }

    #[test]
    fn test_query_serialization() {
        let query = Query::builder()
            .search("steel")
            .field("status", "active")
            .build()
            .unwrap();

        let json = serde_json::to_string(&query).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(query, back);
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: Query = serde_json::from_str("{}").unwrap();
        assert!(query.is_identity());
    }
}
