//! Error types for procboard.
//!
//! All errors are strongly typed using thiserror. The engine never
//! silently drops or skips data: every data-shape problem surfaces
//! as a variant here so the caller can decide what to do.

use thiserror::Error;

/// Errors raised while evaluating a query or grouping a collection.
///
/// Empty inputs and empty results are normal outcomes, not errors.
/// Every variant here indicates either a caller programming mistake
/// (an unknown field name) or a data-shape defect (a status outside
/// the screen's domain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A query clause names a field the record type does not have.
    ///
    /// This is a caller programming error and fails fast rather than
    /// silently matching nothing.
    #[error("Record type '{record_type}' has no field named '{field}'")]
    UnknownField {
        /// The field name used in the offending clause.
        field: String,
        /// Human-readable name of the record type being filtered.
        record_type: &'static str,
    },

    /// A record's status is not one of the keys in the group domain.
    ///
    /// The record does not belong to any known group. Silently
    /// dropping it would lose data, so grouping aborts instead.
    #[error("Record '{record_id}' has status '{status}' which is not in the group domain")]
    UnknownStatus {
        /// The status value that did not match any domain key.
        status: String,
        /// Identifier of the record carrying the unmatched status.
        record_id: String,
    },

    /// The caller-supplied group domain contains the same key twice.
    #[error("Group domain contains duplicate key '{key}'")]
    DuplicateGroupKey {
        /// The repeated key.
        key: String,
    },

    /// A query clause was built with an empty field name.
    #[error("Query clause field name cannot be empty")]
    EmptyClauseField,
}

impl QueryError {
    /// Returns true if this error was caused by a malformed query.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownField { .. } | Self::DuplicateGroupKey { .. } | Self::EmptyClauseField
        )
    }

    /// Returns true if this error indicates bad data rather than a bad query.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::UnknownStatus { .. })
    }
}

/// Result type alias for procboard operations.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_display() {
        let err = QueryError::UnknownField {
            field: "colour".to_string(),
            record_type: "Supplier",
        };
        let msg = format!("{err}");
        assert!(msg.contains("colour"));
        assert!(msg.contains("Supplier"));
    }

    #[test]
    fn test_unknown_status_display() {
        let err = QueryError::UnknownStatus {
            status: "legacy_archived".to_string(),
            record_id: "PO-2024-001".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("legacy_archived"));
        assert!(msg.contains("PO-2024-001"));
        assert!(msg.contains("not in the group domain"));
    }

    #[test]
    fn test_error_classification() {
        let field = QueryError::UnknownField {
            field: "x".to_string(),
            record_type: "Survey",
        };
        assert!(field.is_caller_error());
        assert!(!field.is_data_error());

        let status = QueryError::UnknownStatus {
            status: "x".to_string(),
            record_id: "1".to_string(),
        };
        assert!(status.is_data_error());
        assert!(!status.is_caller_error());

        assert!(QueryError::EmptyClauseField.is_caller_error());
        assert!(
            QueryError::DuplicateGroupKey {
                key: "draft".to_string()
            }
            .is_caller_error()
        );
    }
}
