//! System audit log records.
//!
//! The super-admin log viewer filters entries by free text across
//! user, action, and details, and by severity level.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::{BadgeVariant, StatusDisplay};
use crate::record::{Grouped, Queryable};
use crate::value::FieldValue;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Routine activity.
    Info,
    /// Notable but non-failing condition.
    Warning,
    /// Failure.
    Error,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const DOMAIN: &'static [Self] = &[Self::Info, Self::Warning, Self::Error];

    /// Wire/status-key form of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for LogLevel {
    fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            Self::Info => BadgeVariant::Default,
            Self::Warning => BadgeVariant::Secondary,
            Self::Error => BadgeVariant::Destructive,
        }
    }
}

/// One audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Opaque identifier.
    pub id: String,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// Acting user (or "System").
    pub user: String,
    /// Short action name, e.g. "Login" or "Create PO".
    pub action: String,
    /// Free-form detail text.
    pub details: String,
    /// Severity.
    pub level: LogLevel,
}

impl Queryable for AuditLogEntry {
    fn record_type() -> &'static str {
        "AuditLogEntry"
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "user" => Some(FieldValue::from(self.user.as_str())),
            "action" => Some(FieldValue::from(self.action.as_str())),
            "details" => Some(FieldValue::from(self.details.as_str())),
            "level" => Some(FieldValue::from(self.level.as_str())),
            _ => None,
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.user, &self.action, &self.details]
    }
}

impl Grouped for AuditLogEntry {
    type Key = LogLevel;

    fn group_key(&self) -> &LogLevel {
        &self.level
    }
}
