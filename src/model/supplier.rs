//! Supplier directory records.
//!
//! The supplier screen filters by free text (name or location), by
//! category membership, and by status. Categories are multi-valued:
//! a supplier matches a category clause when any of its categories
//! equals the selected value.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{BadgeVariant, StatusDisplay};
use crate::record::{Grouped, Queryable};
use crate::value::FieldValue;

/// Membership status of a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    /// Actively trading.
    Active,
    /// Suspended or lapsed.
    Inactive,
    /// Registration under review.
    Pending,
}

impl SupplierStatus {
    /// All statuses in directory display order.
    pub const DOMAIN: &'static [Self] = &[Self::Active, Self::Inactive, Self::Pending];

    /// Wire/status-key form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for SupplierStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Default,
            Self::Inactive => BadgeVariant::Destructive,
            Self::Pending => BadgeVariant::Secondary,
        }
    }
}

/// One supplier in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Opaque identifier.
    pub id: String,
    /// Legal/trading name.
    pub name: String,
    /// City or region of operation.
    pub location: String,
    /// Rating (0.0 to 5.0).
    pub rating: f64,
    /// Loyalty program points.
    pub loyalty_points: u32,
    /// Membership status.
    pub status: SupplierStatus,
    /// Product categories served (multi-valued).
    pub categories: Vec<String>,
    /// Date of the most recent order.
    pub last_order: NaiveDate,
}

impl Queryable for Supplier {
    fn record_type() -> &'static str {
        "Supplier"
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "name" => Some(FieldValue::from(self.name.as_str())),
            "location" => Some(FieldValue::from(self.location.as_str())),
            "rating" => Some(FieldValue::Float(self.rating)),
            "loyalty_points" => Some(FieldValue::Int(i64::from(self.loyalty_points))),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "categories" => Some(FieldValue::List(self.categories.clone())),
            "last_order" => Some(FieldValue::Date(self.last_order)),
            _ => None,
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.location]
    }
}

impl Grouped for Supplier {
    type Key = SupplierStatus;

    fn group_key(&self) -> &SupplierStatus {
        &self.status
    }
}
