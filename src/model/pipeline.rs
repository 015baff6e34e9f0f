//! Procurement pipeline records.
//!
//! A [`PipelineItem`] is one procurement flowing through the eight
//! lifecycle stages, from supplier registration to completion. The
//! pipeline board groups items by [`PipelineStage`]; the list view
//! filters them by region, category, and free text.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{BadgeVariant, StatusDisplay};
use crate::engine::percentage;
use crate::record::{Grouped, Queryable};
use crate::value::FieldValue;

/// The eight stages of the procurement lifecycle, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Supplier registered, procurement opened.
    Registration,
    /// Surveyor assessing the supplier.
    Survey,
    /// Price negotiation underway.
    Negotiation,
    /// Purchase order issued.
    PurchaseOrder,
    /// Goods in delivery.
    Delivery,
    /// Received at the warehouse.
    Warehouse,
    /// Payment processing.
    Payment,
    /// Procurement closed.
    Completed,
}

impl PipelineStage {
    /// All stages in board order. Every stage appears as a bucket on
    /// the pipeline board even when empty.
    pub const DOMAIN: &'static [Self] = &[
        Self::Registration,
        Self::Survey,
        Self::Negotiation,
        Self::PurchaseOrder,
        Self::Delivery,
        Self::Warehouse,
        Self::Payment,
        Self::Completed,
    ];

    /// Wire/status-key form of the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Survey => "survey",
            Self::Negotiation => "negotiation",
            Self::PurchaseOrder => "purchase_order",
            Self::Delivery => "delivery",
            Self::Warehouse => "warehouse",
            Self::Payment => "payment",
            Self::Completed => "completed",
        }
    }

    /// 1-based position of this stage in the lifecycle.
    #[must_use]
    pub fn ordinal(self) -> usize {
        Self::DOMAIN
            .iter()
            .position(|stage| *stage == self)
            .map_or(0, |idx| idx + 1)
    }

    /// Lifecycle progress derived from the stage's position,
    /// as a percentage of stages reached.
    #[must_use]
    pub fn lifecycle_progress(self) -> u8 {
        percentage(self.ordinal(), Self::DOMAIN.len())
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for PipelineStage {
    fn label(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Survey => "Survey",
            Self::Negotiation => "Negotiation",
            Self::PurchaseOrder => "Purchase Order",
            Self::Delivery => "Delivery",
            Self::Warehouse => "Warehouse",
            Self::Payment => "Payment",
            Self::Completed => "Completed",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            Self::Registration | Self::Survey => BadgeVariant::Outline,
            Self::Negotiation | Self::PurchaseOrder | Self::Delivery | Self::Warehouse => {
                BadgeVariant::Secondary
            }
            Self::Payment | Self::Completed => BadgeVariant::Default,
        }
    }
}

/// Urgency of a procurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal handling.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Wire form of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for Priority {
    fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            Self::Low => BadgeVariant::Outline,
            Self::Medium => BadgeVariant::Secondary,
            Self::High => BadgeVariant::Destructive,
        }
    }
}

/// One procurement moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineItem {
    /// Opaque identifier.
    pub id: String,
    /// Short title of the procurement.
    pub title: String,
    /// Name of the supplier handling it.
    pub supplier_name: String,
    /// Supplier rating (0.0 to 5.0).
    pub supplier_rating: f64,
    /// Product category.
    pub category: String,
    /// Geographic region.
    pub region: String,
    /// Current lifecycle stage.
    pub status: PipelineStage,
    /// Progress recorded for this item (0 to 100).
    pub progress: u8,
    /// Date the item entered its current stage.
    pub date: NaiveDate,
    /// Procurement amount in the dashboard's display currency.
    pub amount: f64,
    /// Urgency.
    pub priority: Priority,
}

impl Queryable for PipelineItem {
    fn record_type() -> &'static str {
        "PipelineItem"
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "title" => Some(FieldValue::from(self.title.as_str())),
            "supplier_name" => Some(FieldValue::from(self.supplier_name.as_str())),
            "supplier_rating" => Some(FieldValue::Float(self.supplier_rating)),
            "category" => Some(FieldValue::from(self.category.as_str())),
            "region" => Some(FieldValue::from(self.region.as_str())),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "progress" => Some(FieldValue::Int(i64::from(self.progress))),
            "date" => Some(FieldValue::Date(self.date)),
            "amount" => Some(FieldValue::Float(self.amount)),
            "priority" => Some(FieldValue::from(self.priority.as_str())),
            _ => None,
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.supplier_name]
    }
}

impl Grouped for PipelineItem {
    type Key = PipelineStage;

    fn group_key(&self) -> &PipelineStage {
        &self.status
    }
}
