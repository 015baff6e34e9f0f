//! Purchase order records.
//!
//! Orders carry the eight-step [`OrderStatus`] lifecycle. The order
//! screen presents them under a tab bar ([`OrderTab`]) where several
//! tabs aggregate more than one status, and shows a fixed progress
//! value per status in the detail drawer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::{BadgeVariant, StatusDisplay};
use crate::record::{Grouped, Queryable};
use crate::value::FieldValue;

/// Purchase order lifecycle, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Drafted, not yet submitted.
    Draft,
    /// Awaiting manager approval.
    PendingApproval,
    /// Approved internally.
    Approved,
    /// Sent to the supplier.
    Sent,
    /// Goods in transit.
    InTransit,
    /// Delivered to the warehouse.
    Delivered,
    /// Receipt confirmed by the warehouse.
    Confirmed,
    /// Payment completed.
    Paid,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const DOMAIN: &'static [Self] = &[
        Self::Draft,
        Self::PendingApproval,
        Self::Approved,
        Self::Sent,
        Self::InTransit,
        Self::Delivered,
        Self::Confirmed,
        Self::Paid,
    ];

    /// Wire/status-key form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Sent => "sent",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Confirmed => "confirmed",
            Self::Paid => "paid",
        }
    }

    /// Lifecycle progress shown in the order detail view.
    ///
    /// Fixed per-status values, not a linear ramp: the gap between
    /// steps reflects how much of the procurement each one covers.
    #[must_use]
    pub const fn lifecycle_progress(self) -> u8 {
        match self {
            Self::Draft => 10,
            Self::PendingApproval => 25,
            Self::Approved => 40,
            Self::Sent => 55,
            Self::InTransit => 70,
            Self::Delivered => 80,
            Self::Confirmed => 90,
            Self::Paid => 100,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusDisplay for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingApproval => "Pending Approval",
            Self::Approved => "Approved",
            Self::Sent => "Sent to Supplier",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Confirmed => "Warehouse Confirmed",
            Self::Paid => "Payment Completed",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            Self::Draft => BadgeVariant::Outline,
            Self::PendingApproval => BadgeVariant::Secondary,
            Self::Approved
            | Self::Sent
            | Self::InTransit
            | Self::Delivered
            | Self::Confirmed
            | Self::Paid => BadgeVariant::Default,
        }
    }
}

/// Tabs on the purchase order screen.
///
/// Several tabs aggregate multiple statuses; [`OrderTab::matches`]
/// is the projection the tab bar applies before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    /// Every order.
    All,
    /// Drafts only.
    Draft,
    /// Awaiting approval.
    Pending,
    /// Approved, sent, or in transit.
    Approved,
    /// Delivered or warehouse-confirmed.
    Delivered,
    /// Paid.
    Completed,
}

impl OrderTab {
    /// Returns true if an order with `status` belongs on this tab.
    #[must_use]
    pub const fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Draft => matches!(status, OrderStatus::Draft),
            Self::Pending => matches!(status, OrderStatus::PendingApproval),
            Self::Approved => matches!(
                status,
                OrderStatus::Approved | OrderStatus::Sent | OrderStatus::InTransit
            ),
            Self::Delivered => matches!(status, OrderStatus::Delivered | OrderStatus::Confirmed),
            Self::Completed => matches!(status, OrderStatus::Paid),
        }
    }
}

/// One purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Order number, e.g. `PO-2023-001`.
    pub id: String,
    /// Supplier the order was placed with.
    pub supplier_name: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Expected delivery date.
    pub delivery_date: NaiveDate,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Order total in the dashboard's display currency.
    pub total: f64,
    /// Number of line items.
    pub items: u32,
    /// Delivery region.
    pub region: String,
}

impl PurchaseOrder {
    /// Lifecycle progress of this order (0 to 100).
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.status.lifecycle_progress()
    }
}

impl Queryable for PurchaseOrder {
    fn record_type() -> &'static str {
        "PurchaseOrder"
    }

    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "supplier_name" => Some(FieldValue::from(self.supplier_name.as_str())),
            "order_date" => Some(FieldValue::Date(self.order_date)),
            "delivery_date" => Some(FieldValue::Date(self.delivery_date)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "total" => Some(FieldValue::Float(self.total)),
            "items" => Some(FieldValue::Int(i64::from(self.items))),
            "region" => Some(FieldValue::from(self.region.as_str())),
            _ => None,
        }
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.id, &self.supplier_name]
    }
}

impl Grouped for PurchaseOrder {
    type Key = OrderStatus;

    fn group_key(&self) -> &OrderStatus {
        &self.status
    }
}
