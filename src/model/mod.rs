//! Typed record shapes for each dashboard screen.
//!
//! Five record types flow through the engine, one per screen:
//! pipeline items, purchase orders, suppliers, surveys, and audit log
//! entries. Each carries exactly one status-like enum whose fixed,
//! ordered domain drives the screen's grouped view.

pub mod audit;
pub mod pipeline;
pub mod purchase_order;
pub mod supplier;
pub mod survey;

pub use audit::{AuditLogEntry, LogLevel};
pub use pipeline::{PipelineItem, PipelineStage, Priority};
pub use purchase_order::{OrderStatus, OrderTab, PurchaseOrder};
pub use supplier::{Supplier, SupplierStatus};
pub use survey::{Survey, SurveyStatus};
