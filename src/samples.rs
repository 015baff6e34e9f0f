//! Sample datasets for every screen.
//!
//! The engine holds no data of its own; the presentation layer
//! supplies a collection per screen. These are those collections,
//! also used as shared fixtures by the integration tests and the
//! bench.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::{
    AuditLogEntry, LogLevel, OrderStatus, PipelineItem, PipelineStage, Priority, PurchaseOrder,
    Supplier, SupplierStatus, Survey, SurveyStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All sample dates are valid by construction.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The procurement pipeline board's dataset: one item per stage.
#[must_use]
pub fn pipeline_items() -> Vec<PipelineItem> {
    vec![
        PipelineItem {
            id: "1".to_string(),
            title: "Raw Material A-123".to_string(),
            supplier_name: "Supplier Co. Ltd".to_string(),
            supplier_rating: 4.5,
            category: "Raw Materials".to_string(),
            region: "East Java".to_string(),
            status: PipelineStage::Registration,
            progress: 10,
            date: date(2023, 6, 15),
            amount: 5000.0,
            priority: Priority::High,
        },
        PipelineItem {
            id: "2".to_string(),
            title: "Packaging Materials B-456".to_string(),
            supplier_name: "Package Solutions".to_string(),
            supplier_rating: 4.2,
            category: "Packaging".to_string(),
            region: "West Java".to_string(),
            status: PipelineStage::Survey,
            progress: 25,
            date: date(2023, 6, 18),
            amount: 3200.0,
            priority: Priority::Medium,
        },
        PipelineItem {
            id: "3".to_string(),
            title: "Chemical Compound C-789".to_string(),
            supplier_name: "ChemTech Industries".to_string(),
            supplier_rating: 4.8,
            category: "Chemicals".to_string(),
            region: "Central Java".to_string(),
            status: PipelineStage::Negotiation,
            progress: 45,
            date: date(2023, 6, 20),
            amount: 7500.0,
            priority: Priority::High,
        },
        PipelineItem {
            id: "4".to_string(),
            title: "Electronic Components D-012".to_string(),
            supplier_name: "ElectroParts Inc.".to_string(),
            supplier_rating: 3.9,
            category: "Electronics".to_string(),
            region: "Jakarta".to_string(),
            status: PipelineStage::PurchaseOrder,
            progress: 60,
            date: date(2023, 6, 22),
            amount: 12000.0,
            priority: Priority::Medium,
        },
        PipelineItem {
            id: "5".to_string(),
            title: "Textile Materials E-345".to_string(),
            supplier_name: "Textile World".to_string(),
            supplier_rating: 4.1,
            category: "Textiles".to_string(),
            region: "Bali".to_string(),
            status: PipelineStage::Delivery,
            progress: 75,
            date: date(2023, 6, 25),
            amount: 8300.0,
            priority: Priority::Low,
        },
        PipelineItem {
            id: "6".to_string(),
            title: "Food Ingredients F-678".to_string(),
            supplier_name: "Food Suppliers Co.".to_string(),
            supplier_rating: 4.7,
            category: "Food".to_string(),
            region: "North Sumatra".to_string(),
            status: PipelineStage::Warehouse,
            progress: 85,
            date: date(2023, 6, 28),
            amount: 4500.0,
            priority: Priority::High,
        },
        PipelineItem {
            id: "7".to_string(),
            title: "Metal Components G-901".to_string(),
            supplier_name: "Metal Works Ltd.".to_string(),
            supplier_rating: 4.3,
            category: "Metals".to_string(),
            region: "East Java".to_string(),
            status: PipelineStage::Payment,
            progress: 95,
            date: date(2023, 6, 30),
            amount: 9200.0,
            priority: Priority::Medium,
        },
        PipelineItem {
            id: "8".to_string(),
            title: "Plastic Materials H-234".to_string(),
            supplier_name: "Plastic Solutions".to_string(),
            supplier_rating: 4.0,
            category: "Plastics".to_string(),
            region: "West Java".to_string(),
            status: PipelineStage::Completed,
            progress: 100,
            date: date(2023, 7, 2),
            amount: 6800.0,
            priority: Priority::Low,
        },
    ]
}

/// The purchase order screen's dataset.
#[must_use]
pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: "PO-2023-001".to_string(),
            supplier_name: "Acme Supplies".to_string(),
            order_date: date(2023, 5, 15),
            delivery_date: date(2023, 5, 30),
            status: OrderStatus::Approved,
            total: 12500.0,
            items: 5,
            region: "North".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-002".to_string(),
            supplier_name: "Global Materials".to_string(),
            order_date: date(2023, 5, 18),
            delivery_date: date(2023, 6, 2),
            status: OrderStatus::InTransit,
            total: 8750.5,
            items: 3,
            region: "South".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-003".to_string(),
            supplier_name: "Quality Products".to_string(),
            order_date: date(2023, 5, 20),
            delivery_date: date(2023, 6, 5),
            status: OrderStatus::Sent,
            total: 15200.75,
            items: 7,
            region: "East".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-004".to_string(),
            supplier_name: "Prime Distributors".to_string(),
            order_date: date(2023, 5, 22),
            delivery_date: date(2023, 6, 10),
            status: OrderStatus::PendingApproval,
            total: 6300.25,
            items: 4,
            region: "West".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-005".to_string(),
            supplier_name: "Superior Goods".to_string(),
            order_date: date(2023, 5, 25),
            delivery_date: date(2023, 6, 15),
            status: OrderStatus::Draft,
            total: 9800.0,
            items: 6,
            region: "Central".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-006".to_string(),
            supplier_name: "Reliable Vendors".to_string(),
            order_date: date(2023, 5, 28),
            delivery_date: date(2023, 6, 20),
            status: OrderStatus::Delivered,
            total: 11250.5,
            items: 5,
            region: "North".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-007".to_string(),
            supplier_name: "Best Suppliers".to_string(),
            order_date: date(2023, 6, 1),
            delivery_date: date(2023, 6, 25),
            status: OrderStatus::Confirmed,
            total: 7500.25,
            items: 3,
            region: "South".to_string(),
        },
        PurchaseOrder {
            id: "PO-2023-008".to_string(),
            supplier_name: "Premium Materials".to_string(),
            order_date: date(2023, 6, 5),
            delivery_date: date(2023, 6, 30),
            status: OrderStatus::Paid,
            total: 18200.0,
            items: 8,
            region: "East".to_string(),
        },
    ]
}

/// The supplier directory's dataset.
#[must_use]
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            name: "PT Maju Bersama".to_string(),
            location: "Jakarta".to_string(),
            rating: 4.8,
            loyalty_points: 1250,
            status: SupplierStatus::Active,
            categories: strings(&["Electronics", "Hardware"]),
            last_order: date(2023, 5, 15),
        },
        Supplier {
            id: "2".to_string(),
            name: "CV Sejahtera".to_string(),
            location: "Surabaya".to_string(),
            rating: 4.2,
            loyalty_points: 850,
            status: SupplierStatus::Active,
            categories: strings(&["Raw Materials", "Chemicals"]),
            last_order: date(2023, 6, 2),
        },
        Supplier {
            id: "3".to_string(),
            name: "UD Makmur".to_string(),
            location: "Bandung".to_string(),
            rating: 3.9,
            loyalty_points: 620,
            status: SupplierStatus::Inactive,
            categories: strings(&["Packaging", "Paper Products"]),
            last_order: date(2023, 4, 28),
        },
        Supplier {
            id: "4".to_string(),
            name: "PT Sentosa Jaya".to_string(),
            location: "Medan".to_string(),
            rating: 4.5,
            loyalty_points: 980,
            status: SupplierStatus::Active,
            categories: strings(&["Textiles", "Fabrics"]),
            last_order: date(2023, 5, 30),
        },
        Supplier {
            id: "5".to_string(),
            name: "CV Berkah".to_string(),
            location: "Semarang".to_string(),
            rating: 4.0,
            loyalty_points: 720,
            status: SupplierStatus::Pending,
            categories: strings(&["Food Products", "Spices"]),
            last_order: date(2023, 6, 10),
        },
    ]
}

/// The survey workflow's dataset.
#[must_use]
pub fn surveys() -> Vec<Survey> {
    vec![
        Survey {
            id: "1".to_string(),
            title: "Raw Material Quality Assessment".to_string(),
            status: SurveyStatus::Pending,
            suppliers: strings(&["Supplier A", "Supplier B", "Supplier C"]),
            deadline: Some(date(2023, 6, 15)),
            created_at: date(2023, 6, 1),
            responses: 1,
            total_suppliers: 3,
        },
        Survey {
            id: "2".to_string(),
            title: "Packaging Materials Evaluation".to_string(),
            status: SurveyStatus::Completed,
            suppliers: strings(&["Supplier D", "Supplier E"]),
            deadline: Some(date(2023, 5, 20)),
            created_at: date(2023, 5, 5),
            responses: 2,
            total_suppliers: 2,
        },
        Survey {
            id: "3".to_string(),
            title: "New Supplier Onboarding Survey".to_string(),
            status: SurveyStatus::Draft,
            suppliers: strings(&["Supplier F"]),
            deadline: None,
            created_at: date(2023, 6, 10),
            responses: 0,
            total_suppliers: 1,
        },
        Survey {
            id: "4".to_string(),
            title: "Quarterly Supplier Performance Review".to_string(),
            status: SurveyStatus::Rejected,
            suppliers: strings(&["Supplier A", "Supplier D"]),
            deadline: Some(date(2023, 4, 30)),
            created_at: date(2023, 4, 15),
            responses: 2,
            total_suppliers: 2,
        },
    ]
}

/// The super-admin log viewer's dataset.
#[must_use]
pub fn audit_logs() -> Vec<AuditLogEntry> {
    vec![
        AuditLogEntry {
            id: "1".to_string(),
            timestamp: timestamp(2024, 6, 15, 14, 32, 45),
            user: "Ahmad (Surveyor)".to_string(),
            action: "Login".to_string(),
            details: "Login berhasil dari IP 192.168.1.105".to_string(),
            level: LogLevel::Info,
        },
        AuditLogEntry {
            id: "2".to_string(),
            timestamp: timestamp(2024, 6, 15, 14, 28, 12),
            user: "System".to_string(),
            action: "Database Backup".to_string(),
            details: "Backup otomatis berhasil".to_string(),
            level: LogLevel::Info,
        },
        AuditLogEntry {
            id: "3".to_string(),
            timestamp: timestamp(2024, 6, 15, 13, 45, 22),
            user: "Budi (Admin Daerah)".to_string(),
            action: "Update Role".to_string(),
            details: "Mengubah permission untuk role Surveyor".to_string(),
            level: LogLevel::Warning,
        },
        AuditLogEntry {
            id: "4".to_string(),
            timestamp: timestamp(2024, 6, 15, 12, 15, 8),
            user: "System".to_string(),
            action: "Error".to_string(),
            details: "Failed to connect to payment gateway".to_string(),
            level: LogLevel::Error,
        },
        AuditLogEntry {
            id: "5".to_string(),
            timestamp: timestamp(2024, 6, 15, 11, 30, 45),
            user: "Cindy (Procurement Manager)".to_string(),
            action: "Create PO".to_string(),
            details: "Membuat PO baru dengan ID PO-2024-006".to_string(),
            level: LogLevel::Info,
        },
    ]
}
