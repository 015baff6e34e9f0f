//! Dashboard roles.
//!
//! Role selection is cosmetic: it picks which datasets and menus the
//! shell renders, nothing is enforced. This module is the role
//! configuration record the shell is parameterized by. Labels and
//! menu names mix English and Indonesian, as the product does.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven dashboard roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs the whole procurement process.
    ProcurementManager,
    /// Sells products through the system.
    Supplier,
    /// Field team verifying supplier products.
    Surveyor,
    /// Receives and inspects deliveries.
    Warehouse,
    /// Oversees procurement at the regional level.
    AdminRegional,
    /// Executive monitoring, macro view.
    Direksi,
    /// IT team configuring the system.
    SuperAdmin,
}

impl Role {
    /// All roles in switcher order.
    pub const ALL: &'static [Self] = &[
        Self::ProcurementManager,
        Self::Supplier,
        Self::Surveyor,
        Self::Warehouse,
        Self::AdminRegional,
        Self::Direksi,
        Self::SuperAdmin,
    ];

    /// Wire form of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProcurementManager => "procurement_manager",
            Self::Supplier => "supplier",
            Self::Surveyor => "surveyor",
            Self::Warehouse => "warehouse",
            Self::AdminRegional => "admin_regional",
            Self::Direksi => "direksi",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Display label shown in the role switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProcurementManager => "Procurement Manager",
            Self::Supplier => "Supplier",
            Self::Surveyor => "Surveyor",
            Self::Warehouse => "Petugas Warehouse",
            Self::AdminRegional => "Admin Daerah",
            Self::Direksi => "Direksi",
            Self::SuperAdmin => "Super Admin",
        }
    }

    /// Route slug the shell navigates to for this role. The
    /// procurement manager dashboard lives at the root.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::ProcurementManager => "/",
            Self::Supplier => "/supplier",
            Self::Surveyor => "/surveyor",
            Self::Warehouse => "/warehouse",
            Self::AdminRegional => "/admin",
            Self::Direksi => "/direksi",
            Self::SuperAdmin => "/super-admin",
        }
    }

    /// Sidebar menu entries for this role.
    #[must_use]
    pub const fn menus(self) -> &'static [&'static str] {
        match self {
            Self::ProcurementManager => &[
                "Dashboard",
                "Procurement Pipeline",
                "Supplier Management",
                "Survey Management",
                "Purchase Orders",
                "Executive Reporting",
            ],
            Self::Supplier => &[
                "Dashboard Supplier",
                "Manajemen Produk",
                "Negosiasi Harga",
                "Purchase Order",
                "Loyalitas",
            ],
            Self::Surveyor => &["Tugas Aktif", "Riwayat"],
            Self::Warehouse => &["Penerimaan Barang", "Laporan Harian"],
            Self::AdminRegional => &["Penugasan Surveyor", "Analisis Supplier", "PO Management"],
            Self::Direksi => &["Executive Dashboard", "Approval Kebijakan"],
            Self::SuperAdmin => &["Role Customization", "Log System"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
