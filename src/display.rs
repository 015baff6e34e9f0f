//! Status-to-visual mapping.
//!
//! Statuses never transition inside this crate; records arrive with a
//! fixed status and keep it. What the dashboards need is a pure
//! lookup from each status (and priority) to a display label and a
//! badge style, which [`StatusDisplay`] provides.

use serde::{Deserialize, Serialize};

/// Visual badge styles the presentation layer renders.
///
/// The four variants mirror the design system the dashboards use;
/// this crate only decides which one a status maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    /// Emphasized badge for terminal/successful states.
    Default,
    /// Muted badge for in-progress states.
    Secondary,
    /// Alarming badge for failure states and high priority.
    Destructive,
    /// Neutral outline badge for early or inactive states.
    Outline,
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Secondary => write!(f, "secondary"),
            Self::Destructive => write!(f, "destructive"),
            Self::Outline => write!(f, "outline"),
        }
    }
}

/// Pure mapping from a status-like value to its presentation.
pub trait StatusDisplay {
    /// Human-readable label shown in tables and badges.
    fn label(&self) -> &'static str;

    /// Badge style for this value.
    fn badge(&self) -> BadgeVariant;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_display() {
        assert_eq!(format!("{}", BadgeVariant::Default), "default");
        assert_eq!(format!("{}", BadgeVariant::Destructive), "destructive");
    }

    #[test]
    fn test_badge_variant_serde_is_snake_case() {
        let json = serde_json::to_string(&BadgeVariant::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");

        let back: BadgeVariant = serde_json::from_str("\"outline\"").unwrap();
        assert_eq!(back, BadgeVariant::Outline);
    }
}
