//! Field values records expose to the query engine.
//!
//! Every named field of a record is surfaced as a [`FieldValue`] so
//! exact-match clauses can compare against it uniformly. The variants
//! cover the primitive shapes found in dashboard records: strings,
//! numbers, booleans, dates, and multi-valued string fields such as a
//! supplier's category list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single field value read out of a record.
///
/// # Examples
///
/// ```
/// use procboard::FieldValue;
///
/// let region = FieldValue::from("East Java");
/// let rating = FieldValue::Float(4.5);
///
/// assert!(region.is_str());
/// assert!(rating.is_float());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// A text field (also used for enum-like statuses in wire form).
    Str(String),
    /// An integer field (counts, points).
    Int(i64),
    /// A floating-point field (ratings, amounts).
    Float(f64),
    /// A boolean flag.
    Bool(bool),
    /// A business date.
    Date(NaiveDate),
    /// A multi-valued string field. An exact-match clause against a
    /// list matches when any element equals the expected value.
    List(Vec<String>),
    /// An optional field with no value (e.g. a draft survey's
    /// unset deadline). Null only matches an expected Null.
    Null,
}

impl FieldValue {
    /// Returns true if this is a string value.
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns true if this is an integer value.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this is a float value.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns true if this is a boolean value.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns true if this is a date value.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns true if this is a list value.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this is the null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string value, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the integer value, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric value as a float. Integers widen.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the date value, if this is one.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::List(_) => "list",
            Self::Null => "null",
        }
    }

    /// Exact-match comparison used by filter clauses.
    ///
    /// Scalar variants compare with `==` (case-sensitive for
    /// strings). A [`FieldValue::List`] field matches a `Str` expected
    /// value when any element equals it; every other cross-variant
    /// combination is a non-match, not an error.
    #[must_use]
    pub fn matches(&self, expected: &FieldValue) -> bool {
        match (self, expected) {
            (Self::List(items), Self::Str(want)) => items.iter().any(|item| item == want),
            (actual, expected) => actual == expected,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::List(v) => write!(f, "[{}]", v.join(", ")),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Option<NaiveDate>> for FieldValue {
    fn from(v: Option<NaiveDate>) -> Self {
        v.map_or(Self::Null, Self::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let val = FieldValue::Str("Jakarta".to_string());
        assert!(val.is_str());
        assert_eq!(val.as_str(), Some("Jakarta"));
        assert_eq!(val.type_name(), "str");

        let val = FieldValue::Int(1250);
        assert_eq!(val.as_int(), Some(1250));
        assert_eq!(val.as_float(), Some(1250.0)); // Int can be read as float

        let val = FieldValue::Float(4.8);
        assert!((val.as_float().unwrap() - 4.8).abs() < f64::EPSILON);

        let val = FieldValue::Bool(true);
        assert_eq!(val.as_bool(), Some(true));
    }

    #[test]
    fn test_date_accessor() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let val = FieldValue::Date(date);
        assert!(val.is_date());
        assert_eq!(val.as_date(), Some(date));
        assert_eq!(val.type_name(), "date");
    }

    #[test]
    fn test_scalar_match_is_case_sensitive() {
        let actual = FieldValue::from("East Java");
        assert!(actual.matches(&FieldValue::from("East Java")));
        assert!(!actual.matches(&FieldValue::from("east java")));
    }

    #[test]
    fn test_list_match_is_membership() {
        let categories = FieldValue::List(vec![
            "Raw Materials".to_string(),
            "Chemicals".to_string(),
        ]);
        assert!(categories.matches(&FieldValue::from("Chemicals")));
        assert!(!categories.matches(&FieldValue::from("Electronics")));
    }

    #[test]
    fn test_cross_variant_is_non_match() {
        let actual = FieldValue::Int(42);
        assert!(!actual.matches(&FieldValue::from("42")));
        assert!(!FieldValue::Bool(true).matches(&FieldValue::Int(1)));
    }

    #[test]
    fn test_null_only_matches_null() {
        assert!(FieldValue::Null.matches(&FieldValue::Null));
        assert!(!FieldValue::Null.matches(&FieldValue::from("")));
        assert_eq!(FieldValue::from(None::<NaiveDate>), FieldValue::Null);
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(FieldValue::from(Some(date)), FieldValue::Date(date));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FieldValue::from("hi")), "hi");
        assert_eq!(format!("{}", FieldValue::Int(42)), "42");
        assert_eq!(
            format!(
                "{}",
                FieldValue::List(vec!["a".to_string(), "b".to_string()])
            ),
            "[a, b]"
        );
    }

    #[test]
    fn test_from_conversions() {
        let _: FieldValue = "hello".into();
        let _: FieldValue = String::from("hello").into();
        let _: FieldValue = 42i32.into();
        let _: FieldValue = 42i64.into();
        let _: FieldValue = 4.5f64.into();
        let _: FieldValue = true.into();
        let _: FieldValue = vec!["a".to_string()].into();
    }

    #[test]
    fn test_serialization_round_trip() {
        let val = FieldValue::Str("pending_approval".to_string());
        let json = serde_json::to_string(&val).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(val, back);
    }
}
