//! The query/filter engine.
//!
//! Pure functions over in-memory record collections. Each UI
//! interaction re-evaluates [`filter`] or [`group_by_status`] against
//! the caller's source collection; nothing is cached or mutated and
//! no state survives between calls.

use crate::error::{QueryError, QueryResult};
use crate::query::Query;
use crate::record::{Grouped, Queryable};

/// Returns the records matching `query`, preserving input order.
///
/// A record matches when every exact-match clause holds and, if the
/// query carries a search term, at least one of the record's search
/// haystacks contains the term case-insensitively. The identity query
/// matches everything.
///
/// # Errors
///
/// Returns [`QueryError::UnknownField`] when a clause names a field
/// the record type does not have. Malformed queries are integration
/// mistakes and fail fast instead of matching nothing.
///
/// # Examples
///
/// ```
/// use procboard::{filter, Query};
/// use procboard::samples;
///
/// let items = samples::pipeline_items();
/// let query = Query::builder().search("chemtech").build().unwrap();
/// let matched = filter(&items, &query).unwrap();
///
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].supplier_name, "ChemTech Industries");
/// ```
pub fn filter<'a, R: Queryable>(records: &'a [R], query: &Query) -> QueryResult<Vec<&'a R>> {
    let search = query.search.to_lowercase();
    let mut matched = Vec::new();

    for record in records {
        if matches_record(record, query, &search)? {
            matched.push(record);
        }
    }

    Ok(matched)
}

fn matches_record<R: Queryable>(record: &R, query: &Query, search: &str) -> QueryResult<bool> {
    for clause in &query.clauses {
        let Some(actual) = record.field(&clause.field) else {
            return Err(QueryError::UnknownField {
                field: clause.field.clone(),
                record_type: R::record_type(),
            });
        };
        if !actual.matches(&clause.expected) {
            return Ok(false);
        }
    }

    if !search.is_empty() {
        let hit = record
            .search_haystacks()
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(search));
        if !hit {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Ordered status buckets produced by [`group_by_status`].
///
/// Iteration follows the domain order the caller supplied, not the
/// order statuses appear in the data. Every domain key is present
/// even when its bucket is empty.
#[derive(Debug, Clone)]
pub struct StatusBuckets<'a, R: Grouped> {
    buckets: Vec<(R::Key, Vec<&'a R>)>,
}

impl<'a, R: Grouped> StatusBuckets<'a, R> {
    /// Returns the bucket for `key`, or `None` if the key is not in
    /// the domain this grouping was built with.
    #[must_use]
    pub fn get(&self, key: &R::Key) -> Option<&[&'a R]> {
        self.buckets
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, records)| records.as_slice())
    }

    /// Iterates buckets in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (&R::Key, &[&'a R])> {
        self.buckets
            .iter()
            .map(|(key, records)| (key, records.as_slice()))
    }

    /// Number of buckets (the domain size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the domain was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total records across all buckets.
    ///
    /// Grouping never drops or duplicates, so this always equals the
    /// input length.
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.buckets.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Partitions `records` into ordered buckets keyed by `domain`.
///
/// Each record is appended to the bucket matching its status,
/// preserving relative input order within every bucket.
///
/// # Errors
///
/// - [`QueryError::DuplicateGroupKey`] when `domain` repeats a key.
/// - [`QueryError::UnknownStatus`] when a record's status is not in
///   `domain`. The record belongs to no known group; dropping it
///   silently would lose data, so the caller decides instead.
///
/// # Examples
///
/// ```
/// use procboard::group_by_status;
/// use procboard::model::{SurveyStatus, Survey};
/// use procboard::samples;
///
/// let surveys = samples::surveys();
/// let buckets = group_by_status(&surveys, SurveyStatus::DOMAIN).unwrap();
///
/// assert_eq!(buckets.len(), 4);
/// assert_eq!(buckets.total_records(), surveys.len());
/// ```
pub fn group_by_status<'a, R>(
    records: &'a [R],
    domain: &[R::Key],
) -> QueryResult<StatusBuckets<'a, R>>
where
    R: Grouped + Queryable,
{
    let mut buckets: Vec<(R::Key, Vec<&'a R>)> = Vec::with_capacity(domain.len());
    for key in domain {
        if buckets.iter().any(|(existing, _)| existing == key) {
            return Err(QueryError::DuplicateGroupKey {
                key: key.to_string(),
            });
        }
        buckets.push((key.clone(), Vec::new()));
    }

    for record in records {
        let status = record.group_key();
        let Some((_, bucket)) = buckets.iter_mut().find(|(key, _)| key == status) else {
            return Err(QueryError::UnknownStatus {
                status: status.to_string(),
                record_id: record.record_id().to_string(),
            });
        };
        bucket.push(record);
    }

    Ok(StatusBuckets { buckets })
}

/// Progress ratio as a whole percentage in `[0, 100]`.
///
/// Returns `0` when `denominator` is zero; otherwise rounds
/// `100 * numerator / denominator` to the nearest integer and clamps
/// into range (a numerator above the denominator caps at 100).
///
/// # Examples
///
/// ```
/// use procboard::percentage;
///
/// assert_eq!(percentage(0, 0), 0);
/// assert_eq!(percentage(1, 3), 33);
/// assert_eq!(percentage(2, 3), 67);
/// assert_eq!(percentage(5, 5), 100);
/// ```
#[must_use]
pub fn percentage(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (100.0 * numerator as f64 / denominator as f64).round() as u64;
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Invoice {
        id: String,
        vendor: String,
        region: String,
        status: String,
    }

    impl Invoice {
        fn new(id: &str, vendor: &str, region: &str, status: &str) -> Self {
            Self {
                id: id.to_string(),
                vendor: vendor.to_string(),
                region: region.to_string(),
                status: status.to_string(),
            }
        }
    }

    impl Queryable for Invoice {
        fn record_type() -> &'static str {
            "Invoice"
        }

        fn record_id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::from(self.id.as_str())),
                "vendor" => Some(FieldValue::from(self.vendor.as_str())),
                "region" => Some(FieldValue::from(self.region.as_str())),
                "status" => Some(FieldValue::from(self.status.as_str())),
                _ => None,
            }
        }

        fn search_haystacks(&self) -> Vec<&str> {
            vec![&self.vendor, &self.region]
        }
    }

    impl Grouped for Invoice {
        type Key = String;

        fn group_key(&self) -> &String {
            &self.status
        }
    }

    fn sample_invoices() -> Vec<Invoice> {
        vec![
            Invoice::new("1", "Supplier Co. Ltd", "East Java", "draft"),
            Invoice::new("2", "Package Solutions", "West Java", "paid"),
            Invoice::new("3", "ChemTech Industries", "East Java", "draft"),
        ]
    }

    fn domain() -> Vec<String> {
        vec![
            "draft".to_string(),
            "pending_approval".to_string(),
            "paid".to_string(),
        ]
    }

    #[test]
    fn test_identity_filter_returns_all_in_order() {
        let invoices = sample_invoices();
        let matched = filter(&invoices, &Query::identity()).unwrap();
        assert_eq!(matched.len(), 3);
        for (got, want) in matched.iter().zip(invoices.iter()) {
            assert_eq!(**got, *want);
        }
    }

    #[test]
    fn test_identity_filter_on_empty_input() {
        let invoices: Vec<Invoice> = Vec::new();
        let matched = filter(&invoices, &Query::identity()).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_exact_match_clause() {
        let invoices = sample_invoices();
        let query = Query::builder().field("status", "draft").build().unwrap();
        let matched = filter(&invoices, &query).unwrap();

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, "1");
        assert_eq!(matched[1].id, "3");
    }

    #[test]
    fn test_and_semantics_equal_sequential_filters() {
        let invoices = sample_invoices();

        let combined = Query::builder()
            .field("status", "draft")
            .field("region", "East Java")
            .build()
            .unwrap();
        let both = filter(&invoices, &combined).unwrap();

        let first = Query::builder().field("status", "draft").build().unwrap();
        let second = Query::builder()
            .field("region", "East Java")
            .build()
            .unwrap();
        let stage_one: Vec<Invoice> = filter(&invoices, &first)
            .unwrap()
            .into_iter()
            .cloned()
            .collect();
        let sequential = filter(&stage_one, &second).unwrap();

        assert_eq!(both.len(), sequential.len());
        for (a, b) in both.iter().zip(sequential.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let invoices = sample_invoices();
        for term in ["java", "JAVA", "East Java"] {
            let query = Query::builder().search(term).build().unwrap();
            let matched = filter(&invoices, &query).unwrap();
            assert!(!matched.is_empty(), "term {term:?} should match");
        }

        let query = Query::builder().search("sumatra").build().unwrap();
        assert!(filter(&invoices, &query).unwrap().is_empty());
    }

    #[test]
    fn test_search_checks_all_haystacks() {
        let invoices = sample_invoices();
        let query = Query::builder().search("chemtech").build().unwrap();
        let matched = filter(&invoices, &query).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "3");
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let invoices = sample_invoices();
        let query = Query::builder().field("currency", "IDR").build().unwrap();
        let err = filter(&invoices, &query).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownField {
                field: "currency".to_string(),
                record_type: "Invoice",
            }
        );
    }

    #[test]
    fn test_grouping_empty_input_yields_all_empty_buckets() {
        let invoices: Vec<Invoice> = Vec::new();
        let buckets = group_by_status(&invoices, &domain()).unwrap();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.total_records(), 0);
        for (_, records) in buckets.iter() {
            assert!(records.is_empty());
        }
    }

    #[test]
    fn test_grouping_distributes_and_conserves() {
        let invoices = sample_invoices();
        let buckets = group_by_status(&invoices, &domain()).unwrap();

        assert_eq!(buckets.total_records(), invoices.len());

        let drafts = buckets.get(&"draft".to_string()).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].id, "1");
        assert_eq!(drafts[1].id, "3");

        assert!(buckets.get(&"pending_approval".to_string()).unwrap().is_empty());
        assert_eq!(buckets.get(&"paid".to_string()).unwrap()[0].id, "2");
    }

    #[test]
    fn test_grouping_preserves_domain_order() {
        let invoices = sample_invoices();
        let buckets = group_by_status(&invoices, &domain()).unwrap();
        let keys: Vec<&String> = buckets.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["draft", "pending_approval", "paid"]);
    }

    #[test]
    fn test_grouping_rejects_unknown_status() {
        let mut invoices = sample_invoices();
        invoices.push(Invoice::new("4", "Metal Works Ltd.", "Bali", "archived"));

        let err = group_by_status(&invoices, &domain()).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownStatus {
                status: "archived".to_string(),
                record_id: "4".to_string(),
            }
        );
    }

    #[test]
    fn test_grouping_rejects_duplicate_domain_key() {
        let invoices = sample_invoices();
        let bad_domain = vec!["draft".to_string(), "draft".to_string()];
        let err = group_by_status(&invoices, &bad_domain).unwrap_err();
        assert_eq!(
            err,
            QueryError::DuplicateGroupKey {
                key: "draft".to_string(),
            }
        );
    }

    #[test]
    fn test_percentage_boundaries() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 0), 0);
        assert_eq!(percentage(0, 7), 0);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(7, 5), 100); // clamped
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(1, 2), 50);
    }
}
