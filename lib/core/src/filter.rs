// Catalog filter: hard constraints over dataset records
use crate::candidate::{Candidate, CandidateSet};
use crate::record::{Field, Query, Record};
use tracing::debug;

pub trait Filter {
    fn matches(&self, candidate: &Candidate<'_>) -> bool;
}

pub struct CatalogFilter {
    condition: FilterCondition,
}

/// Predicates over a record and its normalized rating.
///
/// String comparisons are exact: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    /// Raw column text equals `value`. On [`Field::Rating`] this compares the
    /// unnormalized rating string.
    Equals { field: Field, value: String },
    NotEquals { field: Field, value: String },
    /// Normalized rating is at least `minimum`
    RatingAtLeast(f64),
    /// Normalized rating is strictly below `maximum`
    RatingBelow(f64),
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl FilterCondition {
    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        FilterCondition::Equals {
            field,
            value: value.into(),
        }
    }
}

impl CatalogFilter {
    pub fn new(condition: FilterCondition) -> Self {
        Self { condition }
    }

    /// The conjunction of the query's four exact-match constraints and its
    /// minimum rating.
    pub fn for_query(query: &Query) -> Self {
        Self::new(FilterCondition::And(vec![
            FilterCondition::equals(Field::Location, query.location()),
            FilterCondition::equals(Field::RestaurantType, query.restaurant_type()),
            FilterCondition::equals(Field::OnlineOrder, query.accepts_online_order().as_str()),
            FilterCondition::equals(Field::BookTable, query.allows_table_booking().as_str()),
            FilterCondition::RatingAtLeast(query.minimum_rating()),
        ]))
    }

    pub fn condition(&self) -> &FilterCondition {
        &self.condition
    }

    /// Select the matching records, preserving dataset order.
    ///
    /// The dataset is only borrowed; normalized ratings are kept in the
    /// returned views.
    pub fn apply<'a>(&self, dataset: &'a [Record]) -> CandidateSet<'a> {
        let candidates: CandidateSet<'a> = dataset
            .iter()
            .enumerate()
            .map(|(index, record)| Candidate::new(index, record))
            .filter(|candidate| self.matches(candidate))
            .collect();

        debug!(
            dataset = dataset.len(),
            candidates = candidates.len(),
            "catalog filter applied"
        );
        candidates
    }

    fn matches_condition(condition: &FilterCondition, candidate: &Candidate<'_>) -> bool {
        match condition {
            FilterCondition::Equals { field, value } => candidate.record.field(*field) == value,
            FilterCondition::NotEquals { field, value } => candidate.record.field(*field) != value,
            FilterCondition::RatingAtLeast(minimum) => candidate.rating >= *minimum,
            FilterCondition::RatingBelow(maximum) => candidate.rating < *maximum,
            FilterCondition::And(conditions) => conditions
                .iter()
                .all(|c| Self::matches_condition(c, candidate)),
            FilterCondition::Or(conditions) => conditions
                .iter()
                .any(|c| Self::matches_condition(c, candidate)),
            FilterCondition::Not(condition) => !Self::matches_condition(condition, candidate),
        }
    }
}

impl Filter for CatalogFilter {
    fn matches(&self, candidate: &Candidate<'_>) -> bool {
        Self::matches_condition(&self.condition, candidate)
    }
}

/// Reduce `dataset` to the records satisfying every constraint in `query`.
pub fn filter<'a>(dataset: &'a [Record], query: &Query) -> CandidateSet<'a> {
    CatalogFilter::for_query(query).apply(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Choice;

    fn dataset() -> Vec<Record> {
        vec![
            Record::new("X", "Cafe", "Yes", "No", "4.2"),
            Record::new("X", "Cafe", "Yes", "No", "3.0"),
            Record::new("x", "Cafe", "Yes", "No", "4.9"),
            Record::new("X", "Cafe ", "Yes", "No", "4.9"),
            Record::new("X", "Cafe", "No", "No", "4.9"),
            Record::new("X", "Cafe", "Yes", "Yes", "4.9"),
            Record::new("X", "Cafe", "Yes", "No", "N/A"),
            Record::new("X", "Cafe", "Yes", "No", "3.5"),
        ]
    }

    fn query(min: f64) -> Query {
        Query::new("X", "Cafe", Choice::Yes, Choice::No, min).unwrap()
    }

    #[test]
    fn test_filter_applies_all_predicates() {
        let data = dataset();
        let candidates = filter(&data, &query(3.5));
        assert_eq!(candidates.indices(), vec![0, 7]);
    }

    #[test]
    fn test_filter_threshold_is_inclusive() {
        let data = dataset();
        let candidates = filter(&data, &query(3.5));
        assert!(candidates.iter().any(|c| c.rating == 3.5));
    }

    #[test]
    fn test_malformed_rating_excluded_by_positive_minimum() {
        let data = dataset();
        let candidates = filter(&data, &query(0.1));
        assert!(!candidates.indices().contains(&6));

        let candidates = filter(&data, &query(0.0));
        assert!(candidates.indices().contains(&6));
    }

    #[test]
    fn test_filter_no_match() {
        let data = dataset();
        assert!(filter(&data, &query(5.0)).is_empty());
        assert!(filter(&[], &query(0.0)).is_empty());
    }

    #[test]
    fn test_filter_is_pure() {
        let data = dataset();
        let before = data.clone();
        let first = filter(&data, &query(3.0));
        let second = filter(&data, &query(3.0));
        assert_eq!(first, second);
        assert_eq!(data, before);
    }

    #[test]
    fn test_combinators() {
        let data = dataset();
        let filter = CatalogFilter::new(FilterCondition::Or(vec![
            FilterCondition::equals(Field::Location, "x"),
            FilterCondition::And(vec![
                FilterCondition::Not(Box::new(FilterCondition::equals(Field::OnlineOrder, "Yes"))),
                FilterCondition::RatingAtLeast(4.0),
            ]),
        ]));
        assert_eq!(filter.apply(&data).indices(), vec![2, 4]);

        let below = CatalogFilter::new(FilterCondition::RatingBelow(3.5));
        assert_eq!(below.apply(&data).indices(), vec![1, 6]);

        let raw = CatalogFilter::new(FilterCondition::NotEquals {
            field: Field::Rating,
            value: "4.9".to_string(),
        });
        assert_eq!(raw.apply(&data).indices(), vec![0, 1, 6, 7]);
    }
}
