//! Presentation helpers for ranked results
//!
//! Flattens neighbors into serializable rows and summarizes a ranking.

use crate::rank::Neighbor;
use serde::Serialize;

/// A ranked result flattened for output
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRow {
    /// Position in the source dataset
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    pub rest_type: String,
    pub online_order: String,
    pub book_table: String,
    /// Raw rating text as found in the dataset
    pub rate: String,
    /// Normalized rating
    pub rating: f64,
    pub distance: f64,
}

impl From<&Neighbor<'_>> for RankedRow {
    fn from(neighbor: &Neighbor<'_>) -> Self {
        let record = neighbor.record;
        Self {
            index: neighbor.index,
            name: record.name.clone(),
            location: record.location.clone(),
            rest_type: record.restaurant_type.clone(),
            online_order: record.accepts_online_order.clone(),
            book_table: record.allows_table_booking.clone(),
            rate: record.rating.clone(),
            rating: neighbor.rating,
            distance: neighbor.distance,
        }
    }
}

impl RankedRow {
    pub fn from_neighbors(neighbors: &[Neighbor<'_>]) -> Vec<Self> {
        neighbors.iter().map(Self::from).collect()
    }
}

/// Summary statistics for one ranking
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingStats {
    /// Number of candidates considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Distance of the closest result
    pub best_distance: Option<f64>,
    /// Mean distance of the returned results
    pub mean_distance: Option<f64>,
}

impl RankingStats {
    /// Compute stats from ranked results (closest first)
    pub fn compute(results: &[Neighbor<'_>], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                best_distance: None,
                mean_distance: None,
            };
        }

        let total: f64 = results.iter().map(|n| n.distance).sum();

        Self {
            candidates_count,
            results_count: results.len(),
            best_distance: Some(results[0].distance),
            mean_distance: Some(total / results.len() as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinematch_core::Record;

    fn neighbor(record: &Record, index: usize, distance: f64) -> Neighbor<'_> {
        Neighbor {
            index,
            record,
            rating: 4.0,
            distance,
        }
    }

    #[test]
    fn test_row_from_neighbor() {
        let record = Record::new("HSR", "Cafe", "Yes", "No", " 4.0").with_name("Third Wave");
        let row = RankedRow::from(&neighbor(&record, 12, 0.25));

        assert_eq!(row.index, 12);
        assert_eq!(row.name.as_deref(), Some("Third Wave"));
        assert_eq!(row.rest_type, "Cafe");
        assert_eq!(row.rate, " 4.0");
        assert_eq!(row.rating, 4.0);
        assert_eq!(row.distance, 0.25);
    }

    #[test]
    fn test_row_serialization() {
        let record = Record::new("HSR", "Cafe", "Yes", "No", "4.0");
        let rows = RankedRow::from_neighbors(&[neighbor(&record, 0, 0.0)]);
        let json = serde_json::to_value(&rows).unwrap();

        assert_eq!(json[0]["location"], "HSR");
        assert_eq!(json[0]["distance"], 0.0);
        assert!(json[0].get("name").is_none());
    }

    #[test]
    fn test_ranking_stats() {
        let record = Record::new("HSR", "Cafe", "Yes", "No", "4.0");
        let results = vec![
            neighbor(&record, 0, 0.1),
            neighbor(&record, 1, 0.2),
            neighbor(&record, 2, 0.3),
        ];

        let stats = RankingStats::compute(&results, 10);

        assert_eq!(stats.candidates_count, 10);
        assert_eq!(stats.results_count, 3);
        assert_eq!(stats.best_distance, Some(0.1));
        assert!((stats.mean_distance.unwrap() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RankingStats::compute(&[], 5);

        assert_eq!(stats.candidates_count, 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_distance, None);
    }
}
