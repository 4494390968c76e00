//! Similarity ranking
//!
//! Orders a candidate set by distance to the query in the encoded feature
//! space and keeps the nearest `k`.

use crate::distance::Metric;
use crate::encoder::FeatureEncoder;
use crate::schema::FeatureSchema;
use dinematch_core::{CandidateSet, Error, Query, Record, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::debug;

/// A ranked candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor<'a> {
    /// Position in the source dataset
    pub index: usize,
    pub record: &'a Record,
    /// Normalized rating
    pub rating: f64,
    /// Distance to the query, smaller is closer
    pub distance: f64,
}

/// Ranker that scores candidates against a query
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    encoder: FeatureEncoder,
    metric: Metric,
}

impl Ranker {
    /// Create a ranker with the given feature schema and cosine distance
    pub fn new(schema: FeatureSchema) -> Result<Self> {
        Ok(Self {
            encoder: FeatureEncoder::new(schema)?,
            metric: Metric::Cosine,
        })
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Get a reference to the schema
    pub fn schema(&self) -> &FeatureSchema {
        self.encoder.schema()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Rank `candidates` by similarity to `query`
    ///
    /// The encoder is fitted on `candidates` for this call only. Returns at
    /// most `k` neighbors, closest first; equal distances keep candidate
    /// order. Asking for more neighbors than there are candidates is not an
    /// error.
    ///
    /// # Errors
    /// * [`Error::EmptyCandidateSet`] - `candidates` is empty
    /// * [`Error::InvalidNeighborCount`] - `k` is zero
    pub fn rank<'a>(
        &self,
        candidates: &CandidateSet<'a>,
        query: &Query,
        k: usize,
    ) -> Result<Vec<Neighbor<'a>>> {
        if candidates.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }
        if k == 0 {
            return Err(Error::InvalidNeighborCount(k));
        }

        let fitted = self.encoder.fit(candidates.as_slice())?;
        let query_vector = fitted.encode(query);

        let mut neighbors: Vec<Neighbor<'a>> = candidates
            .iter()
            .map(|candidate| Neighbor {
                index: candidate.index,
                record: candidate.record,
                rating: candidate.rating,
                distance: self
                    .metric
                    .distance(&query_vector, &fitted.encode(candidate)),
            })
            .collect();

        // Stable: ties stay in candidate order
        neighbors.sort_by_key(|n| OrderedFloat(n.distance));
        neighbors.truncate(k.min(candidates.len()));

        debug!(
            candidates = candidates.len(),
            requested = k,
            returned = neighbors.len(),
            "candidates ranked"
        );
        Ok(neighbors)
    }
}

/// Rank with the default schema and cosine distance
pub fn rank<'a>(
    candidates: &CandidateSet<'a>,
    query: &Query,
    k: usize,
) -> Result<Vec<Neighbor<'a>>> {
    Ranker::default().rank(candidates, query, k)
}
