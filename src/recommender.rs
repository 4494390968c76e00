use dinematch_core::{filter, Error, Query, QueryInput, Record, Result};
use dinematch_similarity::{FeatureSchema, Metric, Neighbor, RankedRow, Ranker, RankingStats};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for a recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Neighbors retrieved by the ranker
    pub neighbors: usize,
    /// Results kept for display, applied after ranking
    pub display_limit: usize,
    pub metric: Metric,
    pub schema: FeatureSchema,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            neighbors: 5,
            display_limit: 3,
            metric: Metric::Cosine,
            schema: FeatureSchema::default(),
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.neighbors == 0 {
            return Err(Error::InvalidConfig("neighbors must be at least 1".to_string()));
        }
        if self.display_limit == 0 {
            return Err(Error::InvalidConfig(
                "display_limit must be at least 1".to_string(),
            ));
        }
        self.schema
            .validate()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Parse a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Outcome of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation<'a> {
    /// No record satisfied the constraints. The ranker was not run.
    NoMatch { dataset_size: usize },
    Matches {
        /// Closest first, at most `display_limit` long
        results: Vec<Neighbor<'a>>,
        stats: RankingStats,
    },
}

impl<'a> Recommendation<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, Recommendation::Matches { .. })
    }

    pub fn results(&self) -> &[Neighbor<'a>] {
        match self {
            Recommendation::NoMatch { .. } => &[],
            Recommendation::Matches { results, .. } => results,
        }
    }

    /// Serializable form
    pub fn view(&self) -> RecommendationView {
        match self {
            Recommendation::NoMatch { .. } => RecommendationView::NoMatch,
            Recommendation::Matches { results, stats } => RecommendationView::Matches {
                results: RankedRow::from_neighbors(results),
                stats: stats.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecommendationView {
    NoMatch,
    Matches {
        results: Vec<RankedRow>,
        stats: RankingStats,
    },
}

/// Filter-then-rank pipeline
#[derive(Debug, Clone)]
pub struct Recommender {
    ranker: Ranker,
    neighbors: usize,
    display_limit: usize,
}

impl Recommender {
    pub fn new(config: RecommendConfig) -> Result<Self> {
        config.validate()?;
        let ranker = Ranker::new(config.schema)?.with_metric(config.metric);
        Ok(Self {
            ranker,
            neighbors: config.neighbors,
            display_limit: config.display_limit,
        })
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Validate raw input, then recommend.
    ///
    /// # Errors
    /// [`Error::InvalidQuery`] if the input does not validate. Nothing is
    /// filtered in that case.
    pub fn recommend<'a>(
        &self,
        dataset: &'a [Record],
        input: &QueryInput,
    ) -> Result<Recommendation<'a>> {
        let query = Query::parse(input)?;
        self.recommend_query(dataset, &query)
    }

    /// Filter `dataset` by `query`, rank the survivors, keep the display
    /// limit.
    pub fn recommend_query<'a>(
        &self,
        dataset: &'a [Record],
        query: &Query,
    ) -> Result<Recommendation<'a>> {
        let candidates = filter(dataset, query);
        if candidates.is_empty() {
            info!(dataset = dataset.len(), "no restaurants matched the constraints");
            return Ok(Recommendation::NoMatch {
                dataset_size: dataset.len(),
            });
        }

        let mut results = self.ranker.rank(&candidates, query, self.neighbors)?;
        let stats = RankingStats::compute(&results, candidates.len());
        results.truncate(self.display_limit);

        debug!(
            candidates = candidates.len(),
            ranked = stats.results_count,
            shown = results.len(),
            "recommendation ready"
        );
        Ok(Recommendation::Matches { results, stats })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self {
            ranker: Ranker::default(),
            neighbors: 5,
            display_limit: 3,
        }
    }
}
