//! # dinematch
//!
//! Restaurant recommendations by filter-then-rank.
//!
//! A request narrows a static restaurant dataset down to the records that
//! satisfy every hard constraint (location, restaurant type, online ordering,
//! table booking, minimum rating), then orders the survivors by cosine
//! distance to the query in a feature space fitted on those survivors.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! dinematch --data zomato.csv --location Indiranagar --rest-type Cafe \
//!     --online-order Yes --book-table No --min-rating 4.0
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use dinematch::prelude::*;
//!
//! let dataset = vec![
//!     Record::new("X", "Cafe", "Yes", "No", "4.2"),
//!     Record::new("X", "Cafe", "Yes", "No", "3.0"),
//! ];
//! let input = QueryInput {
//!     location: "X".to_string(),
//!     restaurant_type: "Cafe".to_string(),
//!     accepts_online_order: "Yes".to_string(),
//!     allows_table_booking: "No".to_string(),
//!     minimum_rating: "3.5".to_string(),
//! };
//!
//! let recommender = Recommender::new(RecommendConfig::default()).unwrap();
//! let recommendation = recommender.recommend(&dataset, &input).unwrap();
//! assert_eq!(recommendation.results().len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `dinematch-core` - Records, queries, rating normalization, catalog filter
//! - `dinematch-similarity` - Feature schema, encoder, ranker
//! - `dinematch` - Recommender pipeline, CSV loading, command line

pub mod dataset;
pub mod recommender;

// Re-export core types
pub use dinematch_core::{
    filter, normalize_rating, Attributes, Candidate, CandidateSet, CatalogFilter, Choice, Error,
    Field, Filter, FilterCondition, Query, QueryInput, Record, Result, Vector,
};

// Re-export similarity
pub use dinematch_similarity::{
    rank, FeatureEncoder, FeatureField, FeatureKind, FeatureSchema, FittedEncoder, Metric,
    Neighbor, RankedRow, Ranker, RankingStats,
};

pub use dataset::{load_csv, read_csv};
pub use recommender::{Recommendation, RecommendationView, RecommendConfig, Recommender};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_csv, Choice, Error, FeatureSchema, Metric, Neighbor, Query, QueryInput,
        Recommendation, RecommendConfig, Recommender, Record, Result,
    };
}
