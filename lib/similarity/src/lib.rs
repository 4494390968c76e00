//! # dinematch Similarity
//!
//! Nearest-neighbor ranking of restaurant candidates against a query.
//!
//! ## Features
//!
//! - **Feature Schema**: Declarative list of the fields that make up the feature vector
//! - **Per-request Encoding**: Standard-scored rating plus one-hot categories, fitted on the candidates
//! - **Cosine Ranking**: Stable top-k by cosine (or Euclidean) distance
//! - **Explain**: Flattened rows and summary stats for presentation
//!
//! ## Example
//!
//! ```rust
//! use dinematch_core::{filter, Choice, Query, Record};
//! use dinematch_similarity::Ranker;
//!
//! let dataset = vec![
//!     Record::new("X", "Cafe", "Yes", "No", "4.2"),
//!     Record::new("X", "Cafe", "Yes", "No", "3.0"),
//! ];
//! let query = Query::new("X", "Cafe", Choice::Yes, Choice::No, 3.5).unwrap();
//!
//! let candidates = filter(&dataset, &query);
//! let neighbors = Ranker::default().rank(&candidates, &query, 5).unwrap();
//! assert_eq!(neighbors.len(), 1);
//! assert_eq!(neighbors[0].distance, 0.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Schema    │────>│   Encoder   │────>│   Fitted    │
//! │  (fields)   │     │ (fit on set)│     │  Encoder    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                      ┌─────────────┐           │
//!                      │   Ranker    │<──────────┘
//!                      │ (distances) │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │  Explain    │
//!                      │  (results)  │
//!                      └─────────────┘
//! ```

pub mod distance;
pub mod encoder;
pub mod explain;
pub mod rank;
pub mod schema;

// Re-export main types for convenience
pub use distance::{cosine_distance, Metric};
pub use encoder::{FeatureEncoder, FittedEncoder};
pub use explain::{RankedRow, RankingStats};
pub use rank::{rank, Neighbor, Ranker};
pub use schema::{FeatureField, FeatureKind, FeatureSchema, SchemaError};
