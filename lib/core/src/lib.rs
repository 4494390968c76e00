//! # dinematch Core
//!
//! Core library for the dinematch restaurant recommender.
//!
//! This crate provides the dataset model and the catalog filter:
//!
//! - [`Record`] - One dataset row, kept exactly as loaded
//! - [`Query`] - A validated recommendation request
//! - [`normalize_rating`] - Total conversion of raw rating text to a number
//! - [`CatalogFilter`] - Exact-match and threshold predicates over records
//! - [`CandidateSet`] - Request-scoped views of the records that matched
//! - [`Vector`] - Dense feature vector with cosine distance
//!
//! ## Example
//!
//! ```rust
//! use dinematch_core::{filter, Query, QueryInput, Record};
//!
//! let dataset = vec![
//!     Record::new("Indiranagar", "Cafe", "Yes", "No", "4.2"),
//!     Record::new("Indiranagar", "Cafe", "Yes", "No", "N/A"),
//! ];
//!
//! let query = Query::parse(&QueryInput {
//!     location: "Indiranagar".to_string(),
//!     restaurant_type: "Cafe".to_string(),
//!     accepts_online_order: "Yes".to_string(),
//!     allows_table_booking: "No".to_string(),
//!     minimum_rating: "3.5".to_string(),
//! }).unwrap();
//!
//! let candidates = filter(&dataset, &query);
//! assert_eq!(candidates.indices(), vec![0]);
//! ```

pub mod candidate;
pub mod error;
pub mod filter;
pub mod rating;
pub mod record;
pub mod vector;

pub use candidate::{Candidate, CandidateSet};
pub use error::{Error, Result};
pub use filter::{filter, CatalogFilter, Filter, FilterCondition};
pub use rating::{normalize_rating, RATING_FLOOR};
pub use record::{Attributes, Choice, Field, ParseChoiceError, Query, QueryInput, Record};
pub use vector::Vector;
