use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One catalog entry, as read from the dataset.
///
/// Every attribute is kept exactly as it appears in the source, including
/// the free-form `rate` column. Records are never modified after loading;
/// normalized ratings live in per-request [`Candidate`](crate::Candidate)
/// views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name, not used for matching or ranking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    #[serde(rename = "rest_type")]
    pub restaurant_type: String,
    #[serde(rename = "online_order")]
    pub accepts_online_order: String,
    #[serde(rename = "book_table")]
    pub allows_table_booking: String,
    /// Raw rating text, possibly malformed
    #[serde(rename = "rate")]
    pub rating: String,
}

impl Record {
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        restaurant_type: impl Into<String>,
        accepts_online_order: impl Into<String>,
        allows_table_booking: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            location: location.into(),
            restaurant_type: restaurant_type.into(),
            accepts_online_order: accepts_online_order.into(),
            allows_table_booking: allows_table_booking.into(),
            rating: rating.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Raw text of a column. For [`Field::Rating`] this is the unnormalized
    /// rating string.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Rating => &self.rating,
            Field::Location => &self.location,
            Field::RestaurantType => &self.restaurant_type,
            Field::OnlineOrder => &self.accepts_online_order,
            Field::BookTable => &self.allows_table_booking,
        }
    }
}

/// The attributes shared by records and queries.
///
/// Serde names follow the dataset columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "rate")]
    Rating,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "rest_type")]
    RestaurantType,
    #[serde(rename = "online_order")]
    OnlineOrder,
    #[serde(rename = "book_table")]
    BookTable,
}

impl Field {
    pub const CATEGORICAL: [Field; 4] = [
        Field::Location,
        Field::RestaurantType,
        Field::OnlineOrder,
        Field::BookTable,
    ];

    /// Dataset column name
    pub fn column(&self) -> &'static str {
        match self {
            Field::Rating => "rate",
            Field::Location => "location",
            Field::RestaurantType => "rest_type",
            Field::OnlineOrder => "online_order",
            Field::BookTable => "book_table",
        }
    }

    #[inline]
    pub fn is_categorical(&self) -> bool {
        !matches!(self, Field::Rating)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Read access to the comparable attributes of a record or query.
///
/// Both sides of a similarity computation go through this trait so that they
/// are encoded by exactly the same code.
pub trait Attributes {
    /// Categorical value of `field`, `None` for [`Field::Rating`]
    fn category(&self, field: Field) -> Option<&str>;

    /// Numeric rating
    fn rating(&self) -> f64;
}

/// A `Yes`/`No` answer for the boolean-like columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    #[default]
    Yes,
    No,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Yes => "Yes",
            Choice::No => "No",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not exactly `Yes` or `No`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected \"Yes\" or \"No\", got {0:?}")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Choice::Yes),
            "No" => Ok(Choice::No),
            other => Err(ParseChoiceError(other.to_string())),
        }
    }
}

/// Query fields exactly as collected at the input boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryInput {
    pub location: String,
    #[serde(rename = "rest_type")]
    pub restaurant_type: String,
    #[serde(rename = "online_order")]
    pub accepts_online_order: String,
    #[serde(rename = "book_table")]
    pub allows_table_booking: String,
    pub minimum_rating: String,
}

/// A validated recommendation request.
///
/// Carries the hard constraints used by the catalog filter. The minimum
/// rating doubles as the query's rating preference when ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    location: String,
    #[serde(rename = "rest_type")]
    restaurant_type: String,
    #[serde(rename = "online_order")]
    accepts_online_order: Choice,
    #[serde(rename = "book_table")]
    allows_table_booking: Choice,
    minimum_rating: f64,
}

impl Query {
    /// Build a query from already-typed values.
    ///
    /// Fails with [`Error::InvalidQuery`] if `minimum_rating` is not finite.
    pub fn new(
        location: impl Into<String>,
        restaurant_type: impl Into<String>,
        accepts_online_order: Choice,
        allows_table_booking: Choice,
        minimum_rating: f64,
    ) -> Result<Self> {
        if !minimum_rating.is_finite() {
            return Err(Error::invalid_query(
                "minimum_rating",
                format!("{} is not a finite number", minimum_rating),
            ));
        }
        Ok(Self {
            location: location.into(),
            restaurant_type: restaurant_type.into(),
            accepts_online_order,
            allows_table_booking,
            minimum_rating,
        })
    }

    /// Validate raw boundary input.
    ///
    /// Unlike dataset ratings, an unparseable minimum rating is never
    /// defaulted: it is the user's explicit constraint.
    pub fn parse(input: &QueryInput) -> Result<Self> {
        let accepts_online_order = input
            .accepts_online_order
            .parse::<Choice>()
            .map_err(|e| Error::invalid_query("online_order", e.to_string()))?;
        let allows_table_booking = input
            .allows_table_booking
            .parse::<Choice>()
            .map_err(|e| Error::invalid_query("book_table", e.to_string()))?;
        let minimum_rating = input
            .minimum_rating
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                Error::invalid_query(
                    "minimum_rating",
                    format!("{:?} is not a number", input.minimum_rating),
                )
            })?;

        Self::new(
            input.location.clone(),
            input.restaurant_type.clone(),
            accepts_online_order,
            allows_table_booking,
            minimum_rating,
        )
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn restaurant_type(&self) -> &str {
        &self.restaurant_type
    }

    pub fn accepts_online_order(&self) -> Choice {
        self.accepts_online_order
    }

    pub fn allows_table_booking(&self) -> Choice {
        self.allows_table_booking
    }

    pub fn minimum_rating(&self) -> f64 {
        self.minimum_rating
    }
}

impl TryFrom<&QueryInput> for Query {
    type Error = Error;

    fn try_from(input: &QueryInput) -> Result<Self> {
        Query::parse(input)
    }
}

impl Attributes for Query {
    fn category(&self, field: Field) -> Option<&str> {
        match field {
            Field::Rating => None,
            Field::Location => Some(&self.location),
            Field::RestaurantType => Some(&self.restaurant_type),
            Field::OnlineOrder => Some(self.accepts_online_order.as_str()),
            Field::BookTable => Some(self.allows_table_booking.as_str()),
        }
    }

    fn rating(&self) -> f64 {
        self.minimum_rating
    }
}
