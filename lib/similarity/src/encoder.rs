//! Feature encoding
//!
//! Encoding happens in two steps. [`FeatureEncoder::fit`] learns the
//! encoding parameters from the candidate set: mean and standard deviation
//! for numeric fields, the category universe for categorical ones. The
//! resulting [`FittedEncoder`] is then applied to the candidates and to the
//! query alike, so both sides always share one representation.
//!
//! Encoders are cheap and request-scoped. Nothing is cached between requests.

use crate::schema::{FeatureKind, FeatureSchema};
use ahash::AHashMap;
use dinematch_core::{Attributes, Error, Field, Result, Vector};
use tracing::trace;

/// Standard deviations at or below this are treated as zero.
const MIN_STD: f64 = 1e-12;

/// Unfitted encoder: a validated schema
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    schema: FeatureSchema,
}

impl FeatureEncoder {
    /// Create an encoder for `schema`.
    ///
    /// Fails with [`Error::InvalidConfig`] if the schema does not validate.
    pub fn new(schema: FeatureSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Learn encoding parameters from `items`.
    ///
    /// Only `items` contribute to the statistics; whatever is encoded later
    /// (typically the query) is mapped through the parameters learned here.
    pub fn fit<A: Attributes>(&self, items: &[A]) -> Result<FittedEncoder> {
        if items.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }

        let columns: Vec<ColumnEncoder> = self
            .schema
            .fields
            .iter()
            .map(|config| match config.kind {
                FeatureKind::Numeric => ColumnEncoder::standard(config.field, config.weight, items),
                FeatureKind::Categorical => {
                    ColumnEncoder::one_hot(config.field, config.weight, items)
                }
            })
            .collect();

        let dim = columns.iter().map(ColumnEncoder::width).sum();
        trace!(dim, samples = items.len(), "feature encoder fitted");

        Ok(FittedEncoder { columns, dim })
    }
}

/// Encoding parameters learned from one candidate set
#[derive(Debug, Clone)]
pub struct FittedEncoder {
    columns: Vec<ColumnEncoder>,
    dim: usize,
}

#[derive(Debug, Clone)]
enum ColumnEncoder {
    Standard {
        field: Field,
        weight: f32,
        mean: f64,
        std: f64,
    },
    OneHot {
        field: Field,
        weight: f32,
        categories: Vec<String>,
        positions: AHashMap<String, usize>,
    },
}

impl ColumnEncoder {
    /// Population mean and standard deviation of the ratings
    fn standard<A: Attributes>(field: Field, weight: f32, items: &[A]) -> Self {
        let n = items.len() as f64;
        let mean = items.iter().map(|item| item.rating()).sum::<f64>() / n;
        let variance = items
            .iter()
            .map(|item| {
                let diff = item.rating() - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        ColumnEncoder::Standard {
            field,
            weight,
            mean,
            std: variance.sqrt(),
        }
    }

    /// Category universe in first-seen order
    fn one_hot<A: Attributes>(field: Field, weight: f32, items: &[A]) -> Self {
        let mut categories = Vec::new();
        let mut positions = AHashMap::new();

        for item in items {
            let value = item.category(field).unwrap_or_default();
            if !positions.contains_key(value) {
                positions.insert(value.to_string(), categories.len());
                categories.push(value.to_string());
            }
        }

        ColumnEncoder::OneHot {
            field,
            weight,
            categories,
            positions,
        }
    }

    fn width(&self) -> usize {
        match self {
            ColumnEncoder::Standard { .. } => 1,
            ColumnEncoder::OneHot { categories, .. } => categories.len(),
        }
    }

    fn field(&self) -> Field {
        match self {
            ColumnEncoder::Standard { field, .. } | ColumnEncoder::OneHot { field, .. } => *field,
        }
    }

    fn encode_into<A: Attributes + ?Sized>(&self, item: &A, out: &mut Vector) {
        match self {
            ColumnEncoder::Standard {
                weight, mean, std, ..
            } => {
                // A constant column carries no information for anyone
                let z = if *std <= MIN_STD {
                    0.0
                } else {
                    (item.rating() - mean) / std
                };
                out.push(z as f32 * weight);
            }
            ColumnEncoder::OneHot {
                field,
                weight,
                categories,
                positions,
            } => {
                let hot = item
                    .category(*field)
                    .and_then(|value| positions.get(value).copied());
                for position in 0..categories.len() {
                    out.push(if Some(position) == hot { *weight } else { 0.0 });
                }
            }
        }
    }
}

impl FittedEncoder {
    /// Length of every encoded vector
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Encode one item. Categories unseen during fitting encode to zeros.
    pub fn encode<A: Attributes + ?Sized>(&self, item: &A) -> Vector {
        let mut vector = Vector::new(Vec::with_capacity(self.dim));
        for column in &self.columns {
            column.encode_into(item, &mut vector);
        }
        vector
    }

    pub fn encode_all<A: Attributes>(&self, items: &[A]) -> Vec<Vector> {
        items.iter().map(|item| self.encode(item)).collect()
    }

    /// Fitted `(mean, std)` of a numeric field
    pub fn scaler(&self, field: Field) -> Option<(f64, f64)> {
        self.columns.iter().find_map(|column| match column {
            ColumnEncoder::Standard {
                field: f,
                mean,
                std,
                ..
            } if *f == field => Some((*mean, *std)),
            _ => None,
        })
    }

    /// Fitted category universe of a categorical field
    pub fn categories(&self, field: Field) -> Option<&[String]> {
        self.columns.iter().find_map(|column| match column {
            ColumnEncoder::OneHot {
                field: f,
                categories,
                ..
            } if *f == field => Some(categories.as_slice()),
            _ => None,
        })
    }

    /// Fields in encoding order
    pub fn fields(&self) -> Vec<Field> {
        self.columns.iter().map(ColumnEncoder::field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FeatureField;
    use dinematch_core::{Candidate, Choice, Query, Record};

    fn records() -> Vec<Record> {
        vec![
            Record::new("X", "Cafe", "Yes", "No", "4.0"),
            Record::new("X", "Bar", "Yes", "No", "3.0"),
            Record::new("Y", "Cafe", "No", "No", "5.0"),
        ]
    }

    fn candidates(records: &[Record]) -> Vec<Candidate<'_>> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| Candidate::new(i, r))
            .collect()
    }

    fn encoder() -> FeatureEncoder {
        FeatureEncoder::new(FeatureSchema::default()).unwrap()
    }

    #[test]
    fn test_fit_requires_samples() {
        let empty: Vec<Candidate<'_>> = Vec::new();
        assert!(matches!(encoder().fit(&empty), Err(Error::EmptyCandidateSet)));
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let result = FeatureEncoder::new(FeatureSchema::new(Vec::new()));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_scaler_uses_population_std() {
        let data = records();
        let fitted = encoder().fit(&candidates(&data)).unwrap();
        let (mean, std) = fitted.scaler(Field::Rating).unwrap();
        assert!((mean - 4.0).abs() < 1e-12);
        assert!((std - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let data = records();
        let fitted = encoder().fit(&candidates(&data)).unwrap();
        assert_eq!(fitted.categories(Field::Location).unwrap(), ["X", "Y"]);
        assert_eq!(fitted.categories(Field::RestaurantType).unwrap(), ["Cafe", "Bar"]);
        assert_eq!(fitted.categories(Field::OnlineOrder).unwrap(), ["Yes", "No"]);
        assert_eq!(fitted.categories(Field::BookTable).unwrap(), ["No"]);
        // 1 + 2 + 2 + 2 + 1
        assert_eq!(fitted.dim(), 8);
        assert_eq!(
            fitted.fields(),
            vec![
                Field::Rating,
                Field::Location,
                Field::RestaurantType,
                Field::OnlineOrder,
                Field::BookTable
            ]
        );
    }

    #[test]
    fn test_encode_candidate() {
        let data = records();
        let items = candidates(&data);
        let fitted = encoder().fit(&items).unwrap();
        let std = (2.0f64 / 3.0).sqrt() as f32;

        let v = fitted.encode(&items[2]);
        let expected = [1.0 / std, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0];
        for (got, want) in v.as_slice().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-5, "{:?}", v);
        }
    }

    #[test]
    fn test_query_uses_candidate_parameters() {
        let data = records();
        let fitted = encoder().fit(&candidates(&data)).unwrap();
        let query = Query::new("Z", "Cafe", Choice::Yes, Choice::Yes, 4.0).unwrap();

        let v = fitted.encode(&query);
        assert_eq!(v.dim(), fitted.dim());
        // rating at the mean, unseen location and booking value encode to zeros
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_constant_rating_encodes_to_zero() {
        let data = vec![Record::new("X", "Cafe", "Yes", "No", "4.2")];
        let fitted = encoder().fit(&candidates(&data)).unwrap();
        let query = Query::new("X", "Cafe", Choice::Yes, Choice::No, 3.5).unwrap();

        assert_eq!(fitted.encode(&query).as_slice()[0], 0.0);
        assert_eq!(fitted.encode(&query), fitted.encode(&candidates(&data)[0]));
    }

    #[test]
    fn test_weights_scale_components() {
        let schema = FeatureSchema::new(vec![
            FeatureField::numeric(Field::Rating, 0.5),
            FeatureField::categorical(Field::Location, 3.0),
        ]);
        let data = records();
        let items = candidates(&data);
        let fitted = FeatureEncoder::new(schema).unwrap().fit(&items).unwrap();

        let v = fitted.encode(&items[0]);
        assert_eq!(v.as_slice(), &[0.0, 3.0, 0.0]);
        assert_eq!(fitted.encode_all(&items).len(), 3);
    }
}
