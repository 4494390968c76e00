//! Feature schema definitions
//!
//! Declares which record attributes make up the feature vector, how each is
//! encoded, and how much each contributes. The field order of the schema is
//! the order of the encoded components.

use dinematch_core::Field;
use serde::{Deserialize, Serialize};

/// Ordered list of feature fields.
///
/// The default schema encodes the rating as a standard score followed by the
/// four categorical columns one-hot encoded, each with weight 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSchema {
    /// Schema version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    pub fields: Vec<FeatureField>,
}

fn default_version() -> u32 {
    1
}

impl Default for FeatureSchema {
    fn default() -> Self {
        let mut fields = vec![FeatureField::numeric(Field::Rating, 1.0)];
        fields.extend(
            Field::CATEGORICAL
                .iter()
                .map(|field| FeatureField::categorical(*field, 1.0)),
        );
        Self::new(fields)
    }
}

impl FeatureSchema {
    pub fn new(fields: Vec<FeatureField>) -> Self {
        Self { version: 1, fields }
    }

    /// Validate the schema
    /// - At least one field
    /// - No field listed twice
    /// - Encoding kind fits the field (rating numeric, the rest categorical)
    /// - Weights finite and non-negative
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        for (i, config) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.field == config.field) {
                return Err(SchemaError::DuplicateField(config.field));
            }

            let fits = match config.kind {
                FeatureKind::Numeric => !config.field.is_categorical(),
                FeatureKind::Categorical => config.field.is_categorical(),
            };
            if !fits {
                return Err(SchemaError::InvalidKindForField {
                    field: config.field,
                    kind: config.kind,
                });
            }

            if !config.weight.is_finite() || config.weight < 0.0 {
                return Err(SchemaError::InvalidWeight(config.field));
            }
        }

        Ok(())
    }

    /// Get a field config by field
    pub fn get_field(&self, field: Field) -> Option<&FeatureField> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// Configuration for a single feature field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureField {
    pub field: Field,

    #[serde(rename = "type")]
    pub kind: FeatureKind,

    /// Multiplier applied to every encoded component of this field
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl FeatureField {
    pub fn numeric(field: Field, weight: f32) -> Self {
        Self {
            field,
            kind: FeatureKind::Numeric,
            weight,
        }
    }

    pub fn categorical(field: Field, weight: f32) -> Self {
        Self {
            field,
            kind: FeatureKind::Categorical,
            weight,
        }
    }
}

/// How a field is encoded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Standard score (zero mean, unit variance) over the candidate set
    Numeric,
    /// One-hot over the categories present in the candidate set
    Categorical,
}

/// Errors that can occur during schema validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema cannot be empty")]
    EmptySchema,

    #[error("Field '{0}' is listed more than once")]
    DuplicateField(Field),

    #[error("Field '{field}' cannot be encoded as {kind:?}")]
    InvalidKindForField { field: Field, kind: FeatureKind },

    #[error("Field '{0}' has a negative or non-finite weight")]
    InvalidWeight(Field),
}

impl From<SchemaError> for dinematch_core::Error {
    fn from(err: SchemaError) -> Self {
        dinematch_core::Error::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema() {
        let schema = FeatureSchema::default();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.fields.len(), 5);
        assert_eq!(schema.fields[0].field, Field::Rating);
        assert_eq!(schema.fields[0].kind, FeatureKind::Numeric);
        assert!(schema.fields[1..]
            .iter()
            .all(|f| f.kind == FeatureKind::Categorical));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_empty_schema_error() {
        let schema = FeatureSchema::new(Vec::new());
        assert_eq!(schema.validate(), Err(SchemaError::EmptySchema));
    }

    #[test]
    fn test_duplicate_field_error() {
        let schema = FeatureSchema::new(vec![
            FeatureField::categorical(Field::Location, 1.0),
            FeatureField::categorical(Field::Location, 0.5),
        ]);
        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicateField(Field::Location))
        );
    }

    #[test]
    fn test_kind_mismatch_error() {
        let schema = FeatureSchema::new(vec![FeatureField::categorical(Field::Rating, 1.0)]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidKindForField { field: Field::Rating, .. })
        ));

        let schema = FeatureSchema::new(vec![FeatureField::numeric(Field::Location, 1.0)]);
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidKindForField { field: Field::Location, .. })
        ));
    }

    #[test]
    fn test_weight_errors() {
        let schema = FeatureSchema::new(vec![FeatureField::numeric(Field::Rating, -0.5)]);
        assert_eq!(schema.validate(), Err(SchemaError::InvalidWeight(Field::Rating)));

        let schema = FeatureSchema::new(vec![FeatureField::numeric(Field::Rating, f32::NAN)]);
        assert_eq!(schema.validate(), Err(SchemaError::InvalidWeight(Field::Rating)));
    }

    #[test]
    fn test_get_field() {
        let schema = FeatureSchema::default();
        assert_eq!(schema.get_field(Field::BookTable).unwrap().weight, 1.0);
        let partial = FeatureSchema::new(vec![FeatureField::numeric(Field::Rating, 1.0)]);
        assert!(partial.get_field(Field::Location).is_none());
    }

    #[test]
    fn test_schema_from_json() {
        let json = r#"{
            "fields": [
                {"field": "rate", "type": "numeric", "weight": 2.0},
                {"field": "rest_type", "type": "categorical"}
            ]
        }"#;
        let schema: FeatureSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.version, 1);
        assert_eq!(schema.fields[0], FeatureField::numeric(Field::Rating, 2.0));
        assert_eq!(
            schema.fields[1],
            FeatureField::categorical(Field::RestaurantType, 1.0)
        );
        assert!(schema.validate().is_ok());
    }
}
