use crate::rating::normalize_rating;
use crate::record::{Attributes, Field, Record};

/// A request-scoped view of one dataset record.
///
/// Holds the record's position in the dataset and its normalized rating. The
/// record itself is borrowed, so building views never touches the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Position in the source dataset
    pub index: usize,
    pub record: &'a Record,
    /// Normalized rating, always finite
    pub rating: f64,
}

impl<'a> Candidate<'a> {
    #[inline]
    pub fn new(index: usize, record: &'a Record) -> Self {
        Self {
            index,
            record,
            rating: normalize_rating(&record.rating),
        }
    }
}

impl Attributes for Candidate<'_> {
    fn category(&self, field: Field) -> Option<&str> {
        if field.is_categorical() {
            Some(self.record.field(field))
        } else {
            None
        }
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}

/// Records that satisfied every hard constraint, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet<'a> {
    candidates: Vec<Candidate<'a>>,
}

impl<'a> CandidateSet<'a> {
    pub fn new(candidates: Vec<Candidate<'a>>) -> Self {
        Self { candidates }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Candidate<'a>] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<'a>> {
        self.candidates.iter()
    }

    /// Dataset positions of the candidates
    pub fn indices(&self) -> Vec<usize> {
        self.candidates.iter().map(|c| c.index).collect()
    }
}

impl<'a> IntoIterator for CandidateSet<'a> {
    type Item = Candidate<'a>;
    type IntoIter = std::vec::IntoIter<Candidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s CandidateSet<'a> {
    type Item = &'s Candidate<'a>;
    type IntoIter = std::slice::Iter<'s, Candidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl<'a> FromIterator<Candidate<'a>> for CandidateSet<'a> {
    fn from_iter<I: IntoIterator<Item = Candidate<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_normalizes_without_touching_record() {
        let record = Record::new("X", "Cafe", "Yes", "No", "N/A");
        let candidate = Candidate::new(7, &record);
        assert_eq!(candidate.index, 7);
        assert_eq!(candidate.rating, 0.0);
        assert_eq!(record.rating, "N/A");
    }

    #[test]
    fn test_candidate_attributes() {
        let record = Record::new("X", "Cafe", "Yes", "No", "4.5");
        let candidate = Candidate::new(0, &record);
        assert_eq!(candidate.category(Field::RestaurantType), Some("Cafe"));
        assert_eq!(candidate.category(Field::BookTable), Some("No"));
        assert_eq!(candidate.category(Field::Rating), None);
        assert_eq!(Attributes::rating(&candidate), 4.5);
    }

    #[test]
    fn test_candidate_set_collect() {
        let records = vec![
            Record::new("X", "Cafe", "Yes", "No", "4.0"),
            Record::new("Y", "Cafe", "Yes", "No", "3.0"),
        ];
        let set: CandidateSet<'_> = records
            .iter()
            .enumerate()
            .map(|(i, r)| Candidate::new(i, r))
            .collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.indices(), vec![0, 1]);
        assert!(CandidateSet::default().is_empty());
    }
}
