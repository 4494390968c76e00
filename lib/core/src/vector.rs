use serde::{Deserialize, Serialize};

/// A dense feature vector
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    pub fn push(&mut self, value: f32) {
        self.data.push(value);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, values: &[f32]) {
        self.data.extend_from_slice(values);
    }

    /// Dot product, accumulated in f64
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum()
    }

    /// Euclidean norm, accumulated in f64
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Cosine similarity with another vector.
    ///
    /// Mismatched dimensions and zero-norm vectors have similarity 0.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (self.dot(other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }

    /// `1 - cosine_similarity`, in `[0, 2]`
    #[inline]
    pub fn cosine_distance(&self, other: &Vector) -> f64 {
        1.0 - self.cosine_similarity(other)
    }

    /// Compute L2 (Euclidean) distance
    #[inline]
    pub fn l2_distance(&self, other: &Vector) -> f64 {
        if self.dim() != other.dim() {
            return f64::INFINITY;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| {
                let d = f64::from(*a) - f64::from(*b);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Vector::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![1.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-9);

        let v3 = Vector::new(vec![1.0, 0.0]);
        let v4 = Vector::new(vec![0.0, 1.0]);
        assert!(v3.cosine_similarity(&v4).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_distance_range() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![-1.0, -2.0, -3.0]);
        assert!(a.cosine_distance(&a).abs() < 1e-9);
        assert!((a.cosine_distance(&b) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_vectors() {
        let zero = Vector::zeros(3);
        let a = Vector::new(vec![1.0, 1.0, 0.0]);
        assert_eq!(zero.cosine_similarity(&a), 0.0);
        assert_eq!(zero.cosine_distance(&a), 1.0);

        let short = Vector::new(vec![1.0]);
        assert_eq!(a.cosine_similarity(&short), 0.0);
    }

    #[test]
    fn test_l2_distance() {
        let v1 = Vector::new(vec![0.0, 0.0]);
        let v2 = Vector::new(vec![3.0, 4.0]);
        assert!((v1.l2_distance(&v2) - 5.0).abs() < 1e-9);
        assert_eq!(v1.l2_distance(&Vector::zeros(3)), f64::INFINITY);
    }

    #[test]
    fn test_norm() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-9);
        assert_eq!(v.dot(&v), 25.0);
    }
}
