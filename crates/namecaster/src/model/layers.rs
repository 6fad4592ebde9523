//! # Parameter Layers

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::errors::{NCResult, NamecasterError};

/// Character embedding table.
///
/// Row 0 is the pad row and is pinned to all zeros, so pad positions
/// contribute nothing to the flattened feature vector. An external
/// training loop must keep that row out of gradient updates.
#[derive(Debug, Clone)]
pub(crate) struct Embedding {
    /// `(vocab_size, embedding_dim)` weight table.
    pub(crate) weight: Array2<f32>,
}

impl Embedding {
    /// Initialize with standard-normal rows and a zeroed pad row.
    pub(crate) fn init<R: Rng>(
        vocab_size: usize,
        embedding_dim: usize,
        rng: &mut R,
    ) -> NCResult<Self> {
        let normal = Normal::new(0.0_f32, 1.0)
            .map_err(|e| NamecasterError::BadConfig(e.to_string()))?;
        let mut weight =
            Array2::from_shape_fn((vocab_size, embedding_dim), |_| normal.sample(rng));
        weight.row_mut(0).fill(0.0);
        Ok(Self { weight })
    }
}

/// Affine transform stage.
#[derive(Debug, Clone)]
pub(crate) struct Linear {
    /// `(in_dim, out_dim)` weight matrix.
    weight: Array2<f32>,

    /// `(out_dim,)` bias vector.
    bias: Array1<f32>,
}

impl Linear {
    /// Initialize with uniform weights in `±1/sqrt(in_dim)`.
    pub(crate) fn init<R: Rng>(
        in_dim: usize,
        out_dim: usize,
        rng: &mut R,
    ) -> Self {
        let bound = 1.0 / (in_dim as f32).sqrt();
        Self {
            weight: Array2::from_shape_fn((in_dim, out_dim), |_| {
                rng.random_range(-bound..bound)
            }),
            bias: Array1::from_shape_fn(out_dim, |_| rng.random_range(-bound..bound)),
        }
    }

    /// Apply `x · W + b` to a `(batch, in_dim)` input.
    pub(crate) fn forward(
        &self,
        x: &Array2<f32>,
    ) -> Array2<f32> {
        x.dot(&self.weight) + &self.bias
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_embedding_pad_row_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let embedding = Embedding::init(10, 4, &mut rng).unwrap();

        assert_eq!(embedding.weight.dim(), (10, 4));
        assert!(embedding.weight.row(0).iter().all(|&v| v == 0.0));
        assert!(embedding.weight.row(1).iter().any(|&v| v != 0.0));
    }

    #[test]
    fn test_linear_shapes_and_bias() {
        let mut rng = StdRng::seed_from_u64(7);
        let linear = Linear::init(3, 2, &mut rng);

        let out = linear.forward(&Array2::zeros((4, 3)));
        assert_eq!(out.dim(), (4, 2));

        // Zero input passes the bias through to every row.
        for row in out.outer_iter() {
            assert_eq!(row.to_vec(), linear.bias.to_vec());
        }
    }
}
