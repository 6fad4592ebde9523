//! # Surname Classifier Forward Pass

use ndarray::{Array2, s};
use rand::Rng;

use crate::errors::{NCResult, NamecasterError};
use crate::model::ClassifierConfig;
use crate::model::layers::{Embedding, Linear};

/// Feed-forward surname classifier.
///
/// Consumes `(batch, max_len)` batches of character indices and produces
/// `(batch, num_classes)` raw logits. There is no mode flag: training and
/// inference are separate entry points ([`forward_train`] /
/// [`forward_eval`]), so dropout state cannot leak between calls.
///
/// Forward passes never mutate parameters; the type is `Send + Sync` and
/// batches may be evaluated in parallel by an external collaborator, as
/// long as no parameter update overlaps the evaluation.
///
/// [`forward_train`]: Self::forward_train
/// [`forward_eval`]: Self::forward_eval
#[derive(Debug, Clone)]
pub struct SurnameClassifier {
    config: ClassifierConfig,
    embedding: Embedding,
    fc1: Linear,
    fc2: Linear,
}

impl SurnameClassifier {
    /// Initialize a classifier.
    ///
    /// ## Arguments
    /// * `config` - The validated hyperparameters.
    /// * `rng` - Random source for parameter initialization.
    ///
    /// ## Returns
    /// A new `SurnameClassifier` instance, or a config error.
    pub fn init<R: Rng>(
        config: ClassifierConfig,
        rng: &mut R,
    ) -> NCResult<Self> {
        config.validate()?;
        log::info!(
            "initializing classifier: vocab={} embed={} hidden={} classes={} len={}",
            config.vocab_size,
            config.embedding_dim,
            config.hidden_dim,
            config.num_classes,
            config.max_len,
        );

        let embedding = Embedding::init(config.vocab_size, config.embedding_dim, rng)?;
        let fc1 = Linear::init(config.embedding_dim * config.max_len, config.hidden_dim, rng);
        let fc2 = Linear::init(config.hidden_dim, config.num_classes, rng);

        Ok(Self {
            config,
            embedding,
            fc1,
            fc2,
        })
    }

    /// Get the attached configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Embed a `(batch, max_len)` index batch and flatten to
    /// `(batch, max_len · embedding_dim)`.
    ///
    /// The flattening is a position-preserving concatenation: slot `i`
    /// occupies columns `i·E .. (i+1)·E`, not an aggregation.
    ///
    /// Fails fast on contract violations: a batch width other than
    /// `max_len`, or any index outside the embedding table.
    fn embed_flatten(
        &self,
        batch: &Array2<usize>,
    ) -> NCResult<Array2<f32>> {
        let (rows, width) = batch.dim();
        if width != self.config.max_len {
            return Err(NamecasterError::SequenceLengthMismatch {
                expected: self.config.max_len,
                actual: width,
            });
        }

        let embed_dim = self.config.embedding_dim;
        let mut flat = Array2::zeros((rows, width * embed_dim));
        for (r, row) in batch.outer_iter().enumerate() {
            for (i, &token) in row.iter().enumerate() {
                if token >= self.config.vocab_size {
                    return Err(NamecasterError::TokenOutOfRange {
                        token,
                        vocab_size: self.config.vocab_size,
                    });
                }
                flat.slice_mut(s![r, i * embed_dim..(i + 1) * embed_dim])
                    .assign(&self.embedding.weight.row(token));
            }
        }
        Ok(flat)
    }

    /// Shared head of both forward passes: embed, flatten, first affine
    /// stage, ReLU.
    fn hidden(
        &self,
        batch: &Array2<usize>,
    ) -> NCResult<Array2<f32>> {
        let flat = self.embed_flatten(batch)?;
        Ok(self.fc1.forward(&flat).mapv(|v| v.max(0.0)))
    }

    /// Inference forward pass; dropout is a no-op.
    ///
    /// ## Arguments
    /// * `batch` - `(batch, max_len)` character indices.
    ///
    /// ## Returns
    /// `(batch, num_classes)` raw, unnormalized logits.
    pub fn forward_eval(
        &self,
        batch: &Array2<usize>,
    ) -> NCResult<Array2<f32>> {
        let hidden = self.hidden(batch)?;
        Ok(self.fc2.forward(&hidden))
    }

    /// Training forward pass with inverted dropout on the hidden layer.
    ///
    /// Each hidden unit is zeroed with probability `config.dropout`;
    /// survivors are scaled by `1 / (1 - dropout)` so the expected
    /// activation matches inference.
    ///
    /// ## Arguments
    /// * `batch` - `(batch, max_len)` character indices.
    /// * `rng` - Random source for the dropout mask.
    ///
    /// ## Returns
    /// `(batch, num_classes)` raw, unnormalized logits.
    pub fn forward_train<R: Rng>(
        &self,
        batch: &Array2<usize>,
        rng: &mut R,
    ) -> NCResult<Array2<f32>> {
        let mut hidden = self.hidden(batch)?;

        let p = self.config.dropout;
        if p > 0.0 {
            let keep = 1.0 - p;
            hidden = hidden.mapv(|v| {
                if rng.random::<f32>() < p {
                    0.0
                } else {
                    v / keep
                }
            });
        }

        Ok(self.fc2.forward(&hidden))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn test_classifier(max_len: usize) -> SurnameClassifier {
        let mut rng = StdRng::seed_from_u64(42);
        ClassifierConfig::new(12, 4, 8, 3)
            .with_max_len(max_len)
            .init(&mut rng)
            .unwrap()
    }

    #[test]
    fn test_output_shape() {
        let classifier = test_classifier(5);
        check_is_send(&classifier);
        check_is_sync(&classifier);

        for batch_size in [1, 2, 7] {
            let batch = Array2::from_elem((batch_size, 5), 2_usize);
            let logits = classifier.forward_eval(&batch).unwrap();
            assert_eq!(logits.dim(), (batch_size, 3));
        }
    }

    #[test]
    fn test_eval_is_deterministic() {
        let classifier = test_classifier(5);
        let batch = Array2::from_elem((3, 5), 4_usize);

        let a = classifier.forward_eval(&batch).unwrap();
        let b = classifier.forward_eval(&batch).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pad_batch_rows_identical() {
        let classifier = test_classifier(5);

        // All-pad inputs embed to zero vectors; every row is the same.
        let batch = Array2::zeros((4, 5));
        let logits = classifier.forward_eval(&batch).unwrap();
        assert_eq!(logits.dim(), (4, 3));

        let first = logits.row(0).to_vec();
        for row in logits.outer_iter() {
            assert_eq!(row.to_vec(), first);
        }
    }

    #[test]
    fn test_wrong_width_fails_fast() {
        let classifier = test_classifier(5);
        let batch = Array2::zeros((2, 4));
        assert!(matches!(
            classifier.forward_eval(&batch),
            Err(NamecasterError::SequenceLengthMismatch {
                expected: 5,
                actual: 4,
            })
        ));
    }

    #[test]
    fn test_out_of_range_token_fails_fast() {
        let classifier = test_classifier(5);
        let mut batch = Array2::zeros((1, 5));
        batch[[0, 2]] = 12;
        assert!(matches!(
            classifier.forward_eval(&batch),
            Err(NamecasterError::TokenOutOfRange {
                token: 12,
                vocab_size: 12,
            })
        ));
    }

    #[test]
    fn test_train_without_dropout_matches_eval() {
        let mut rng = StdRng::seed_from_u64(42);
        let classifier = ClassifierConfig::new(12, 4, 8, 3)
            .with_max_len(5)
            .with_dropout(0.0)
            .init(&mut rng)
            .unwrap();

        let batch = Array2::from_elem((2, 5), 3_usize);
        let train = classifier.forward_train(&batch, &mut rng).unwrap();
        let eval = classifier.forward_eval(&batch).unwrap();
        assert_eq!(train, eval);
    }

    #[test]
    fn test_position_order_matters() {
        let classifier = test_classifier(5);

        let forward = Array2::from_shape_vec((1, 5), vec![2, 3, 0, 0, 0]).unwrap();
        let reversed = Array2::from_shape_vec((1, 5), vec![3, 2, 0, 0, 0]).unwrap();

        let a = classifier.forward_eval(&forward).unwrap();
        let b = classifier.forward_eval(&reversed).unwrap();
        assert_ne!(a, b);
    }
}
