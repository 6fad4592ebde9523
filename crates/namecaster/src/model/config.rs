//! # Classifier Configuration

use rand::Rng;

use crate::encoding::DEFAULT_MAX_SURNAME_LEN;
use crate::errors::{NCResult, NamecasterError};
use crate::model::SurnameClassifier;

/// Default probability of zeroing a hidden unit during training.
pub const DEFAULT_DROPOUT: f32 = 0.3;

/// Classifier hyperparameters, fixed at construction.
///
/// Changing the vocabulary size after construction requires building a
/// new classifier; there is no dynamic reconfiguration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Number of vocabulary entries (embedding table rows).
    pub vocab_size: usize,

    /// Width of each character embedding.
    pub embedding_dim: usize,

    /// Width of the hidden layer.
    pub hidden_dim: usize,

    /// Number of nationality classes.
    pub num_classes: usize,

    /// Fixed encoded-surname length.
    pub max_len: usize,

    /// Probability of zeroing a hidden unit during training.
    pub dropout: f32,
}

impl ClassifierConfig {
    /// Create a configuration with default length and dropout.
    ///
    /// ## Arguments
    /// * `vocab_size` - Number of vocabulary entries, including the two
    ///   reserved tokens.
    /// * `embedding_dim` - Width of each character embedding.
    /// * `hidden_dim` - Width of the hidden layer.
    /// * `num_classes` - Number of nationality classes.
    ///
    /// ## Returns
    /// A new `ClassifierConfig` instance.
    pub fn new(
        vocab_size: usize,
        embedding_dim: usize,
        hidden_dim: usize,
        num_classes: usize,
    ) -> Self {
        Self {
            vocab_size,
            embedding_dim,
            hidden_dim,
            num_classes,
            max_len: DEFAULT_MAX_SURNAME_LEN,
            dropout: DEFAULT_DROPOUT,
        }
    }

    /// Set the fixed encoded-surname length.
    ///
    /// ## Arguments
    /// * `max_len` - The new length.
    ///
    /// ## Returns
    /// The updated `ClassifierConfig` instance.
    pub fn with_max_len(
        self,
        max_len: usize,
    ) -> Self {
        Self { max_len, ..self }
    }

    /// Set the dropout probability.
    ///
    /// ## Arguments
    /// * `dropout` - The new probability, in `[0, 1)`.
    ///
    /// ## Returns
    /// The updated `ClassifierConfig` instance.
    pub fn with_dropout(
        self,
        dropout: f32,
    ) -> Self {
        Self { dropout, ..self }
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> NCResult<()> {
        if self.vocab_size < 2 {
            return Err(NamecasterError::BadConfig(format!(
                "vocab_size ({}) must cover the two reserved tokens",
                self.vocab_size
            )));
        }
        for (name, dim) in [
            ("embedding_dim", self.embedding_dim),
            ("hidden_dim", self.hidden_dim),
            ("num_classes", self.num_classes),
            ("max_len", self.max_len),
        ] {
            if dim == 0 {
                return Err(NamecasterError::BadConfig(format!("{name} must be > 0")));
            }
        }
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(NamecasterError::BadConfig(format!(
                "dropout ({}) must be in [0, 1)",
                self.dropout
            )));
        }
        Ok(())
    }

    /// Initialize a classifier from this configuration.
    ///
    /// ## Arguments
    /// * `rng` - Random source for parameter initialization.
    ///
    /// ## Returns
    /// A new [`SurnameClassifier`], or a config error.
    pub fn init<R: Rng>(
        &self,
        rng: &mut R,
    ) -> NCResult<SurnameClassifier> {
        SurnameClassifier::init(self.clone(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::new(40, 8, 16, 4);
        assert_eq!(config.max_len, 20);
        assert_eq!(config.dropout, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ClassifierConfig::new(40, 8, 16, 4)
            .with_max_len(5)
            .with_dropout(0.5);
        assert_eq!(config.max_len, 5);
        assert_eq!(config.dropout, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClassifierConfig::new(1, 8, 16, 4).validate().is_err());
        assert!(ClassifierConfig::new(40, 0, 16, 4).validate().is_err());
        assert!(ClassifierConfig::new(40, 8, 16, 4)
            .with_dropout(1.0)
            .validate()
            .is_err());
    }
}
