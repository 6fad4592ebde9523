//! # Feed-Forward Surname Classifier
//!
//! Forward-pass pipeline: embedding → flatten → linear → ReLU →
//! dropout (training only) → linear → raw logits. Normalization (softmax)
//! is an external collaborator's responsibility.

pub mod classifier;
pub mod config;

mod layers;

pub use classifier::SurnameClassifier;
pub use config::ClassifierConfig;
