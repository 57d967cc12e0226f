//! Analysis engine for determining version bumps from commits

pub mod bump_classifier;

pub use bump_classifier::{classify, BumpClassifier};
