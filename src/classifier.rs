pub mod attention_classifier;

pub use attention_classifier::{classify, AttentionState};
