//! Layer classifier: path conventions to architectural layers.

pub mod classifier;
pub mod table;

pub use classifier::{Classification, LayerClassifier};
pub use table::{Layer, LayerTable};
