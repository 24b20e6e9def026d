// Adapters layer: concrete implementations of the domain ports for external data.

pub mod dataset;

pub use dataset::{Dataset, DatasetLoader};
