pub mod metadata;

pub use metadata::{MetadataError, MetadataExtractor, TagReader};
