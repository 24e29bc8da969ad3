pub mod domain;
pub mod ports;

pub use domain::{AudioProperties, RawTags, RawTrack, TrackInfo};
pub use ports::{MetadataError, MetadataExtractor, TagReader};
