pub mod tags;
pub mod track_info;

pub use tags::{AudioProperties, RawTags, RawTrack};
pub use track_info::TrackInfo;
