//! Normalización de tags de audio al registro canónico de Gamus.
//!
//! - [`format_gate`]: qué extensiones se intentan leer.
//! - [`normalize`]: tags crudos + propiedades -> [`TrackInfo`](gamus_core::TrackInfo).
//! - [`LoftyReader`] / [`TagExtractor`]: lectura real de archivos.

pub mod config;
pub mod extractor;
pub mod format_gate;
pub mod lofty_reader;
pub mod normalize;
pub mod tag_keys;

pub use config::TagsConfig;
pub use extractor::TagExtractor;
pub use format_gate::{FormatGate, SUPPORTED_EXTENSIONS, can_read};
pub use lofty_reader::LoftyReader;
pub use normalize::{int_sep, normalize};
pub use tag_keys::Field;
