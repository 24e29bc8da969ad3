use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use gamus_core::{MetadataError, MetadataExtractor, TagReader, TrackInfo};

use crate::lofty_reader::LoftyReader;
use crate::normalize::normalize;

/// Gate + lector externo + normalizador, en una sola pasada.
///
/// Los errores del lector se devuelven tal cual; el normalizador sólo se
/// ejecuta con una lectura completa.
pub struct TagExtractor<R = LoftyReader> {
  reader: Arc<R>,
}

impl<R> Clone for TagExtractor<R> {
  fn clone(&self) -> Self {
    Self { reader: Arc::clone(&self.reader) }
  }
}

impl<R: TagReader> TagExtractor<R> {
  pub fn new(reader: R) -> Self {
    Self { reader: Arc::new(reader) }
  }

  pub fn can_read(&self, path: &Path) -> bool {
    self.reader.can_read(path)
  }

  /// Versión bloqueante, para llamar fuera de un runtime async.
  pub fn extract_sync(&self, path: &Path) -> Result<TrackInfo, MetadataError> {
    extract_with(self.reader.as_ref(), path)
  }
}

impl Default for TagExtractor<LoftyReader> {
  fn default() -> Self {
    Self::new(LoftyReader::default())
  }
}

fn extract_with<R: TagReader + ?Sized>(reader: &R, path: &Path) -> Result<TrackInfo, MetadataError> {
  if !reader.can_read(path) {
    return Err(MetadataError::Unsupported(path.display().to_string()));
  }

  let raw = reader.read(path)?;
  let info = normalize(&raw.tags, &raw.properties);

  tracing::debug!(file = %path.display(), title = %info.title, album = %info.album, "normalized tags");

  Ok(info)
}

#[async_trait]
impl<R: TagReader + 'static> MetadataExtractor for TagExtractor<R> {
  async fn extract_from_path(&self, path: &Path) -> Result<TrackInfo, MetadataError> {
    let reader = Arc::clone(&self.reader);
    let path_buf = PathBuf::from(path);

    // El lector bloquea: fuera del executor.
    tokio::task::spawn_blocking(move || extract_with(reader.as_ref(), &path_buf))
      .await
      .map_err(|e| MetadataError::Internal(format!("Tokio Task Join Error: {}", e)))?
  }
}
