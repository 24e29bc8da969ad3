use std::path::Path;

use crate::domain::{RawTrack, TrackInfo};

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
  #[error("io error: {0}")]
  Io(String),

  #[error("unsupported format: {0}")]
  Unsupported(String),

  #[error("corrupt metadata: {0}")]
  Corrupt(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port del lector externo de tags (TagLib, Lofty, FFmpeg...).
///
/// Es síncrono porque la decodificación del contenedor es bloqueante; quien
/// lo use desde async debe moverlo a un hilo aparte.
pub trait TagReader: Send + Sync {
  /// Decide, sólo por la ruta, si este lector acepta el archivo. No hace I/O.
  fn can_read(&self, path: &Path) -> bool;

  /// Lee el diccionario crudo y las propiedades de audio.
  fn read(&self, path: &Path) -> Result<RawTrack, MetadataError>;
}

/// Port que abstrae la obtención del registro canónico de un archivo.
///
/// Los errores del lector se propagan sin modificar.
#[async_trait::async_trait]
pub trait MetadataExtractor: Send + Sync {
  async fn extract_from_path(&self, path: &Path) -> Result<TrackInfo, MetadataError>;
}
