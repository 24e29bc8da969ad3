use serde::{Deserialize, Serialize};

/// Registro canónico de un archivo de audio, independiente del formato.
///
/// Los campos de texto quedan vacíos y los numéricos a cero cuando no hay
/// dato utilizable; nunca se distingue entre "ausente" y "vacío".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
  pub title: String,
  pub artist: String,
  pub album: String,
  pub album_artist: String,
  pub album_artists: Vec<String>,
  pub genre: String,
  pub genres: Vec<String>,
  /// MusicBrainz recording ID.
  pub brainz_id: String,
  /// MusicBrainz release ID.
  pub album_brainz_id: String,
  pub track_number: i64,
  pub disc_number: i64,
  pub year: i64,
  /// Duración en segundos, copiada de las propiedades de audio.
  pub length: i32,
  /// Bitrate en kbps, copiado de las propiedades de audio.
  pub bitrate: i32,
}
