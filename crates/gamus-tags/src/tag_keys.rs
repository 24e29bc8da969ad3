//! Tabla de claves candidatas por campo canónico.
//!
//! Claves normalizadas en minúsculas, con la nomenclatura de Vorbis comments
//! que usan TagLib y Picard:
//! <https://picard-docs.musicbrainz.org/downloads/MusicBrainz_Picard_Tag_Map.html>

pub const KEYS_TITLE: &[&str] = &["title"];

/// MusicBrainz recording ID.
pub const KEYS_BRAINZ_ID: &[&str] = &["musicbrainz_trackid"];

pub const KEYS_ARTIST: &[&str] = &["artist"];

pub const KEYS_ALBUM: &[&str] = &["album"];

// Algunos taggers (foobar2000, APE) escriben "album artist" con espacio.
pub const KEYS_ALBUM_ARTIST: &[&str] = &["albumartist", "album artist"];

pub const KEYS_ALBUM_ARTISTS: &[&str] = &["albumartists", "album_artists"];

/// MusicBrainz release ID.
pub const KEYS_ALBUM_BRAINZ_ID: &[&str] = &["musicbrainz_albumid"];

pub const KEYS_GENRE: &[&str] = &["genre"];

pub const KEYS_GENRES: &[&str] = &["genres"];

pub const KEYS_TRACK_NUMBER: &[&str] = &["tracknumber"];

pub const KEYS_DISC_NUMBER: &[&str] = &["discnumber"];

// La fecha original manda sobre la de la edición.
pub const KEYS_YEAR: &[&str] = &["originaldate", "date", "year"];

/// Campo canónico resuelto a partir de los tags crudos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Title,
  BrainzId,
  Artist,
  Album,
  AlbumArtist,
  AlbumArtists,
  AlbumBrainzId,
  Genre,
  Genres,
  TrackNumber,
  DiscNumber,
  Year,
}

impl Field {
  pub const ALL: [Field; 12] = [
    Field::Title,
    Field::BrainzId,
    Field::Artist,
    Field::Album,
    Field::AlbumArtist,
    Field::AlbumArtists,
    Field::AlbumBrainzId,
    Field::Genre,
    Field::Genres,
    Field::TrackNumber,
    Field::DiscNumber,
    Field::Year,
  ];

  /// Claves candidatas, en orden de prioridad.
  pub const fn keys(self) -> &'static [&'static str] {
    match self {
      Field::Title => KEYS_TITLE,
      Field::BrainzId => KEYS_BRAINZ_ID,
      Field::Artist => KEYS_ARTIST,
      Field::Album => KEYS_ALBUM,
      Field::AlbumArtist => KEYS_ALBUM_ARTIST,
      Field::AlbumArtists => KEYS_ALBUM_ARTISTS,
      Field::AlbumBrainzId => KEYS_ALBUM_BRAINZ_ID,
      Field::Genre => KEYS_GENRE,
      Field::Genres => KEYS_GENRES,
      Field::TrackNumber => KEYS_TRACK_NUMBER,
      Field::DiscNumber => KEYS_DISC_NUMBER,
      Field::Year => KEYS_YEAR,
    }
  }
}
