use std::fs::File;
use std::path::Path;

use lofty::aac::AacFile;
use lofty::ape::ApeTag;
use lofty::config::ParseOptions;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::flac::FlacFile;
use lofty::id3::v2::{Frame, Id3v2Tag};
use lofty::iff::wav::WavFile;
use lofty::mpeg::MpegFile;
use lofty::ogg::{OpusFile, VorbisComments, VorbisFile};
use lofty::tag::{Tag, TagType};
use lofty::wavpack::WavPackFile;

use gamus_core::{AudioProperties, MetadataError, RawTags, RawTrack, TagReader};

use crate::format_gate::FormatGate;

/// Lector de tags basado en `lofty`.
///
/// Las claves se emiten con la nomenclatura de Vorbis comments en minúsculas
/// ("title", "albumartist", "musicbrainz_trackid"...), sea cual sea el
/// formato de origen (ID3v2, APE, MP4 ilst, RIFF INFO...). Las claves libres
/// sin equivalente genérico ("genres", "album_artists"...) se recogen de los
/// tags concretos: Vorbis comments, TXXX de ID3v2 e items APE.
#[derive(Debug, Clone, Default)]
pub struct LoftyReader {
  gate: FormatGate,
}

impl LoftyReader {
  pub fn new(gate: FormatGate) -> Self {
    Self { gate }
  }
}

impl TagReader for LoftyReader {
  fn can_read(&self, path: &Path) -> bool {
    self.gate.can_read(path)
  }

  fn read(&self, path: &Path) -> Result<RawTrack, MetadataError> {
    let tagged_file = lofty::read_from_path(path).map_err(|e| map_lofty_error(path, e))?;

    let mut tags = raw_tags(&tagged_file);
    append_free_form(&mut tags, path, tagged_file.file_type());
    let properties = audio_properties(&tagged_file);

    tracing::debug!(
      file = %path.display(),
      keys = tags.len(),
      length = properties.length,
      bitrate = properties.bitrate,
      "read raw tags"
    );

    Ok(RawTrack { tags, properties })
  }
}

/// Vuelca todos los tags del archivo, empezando por el primario.
fn raw_tags(file: &TaggedFile) -> RawTags {
  let mut raw = RawTags::new();

  let primary = file.primary_tag();
  let primary_type = primary.map(Tag::tag_type);

  for tag in primary.into_iter().chain(file.tags().iter().filter(|t| Some(t.tag_type()) != primary_type)) {
    append_tag(&mut raw, tag);
  }

  raw
}

fn append_tag(raw: &mut RawTags, tag: &Tag) {
  for item in tag.items() {
    // Sin nombre Vorbis el campo no le sirve al normalizador.
    let Some(key) = item.key().map_key(TagType::VorbisComments) else {
      continue;
    };
    if let Some(text) = item.value().text() {
      raw.push(key, text);
    }
  }
}

/// Añade las claves que el `Tag` genérico descarta por no tener `ItemKey`.
///
/// Sólo entran claves que la pasada genérica no produjo, para no duplicar
/// valores. Un fallo aquí no invalida la lectura ya hecha.
fn append_free_form(raw: &mut RawTags, path: &Path, file_type: FileType) {
  let generic = raw.clone();
  let mut free_form = RawTags::new();

  match file_type {
    FileType::Flac => {
      if let Some(file) = read_concrete::<FlacFile>(path) {
        if let Some(vc) = file.vorbis_comments() {
          push_vorbis(&mut free_form, vc);
        }
        if let Some(id3) = file.id3v2() {
          push_id3v2(&mut free_form, id3);
        }
      }
    }
    FileType::Vorbis => {
      if let Some(file) = read_concrete::<VorbisFile>(path) {
        push_vorbis(&mut free_form, file.vorbis_comments());
      }
    }
    FileType::Opus => {
      if let Some(file) = read_concrete::<OpusFile>(path) {
        push_vorbis(&mut free_form, file.vorbis_comments());
      }
    }
    FileType::Mpeg => {
      if let Some(file) = read_concrete::<MpegFile>(path) {
        if let Some(id3) = file.id3v2() {
          push_id3v2(&mut free_form, id3);
        }
        if let Some(ape) = file.ape() {
          push_ape(&mut free_form, ape);
        }
      }
    }
    FileType::Aac => {
      if let Some(file) = read_concrete::<AacFile>(path) {
        if let Some(id3) = file.id3v2() {
          push_id3v2(&mut free_form, id3);
        }
      }
    }
    FileType::Wav => {
      if let Some(file) = read_concrete::<WavFile>(path) {
        if let Some(id3) = file.id3v2() {
          push_id3v2(&mut free_form, id3);
        }
      }
    }
    FileType::WavPack => {
      if let Some(file) = read_concrete::<WavPackFile>(path) {
        if let Some(ape) = file.ape() {
          push_ape(&mut free_form, ape);
        }
      }
    }
    // TODO: MP4 freeform atoms (`----:com.apple.iTunes:GENRES`).
    _ => {}
  }

  for key in free_form.keys().filter(|k| !generic.contains_key(k)) {
    for value in free_form.get(key) {
      raw.push(key, value.as_str());
    }
  }
}

fn read_concrete<F: AudioFile>(path: &Path) -> Option<F> {
  let mut file = match File::open(path) {
    Ok(f) => f,
    Err(e) => {
      tracing::warn!(file = %path.display(), error = %e, "could not reopen file for free-form tags");
      return None;
    }
  };

  match F::read_from(&mut file, ParseOptions::new().read_properties(false)) {
    Ok(concrete) => Some(concrete),
    Err(e) => {
      tracing::warn!(file = %path.display(), error = %e, "could not read free-form tags");
      None
    }
  }
}

fn push_vorbis(raw: &mut RawTags, vc: &VorbisComments) {
  for (key, value) in vc.items() {
    raw.push(key, value);
  }
}

/// TXXX por descripción; los valores múltiples de ID3v2.4 van separados por NUL.
fn push_id3v2(raw: &mut RawTags, tag: &Id3v2Tag) {
  for frame in tag {
    if let Frame::UserText(txxx) = frame {
      push_split(raw, &txxx.description, &txxx.content);
    }
  }
}

fn push_ape(raw: &mut RawTags, tag: &ApeTag) {
  for item in tag {
    if let Some(text) = item.value().text() {
      push_split(raw, item.key(), text);
    }
  }
}

fn push_split(raw: &mut RawTags, key: &str, value: &str) {
  for part in value.split('\0') {
    raw.push(key, part);
  }
}

fn audio_properties(file: &TaggedFile) -> AudioProperties {
  let props = file.properties();
  AudioProperties {
    length: i32::try_from(props.duration().as_secs()).unwrap_or(i32::MAX),
    bitrate: props.audio_bitrate().map_or(0, |b| i32::try_from(b).unwrap_or(i32::MAX)),
  }
}

fn map_lofty_error(path: &Path, err: LoftyError) -> MetadataError {
  tracing::warn!(file = %path.display(), error = %err, "lofty could not read file");

  match err.kind() {
    ErrorKind::Io(e) => MetadataError::Io(format!("{}: {e}", path.display())),
    ErrorKind::UnknownFormat => MetadataError::Unsupported(path.display().to_string()),
    _ => MetadataError::Corrupt(format!("{}: {err}", path.display())),
  }
}
