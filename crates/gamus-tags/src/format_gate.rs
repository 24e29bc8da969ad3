use std::path::Path;

use crate::config::TagsConfig;

/// Extensiones (con el punto) que sabe leer el lector de tags.
pub const SUPPORTED_EXTENSIONS: &[&str] =
  &[".mp3", ".flac", ".aac", ".m4a", ".m4b", ".ogg", ".opus", ".wma", ".wav", ".wv"];

/// `true` si la extensión de `path` está en [`SUPPORTED_EXTENSIONS`].
///
/// Comparación exacta, sensible a mayúsculas. No toca el disco.
pub fn can_read(path: impl AsRef<Path>) -> bool {
  extension(path.as_ref()).is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|e| e.as_bytes() == ext))
}

/// Extensión del último componente, punto incluido ("a/b.flac" -> ".flac").
///
/// Trabaja sobre bytes: un nombre que no es UTF-8 ("Bj\xf6rk.flac") se juzga
/// igual por su extensión. Un nombre como ".flac" cuenta entero como
/// extensión y una ruta que acaba en separador no tiene.
fn extension(path: &Path) -> Option<&[u8]> {
  let raw = path.as_os_str().as_encoded_bytes();
  if raw.last().is_some_and(|b| std::path::is_separator(char::from(*b))) {
    return None;
  }

  let name = path.file_name()?.as_encoded_bytes();
  name.iter().rposition(|b| *b == b'.').map(|idx| &name[idx..])
}

/// Filtro por extensión configurable desde la sección `[tags]`.
#[derive(Debug, Clone)]
pub struct FormatGate {
  extensions: Vec<String>,
  lowercase_extensions: bool,
}

impl FormatGate {
  pub fn new(extensions: Vec<String>, lowercase_extensions: bool) -> Self {
    Self { extensions, lowercase_extensions }
  }

  pub fn from_config(cfg: &TagsConfig) -> Self {
    Self::new(cfg.extensions.clone(), cfg.lowercase_extensions)
  }

  pub fn can_read(&self, path: &Path) -> bool {
    let Some(ext) = extension(path) else {
      return false;
    };

    if self.lowercase_extensions {
      let ext = ext.to_ascii_lowercase();
      self.extensions.iter().any(|e| e.as_bytes() == ext.as_slice())
    } else {
      self.extensions.iter().any(|e| e.as_bytes() == ext)
    }
  }
}

impl Default for FormatGate {
  fn default() -> Self {
    Self::new(SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(), false)
  }
}
