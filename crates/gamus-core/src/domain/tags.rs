use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Diccionario de tags "crudo", tal y como lo entrega el lector externo.
///
/// Las claves se guardan normalizadas (trim + minúsculas). Cada clave puede
/// tener varios valores y el orden de inserción se respeta: el normalizador lo
/// usa como prioridad al elegir el primer valor no vacío.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTags {
  entries: HashMap<String, Vec<String>>,
}

impl RawTags {
  pub fn new() -> Self {
    Self::default()
  }

  /// Normaliza la clave y añade `value` al final de su secuencia.
  pub fn push(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
    let key = key.as_ref().trim().to_lowercase();
    self.entries.entry(key).or_default().push(value.into());
  }

  /// Valores asociados a `key`, en orden de inserción.
  ///
  /// La búsqueda es exacta: `key` debe venir ya en minúsculas.
  pub fn get(&self, key: &str) -> &[String] {
    self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }
}

impl<K, V> FromIterator<(K, V)> for RawTags
where
  K: AsRef<str>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut tags = RawTags::new();
    for (key, value) in iter {
      tags.push(key, value);
    }
    tags
  }
}

/// Propiedades de audio derivadas del códec, independientes de los tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioProperties {
  /// Duración en segundos.
  pub length: i32,
  /// Bitrate en kbps.
  pub bitrate: i32,
}

/// Lo que devuelve un [`TagReader`](crate::ports::TagReader) al leer un archivo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTrack {
  pub tags: RawTags,
  pub properties: AudioProperties,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_normalizes_keys_and_keeps_value_order() {
    let mut tags = RawTags::new();
    tags.push(" GENRE ", "Rock");
    tags.push("genre", "");
    tags.push("Genre", "Pop");

    assert_eq!(tags.len(), 1);
    assert_eq!(tags.get("genre"), ["Rock", "", "Pop"]);
  }

  #[test]
  fn get_missing_key_is_empty() {
    let tags = RawTags::new();
    assert!(tags.get("title").is_empty());
    assert!(!tags.contains_key("title"));
  }

  #[test]
  fn lookup_does_not_normalize() {
    let tags: RawTags = [("Album Artist", "Queen")].into_iter().collect();
    assert_eq!(tags.get("album artist"), ["Queen"]);
    assert!(tags.get("Album Artist").is_empty());
  }
}
