use crate::io::atomic_write_str;
use crate::paths::{ConfigError, GamusPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

/// Escritura con toml_edit para preservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Como `load_section`, pero un archivo o sección ausente devuelve `T::default()`.
  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError>;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: GamusPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: GamusPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &GamusPaths {
    &self.paths
  }

  /// `None` si el archivo de config todavía no existe.
  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let content = match fs::read_to_string(self.paths.config_file()) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let table = self.read_table()?.ok_or_else(|| ConfigError::Other(format!("missing config file {:?}", path)))?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, value)
  }

  fn load_section_with_default<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError> {
    let Some(table) = self.read_table()? else {
      return Ok(T::default());
    };

    match table.get(section) {
      Some(value) => decode_section(section, value),
      None => Ok(T::default()),
    }
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa con `toml` y se reparsea como tabla sin cabecera.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazo en la raíz; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}
