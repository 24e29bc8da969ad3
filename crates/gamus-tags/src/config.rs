use gamus_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

use crate::format_gate::SUPPORTED_EXTENSIONS;

const SECTION: &str = "tags";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TagsConfig {
  /// Extensiones aceptadas por el lector, con el punto (".flac").
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,

  /// Pasar la extensión a minúsculas antes de compararla.
  #[serde(default)]
  pub lowercase_extensions: bool,
}

fn default_extensions() -> Vec<String> {
  SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for TagsConfig {
  fn default() -> Self {
    TagsConfig { extensions: default_extensions(), lowercase_extensions: false }
  }
}

impl TagsConfig {
  /// Carga `[tags]` de gamus.toml y reescribe la sección con los defaults aplicados.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = Self::load_from(&*CONFIG_BACKEND)?;
    cfg.save_to(&*CONFIG_BACKEND)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default(SECTION)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}
