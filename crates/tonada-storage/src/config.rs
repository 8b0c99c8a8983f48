use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tonada_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend, TonadaPaths};

const SECTION: &str = "storage";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  pub db_path: PathBuf,
}

/// Lo que hay realmente en el TOML; los campos ausentes toman el default.
#[derive(Debug, Default, Deserialize)]
struct RawStorageConfig {
  db_path: Option<PathBuf>,
}

impl StorageConfig {
  pub fn default_for(paths: &TonadaPaths) -> Self {
    StorageConfig { db_path: paths.data_dir.join("music.db") }
  }

  /// Lee `[storage]` de `tonada.toml` y escribe de vuelta los valores
  /// efectivos, para que el usuario vea qué ruta se está usando.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_with(&CONFIG_BACKEND)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_with(&CONFIG_BACKEND)
  }

  pub fn load_with(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let raw: RawStorageConfig = backend.load_section_with_default(SECTION)?;
    let cfg = match raw.db_path {
      Some(db_path) => StorageConfig { db_path },
      None => Self::default_for(backend.paths()),
    };
    cfg.save_with(backend)?;
    Ok(cfg)
  }

  pub fn save_with(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn backend_in(base: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(TonadaPaths::from_base(base).unwrap())
  }

  #[test]
  fn test_missing_config_uses_data_dir_and_persists_it() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let cfg = StorageConfig::load_with(&backend).unwrap();

    assert_eq!(cfg.db_path, backend.paths().data_dir.join("music.db"));
    let written = fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(written.contains("[storage]"));
    assert!(written.contains("music.db"));
  }

  #[test]
  fn test_configured_path_wins() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "[storage]\ndb_path = \"/srv/music/catalog.db\"\n")
      .unwrap();

    let cfg = StorageConfig::load_with(&backend).unwrap();

    assert_eq!(cfg.db_path, PathBuf::from("/srv/music/catalog.db"));
  }
}
