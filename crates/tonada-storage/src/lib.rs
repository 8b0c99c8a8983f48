//! Adapter de almacenamiento en archivo plano para el catálogo.

pub mod config;

use std::path::{Path, PathBuf};

use tonada_core::ports::{LibraryRepository, RepoError};
use tonada_core::{LoadReport, MusicLibrary};
use tracing::debug;

pub use config::StorageConfig;

/// Base de datos de música en un único archivo `artist;title;album;genre[;playlist]*`.
#[derive(Debug, Clone)]
pub struct FileLibraryRepository {
  path: PathBuf,
}

impl FileLibraryRepository {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Usa `db_path` de la sección `[storage]` de `tonada.toml`.
  pub fn from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(|e| RepoError::Storage(e.to_string()))?;
    Ok(Self::from(cfg))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl From<StorageConfig> for FileLibraryRepository {
  fn from(cfg: StorageConfig) -> Self {
    Self::new(cfg.db_path)
  }
}

impl LibraryRepository for FileLibraryRepository {
  fn load_into(&self, library: &mut MusicLibrary) -> Result<LoadReport, RepoError> {
    debug!(path = %self.path.display(), "loading music db");
    Ok(library.load_music_db(&self.path)?)
  }

  fn save(&self, library: &MusicLibrary) -> Result<(), RepoError> {
    library.write_music_db(&self.path)?;
    Ok(())
  }
}
