use thiserror::Error;

use crate::domain::SongKey;

/// Errores de las operaciones del catálogo.
///
/// `SongAlreadyExists`, `SongNotFound` y `PlaylistNotFound` son recuperables:
/// el catálogo queda igual que antes de la llamada. `Io` cubre fallos de
/// lectura/escritura del archivo de base de datos (un archivo inexistente al
/// cargar no es un error).
#[derive(Debug, Error)]
pub enum LibraryError {
  #[error("song already exists: {0}")]
  SongAlreadyExists(SongKey),

  #[error("song not found: {0}")]
  SongNotFound(String),

  #[error("playlist not found: {0}")]
  PlaylistNotFound(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
