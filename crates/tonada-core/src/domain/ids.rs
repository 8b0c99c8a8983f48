use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador interno de una canción dentro de un [`MusicLibrary`].
///
/// Es el "handle" que guardan las playlists y los índices secundarios; la
/// canción en sí solo vive en el índice primario del catálogo. No forma parte
/// del formato de persistencia: al recargar un archivo se generan ids nuevos.
///
/// [`MusicLibrary`]: crate::catalog::MusicLibrary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    SongId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for SongId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u)
  }
}

impl From<SongId> for Uuid {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
