use serde::{Deserialize, Serialize};

use crate::domain::ids::SongId;
use crate::domain::song::SongStore;
use crate::domain::sort::SortMode;

/// Lista ordenada de referencias a canciones.
///
/// No es dueña de las canciones: guarda [`SongId`] que apuntan al índice
/// primario del catálogo. El orden es el de inserción hasta que se reordena
/// explícitamente, y una misma canción puede aparecer más de una vez.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  name: String,
  songs: Vec<SongId>,
}

impl Playlist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), songs: Vec::new() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Añade la canción al final.
  pub fn add_song(&mut self, id: SongId) {
    self.songs.push(id);
  }

  /// Canciones en el orden actual. No copia nada.
  pub fn song_ids(&self) -> &[SongId] {
    &self.songs
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  /// Reordena por artista, luego título, luego género.
  pub fn sort_by_artist(&mut self, store: &SongStore) {
    self.sort_by_mode(SortMode::Artist, store);
  }

  /// Reordena por título, luego artista, luego género.
  pub fn sort_by_title(&mut self, store: &SongStore) {
    self.sort_by_mode(SortMode::Title, store);
  }

  // `sort_by` es estable: entradas repetidas conservan su orden relativo.
  fn sort_by_mode(&mut self, mode: SortMode, store: &SongStore) {
    self.songs.sort_by(|a, b| match (store.get(a), store.get(b)) {
      (Some(a), Some(b)) => mode.compare(a, b),
      (a, b) => a.is_some().cmp(&b.is_some()),
    });
  }
}
