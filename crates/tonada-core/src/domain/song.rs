use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ids::SongId;

/// Clave de identidad de una canción: la tupla (artista, título, álbum, género).
///
/// Dos canciones del catálogo nunca comparten los cuatro campos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SongKey {
  pub artist: String,
  pub title: String,
  pub album: String,
  pub genre: String,
}

impl SongKey {
  pub fn new(
    artist: impl Into<String>,
    title: impl Into<String>,
    album: impl Into<String>,
    genre: impl Into<String>,
  ) -> Self {
    Self { artist: artist.into(), title: title.into(), album: album.into(), genre: genre.into() }
  }
}

impl fmt::Display for SongKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - {} ({}, {})", self.artist, self.title, self.album, self.genre)
  }
}

/// Índice primario del catálogo: único dueño de las canciones.
pub type SongStore = HashMap<SongId, Song>;

/// Una canción del catálogo.
///
/// Los cuatro campos de identidad no cambian después de crearla. Lo único que
/// evoluciona es la lista de playlists, que solo crece y se mantiene ordenada
/// alfabéticamente y sin duplicados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  pub artist: String,
  pub title: String,
  pub album: String,
  pub genre: String,
  playlists: Vec<String>,
}

impl Song {
  pub(crate) fn new(id: SongId, key: SongKey, mut playlists: Vec<String>) -> Self {
    playlists.sort();
    playlists.dedup();

    let SongKey { artist, title, album, genre } = key;
    Self { id, artist, title, album, genre, playlists }
  }

  pub fn key(&self) -> SongKey {
    SongKey::new(&self.artist, &self.title, &self.album, &self.genre)
  }

  /// Playlists a las que pertenece, en orden alfabético.
  pub fn playlists(&self) -> &[String] {
    &self.playlists
  }

  pub fn is_in_playlist(&self, name: &str) -> bool {
    self.playlists.binary_search_by(|p| p.as_str().cmp(name)).is_ok()
  }

  /// Registra la pertenencia a `name`. Devuelve `false` si ya estaba.
  pub(crate) fn join_playlist(&mut self, name: &str) -> bool {
    match self.playlists.binary_search_by(|p| p.as_str().cmp(name)) {
      Ok(_) => false,
      Err(pos) => {
        self.playlists.insert(pos, name.to_owned());
        true
      }
    }
  }
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Song [artist={}, title={}, album={}, genre={}, playlists=[{}]]",
      self.artist,
      self.title,
      self.album,
      self.genre,
      self.playlists.join(", ")
    )
  }
}
