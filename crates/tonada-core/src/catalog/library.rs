use std::collections::HashMap;

use tracing::debug;

use crate::catalog::view::{PlaylistMut, PlaylistView};
use crate::domain::{Playlist, Song, SongId, SongKey, SongStore, SortMode};
use crate::errors::LibraryError;

/// Catálogo en memoria de canciones y playlists.
///
/// El índice primario (`songs`) es el único dueño de cada [`Song`]. Todo lo
/// demás guarda [`SongId`]:
///
/// - `keys`: clave de identidad → id, para rechazar duplicados en O(1).
/// - `by_artist` / `by_genre` / `by_title`: índices secundarios mantenidos al
///   insertar, de modo que una consulta cuesta O(resultados) y no O(catálogo).
/// - `playlists`: nombre → [`Playlist`].
///
/// Las canciones nunca se borran, así que los índices no pueden divergir del
/// índice primario.
#[derive(Debug, Default)]
pub struct MusicLibrary {
  songs: SongStore,
  keys: HashMap<SongKey, SongId>,
  by_artist: HashMap<String, Vec<SongId>>,
  by_genre: HashMap<String, Vec<SongId>>,
  by_title: HashMap<String, Vec<SongId>>,
  playlists: HashMap<String, Playlist>,
}

impl MusicLibrary {
  pub fn new() -> Self {
    Self::default()
  }

  /// Número de canciones.
  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  pub fn playlist_count(&self) -> usize {
    self.playlists.len()
  }

  // -------- COMANDOS (escritura) --------

  /// Añade una canción y la apunta a cada playlist de `playlists`, creando las
  /// que falten.
  ///
  /// Falla con [`LibraryError::SongAlreadyExists`] si ya hay una canción con
  /// los mismos cuatro campos; en ese caso el catálogo no cambia.
  pub fn add_song<S: AsRef<str>>(
    &mut self,
    artist: &str,
    title: &str,
    album: &str,
    genre: &str,
    playlists: &[S],
  ) -> Result<SongId, LibraryError> {
    let names = playlists.iter().map(|p| p.as_ref().to_owned()).collect();
    self.insert(SongKey::new(artist, title, album, genre), names)
  }

  pub(crate) fn insert(
    &mut self,
    key: SongKey,
    playlists: Vec<String>,
  ) -> Result<SongId, LibraryError> {
    if self.keys.contains_key(&key) {
      return Err(LibraryError::SongAlreadyExists(key));
    }

    let id = SongId::new();
    let song = Song::new(id, key.clone(), playlists);

    self.by_artist.entry(song.artist.clone()).or_default().push(id);
    self.by_genre.entry(song.genre.clone()).or_default().push(id);
    self.by_title.entry(song.title.clone()).or_default().push(id);

    // `song.playlists()` ya viene ordenada y sin repetidos.
    for name in song.playlists() {
      self
        .playlists
        .entry(name.clone())
        .or_insert_with(|| Playlist::new(name.as_str()))
        .add_song(id);
    }

    self.keys.insert(key, id);
    self.songs.insert(id, song);
    Ok(id)
  }

  /// Crea una playlist vacía. Si ya existe no hace nada.
  pub fn create_playlist(&mut self, name: &str) {
    if self.playlists.contains_key(name) {
      debug!(playlist = name, "playlist already exists");
      return;
    }
    self.playlists.insert(name.to_owned(), Playlist::new(name));
  }

  /// Añade a `playlist_name` todas las canciones cuyo título es `title`, en
  /// orden de inserción en el catálogo. Devuelve cuántas se añadieron.
  ///
  /// No deduplica: añadir dos veces la misma canción la deja repetida en la
  /// playlist. La canción sí registra la pertenencia una sola vez.
  pub fn add_song_to_playlist(
    &mut self,
    title: &str,
    playlist_name: &str,
  ) -> Result<usize, LibraryError> {
    let playlist = self
      .playlists
      .get_mut(playlist_name)
      .ok_or_else(|| LibraryError::PlaylistNotFound(playlist_name.to_owned()))?;

    let ids = match self.by_title.get(title) {
      Some(ids) if !ids.is_empty() => ids,
      _ => return Err(LibraryError::SongNotFound(title.to_owned())),
    };

    for id in ids {
      if let Some(song) = self.songs.get_mut(id) {
        playlist.add_song(*id);
        song.join_playlist(playlist_name);
      }
    }

    Ok(ids.len())
  }

  // -------- CONSULTAS (lectura) --------

  pub fn song(&self, id: SongId) -> Option<&Song> {
    self.songs.get(&id)
  }

  pub fn find(&self, key: &SongKey) -> Option<&Song> {
    self.keys.get(key).and_then(|id| self.songs.get(id))
  }

  /// Todas las canciones, sin orden definido.
  pub fn list_songs(&self) -> Vec<&Song> {
    self.songs.values().collect()
  }

  /// Artistas distintos, sin orden definido.
  pub fn list_artists(&self) -> Vec<&str> {
    self.by_artist.keys().map(String::as_str).collect()
  }

  pub fn songs_by_artist(&self, artist: &str) -> Vec<&Song> {
    self.resolve(self.by_artist.get(artist))
  }

  /// Géneros distintos, sin orden definido.
  pub fn list_genres(&self) -> Vec<&str> {
    self.by_genre.keys().map(String::as_str).collect()
  }

  pub fn songs_by_genre(&self, genre: &str) -> Vec<&Song> {
    self.resolve(self.by_genre.get(genre))
  }

  pub fn songs_by_title(&self, title: &str) -> Vec<&Song> {
    self.resolve(self.by_title.get(title))
  }

  pub fn list_playlist_names(&self) -> Vec<&str> {
    self.playlists.keys().map(String::as_str).collect()
  }

  pub fn playlist(&self, name: &str) -> Result<PlaylistView<'_>, LibraryError> {
    self
      .playlists
      .get(name)
      .map(|playlist| PlaylistView::new(playlist, &self.songs))
      .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_owned()))
  }

  /// Acceso para reordenar una playlist sin exponer el resto del catálogo.
  pub fn playlist_mut(&mut self, name: &str) -> Result<PlaylistMut<'_>, LibraryError> {
    match self.playlists.get_mut(name) {
      Some(playlist) => Ok(PlaylistMut::new(playlist, &self.songs)),
      None => Err(LibraryError::PlaylistNotFound(name.to_owned())),
    }
  }

  /// Copia ordenada de todas las canciones según `mode` (`"title"`,
  /// `"artist"` o `"genre"`). Cualquier otro valor devuelve una lista vacía.
  pub fn all_songs_sorted(&self, mode: &str) -> Vec<&Song> {
    match mode.parse::<SortMode>() {
      Ok(mode) => self.all_songs_sorted_by(mode),
      Err(e) => {
        debug!("{e}");
        Vec::new()
      }
    }
  }

  pub fn all_songs_sorted_by(&self, mode: SortMode) -> Vec<&Song> {
    let mut songs = self.list_songs();
    songs.sort_by(|a, b| mode.compare(a, b));
    songs
  }

  pub(crate) fn store(&self) -> &SongStore {
    &self.songs
  }

  fn resolve(&self, ids: Option<&Vec<SongId>>) -> Vec<&Song> {
    ids.map(|ids| ids.iter().filter_map(|id| self.songs.get(id)).collect()).unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const NONE: &[&str] = &[];

  fn sample() -> MusicLibrary {
    let mut library = MusicLibrary::new();
    library
      .add_song("Johnny Cash", "I Walk the Line", "The Broadcast Archive (Live)", "Blues", NONE)
      .unwrap();
    library
      .add_song("Rick Astley", "Never Gonna Give You Up", "Whenever You Need Somebody", "Pop", NONE)
      .unwrap();
    library
  }

  #[test]
  fn test_add_song_rejects_duplicate_key() {
    let mut library = sample();

    let err = library
      .add_song("Johnny Cash", "I Walk the Line", "The Broadcast Archive (Live)", "Blues", &["X"])
      .unwrap_err();

    assert!(matches!(err, LibraryError::SongAlreadyExists(key) if key.artist == "Johnny Cash"));
    assert_eq!(library.len(), 2);
    assert_eq!(library.playlist_count(), 0);
  }

  #[test]
  fn test_same_title_different_album_is_a_new_song() {
    let mut library = sample();
    library.add_song("Johnny Cash", "I Walk the Line", "Studio", "Blues", NONE).unwrap();

    assert_eq!(library.len(), 3);
    assert_eq!(library.songs_by_artist("Johnny Cash").len(), 2);
    assert_eq!(library.list_artists().len(), 2);
  }

  #[test]
  fn test_add_song_creates_playlists() {
    let mut library = MusicLibrary::new();
    let id = library.add_song("A", "T", "L", "G", &["Tunes", "Country Classics"]).unwrap();

    let mut names = library.list_playlist_names();
    names.sort();
    assert_eq!(names, ["Country Classics", "Tunes"]);
    assert_eq!(library.playlist("Tunes").unwrap().song_ids(), [id]);
  }

  #[test]
  fn test_create_playlist_is_idempotent() {
    let mut library = MusicLibrary::new();
    library.add_song("A", "T", "L", "G", &["Mix"]).unwrap();

    library.create_playlist("Mix");
    library.create_playlist("Empty");
    library.create_playlist("Empty");

    assert_eq!(library.playlist_count(), 2);
    assert_eq!(library.playlist("Mix").unwrap().len(), 1);
    assert!(library.playlist("Empty").unwrap().is_empty());
  }

  #[test]
  fn test_add_song_to_missing_playlist() {
    let mut library = sample();
    let err = library.add_song_to_playlist("I Walk the Line", "Nope").unwrap_err();
    assert!(matches!(err, LibraryError::PlaylistNotFound(name) if name == "Nope"));
  }

  #[test]
  fn test_add_unknown_title_to_playlist() {
    let mut library = sample();
    library.create_playlist("Mix");

    let err = library.add_song_to_playlist("Unknown", "Mix").unwrap_err();
    assert!(matches!(err, LibraryError::SongNotFound(title) if title == "Unknown"));
    assert!(library.playlist("Mix").unwrap().is_empty());
  }

  #[test]
  fn test_add_song_to_playlist_does_not_deduplicate() {
    let mut library = sample();
    library.create_playlist("Mix");

    library.add_song_to_playlist("I Walk the Line", "Mix").unwrap();
    library.add_song_to_playlist("I Walk the Line", "Mix").unwrap();

    let view = library.playlist("Mix").unwrap();
    assert_eq!(view.len(), 2);

    let song = library.songs_by_title("I Walk the Line")[0];
    assert_eq!(song.playlists(), ["Mix"]);
  }

  #[test]
  fn test_add_song_to_playlist_adds_every_song_with_that_title() {
    let mut library = sample();
    library.add_song("Cover Band", "I Walk the Line", "Covers", "Rock", NONE).unwrap();
    library.create_playlist("Mix");

    let added = library.add_song_to_playlist("I Walk the Line", "Mix").unwrap();

    assert_eq!(added, 2);
    let artists: Vec<_> = library.playlist("Mix").unwrap().iter().map(|s| s.artist.as_str()).collect();
    assert_eq!(artists, ["Johnny Cash", "Cover Band"]);
  }

  #[test]
  fn test_genre_index() {
    let mut library = sample();
    library.add_song("Muddy Waters", "Hoochie Coochie Man", "Single", "Blues", NONE).unwrap();

    let mut genres = library.list_genres();
    genres.sort();
    assert_eq!(genres, ["Blues", "Pop"]);
    assert_eq!(library.songs_by_genre("Blues").len(), 2);
    assert!(library.songs_by_genre("Jazz").is_empty());
  }

  #[test]
  fn test_unknown_artist_is_empty() {
    assert!(sample().songs_by_artist("Nobody").is_empty());
  }

  #[test]
  fn test_sorted_listing_is_non_destructive() {
    let library = sample();
    let before: Vec<SongId> = library.list_songs().iter().map(|s| s.id).collect();

    let sorted = library.all_songs_sorted("artist");
    assert_eq!(sorted[0].artist, "Johnny Cash");
    assert_eq!(sorted[1].artist, "Rick Astley");

    let after: Vec<SongId> = library.list_songs().iter().map(|s| s.id).collect();
    assert_eq!(before, after);
  }

  #[test]
  fn test_unknown_sort_mode_is_empty() {
    assert!(sample().all_songs_sorted("bogus").is_empty());
  }

  #[test]
  fn test_find_by_key() {
    let library = sample();
    let key = SongKey::new("Rick Astley", "Never Gonna Give You Up", "Whenever You Need Somebody", "Pop");
    assert!(library.find(&key).is_some());
    assert!(library.find(&SongKey::new("Rick Astley", "x", "y", "z")).is_none());
  }
}
