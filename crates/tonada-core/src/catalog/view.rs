use std::slice;

use crate::domain::{Playlist, Song, SongId, SongStore};

/// Vista de solo lectura de una playlist, resuelta contra el catálogo.
#[derive(Debug, Clone, Copy)]
pub struct PlaylistView<'a> {
  playlist: &'a Playlist,
  store: &'a SongStore,
}

impl<'a> PlaylistView<'a> {
  pub(crate) fn new(playlist: &'a Playlist, store: &'a SongStore) -> Self {
    Self { playlist, store }
  }

  pub fn name(&self) -> &'a str {
    self.playlist.name()
  }

  pub fn playlist(&self) -> &'a Playlist {
    self.playlist
  }

  /// Ids en el orden actual de la playlist, en O(1).
  pub fn song_ids(&self) -> &'a [SongId] {
    self.playlist.song_ids()
  }

  pub fn len(&self) -> usize {
    self.playlist.len()
  }

  pub fn is_empty(&self) -> bool {
    self.playlist.is_empty()
  }

  pub fn iter(&self) -> PlaylistIter<'a> {
    PlaylistIter { ids: self.playlist.song_ids().iter(), store: self.store }
  }

  pub fn songs(&self) -> Vec<&'a Song> {
    self.iter().collect()
  }
}

impl<'a> IntoIterator for PlaylistView<'a> {
  type Item = &'a Song;
  type IntoIter = PlaylistIter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a> IntoIterator for &PlaylistView<'a> {
  type Item = &'a Song;
  type IntoIter = PlaylistIter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Recorre las canciones de una playlist en orden, sin copiar.
#[derive(Debug, Clone)]
pub struct PlaylistIter<'a> {
  ids: slice::Iter<'a, SongId>,
  store: &'a SongStore,
}

impl<'a> Iterator for PlaylistIter<'a> {
  type Item = &'a Song;

  fn next(&mut self) -> Option<Self::Item> {
    let store = self.store;
    self.ids.by_ref().find_map(|id| store.get(id))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, Some(self.ids.len()))
  }
}

/// Acceso mutable a una playlist limitado a reordenarla.
///
/// Reordenar solo afecta a esta playlist: ni el índice primario ni otras
/// playlists con las mismas canciones cambian.
#[derive(Debug)]
pub struct PlaylistMut<'a> {
  playlist: &'a mut Playlist,
  store: &'a SongStore,
}

impl<'a> PlaylistMut<'a> {
  pub(crate) fn new(playlist: &'a mut Playlist, store: &'a SongStore) -> Self {
    Self { playlist, store }
  }

  pub fn sort_by_artist(&mut self) {
    self.playlist.sort_by_artist(self.store);
  }

  pub fn sort_by_title(&mut self) {
    self.playlist.sort_by_title(self.store);
  }

  pub fn view(&self) -> PlaylistView<'_> {
    PlaylistView::new(&*self.playlist, self.store)
  }
}

#[cfg(test)]
mod tests {
  use crate::catalog::MusicLibrary;

  fn library() -> MusicLibrary {
    let mut library = MusicLibrary::new();
    library.add_song("Beck", "Loser", "Mellow Gold", "Rock", &["Mix", "Other"]).unwrap();
    library.add_song("Abba", "Waterloo", "Waterloo", "Pop", &["Mix", "Other"]).unwrap();
    library.add_song("Beck", "Devils Haircut", "Odelay", "Rock", &["Mix", "Other"]).unwrap();
    library
  }

  fn titles(library: &MusicLibrary, name: &str) -> Vec<String> {
    library.playlist(name).unwrap().iter().map(|s| s.title.clone()).collect()
  }

  #[test]
  fn test_view_iterates_in_insertion_order() {
    let library = library();
    assert_eq!(titles(&library, "Mix"), ["Loser", "Waterloo", "Devils Haircut"]);

    let view = library.playlist("Mix").unwrap();
    let mut count = 0;
    for song in view {
      assert!(song.is_in_playlist("Mix"));
      count += 1;
    }
    assert_eq!(count, 3);
  }

  #[test]
  fn test_sorting_one_playlist_leaves_the_other_alone() {
    let mut library = library();

    library.playlist_mut("Mix").unwrap().sort_by_artist();
    assert_eq!(titles(&library, "Mix"), ["Waterloo", "Devils Haircut", "Loser"]);
    assert_eq!(titles(&library, "Other"), ["Loser", "Waterloo", "Devils Haircut"]);

    let mut other = library.playlist_mut("Other").unwrap();
    other.sort_by_title();
    assert_eq!(other.view().songs()[0].title, "Devils Haircut");
  }

  #[test]
  fn test_playlist_mut_on_missing_playlist() {
    let mut library = library();
    assert!(library.playlist_mut("Nope").is_err());
  }
}
