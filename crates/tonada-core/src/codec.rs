//! Formato de línea del archivo de base de datos.
//!
//! ```text
//! artist;title;album;genre[;playlistName]*
//! ```
//!
//! Una canción por línea. No hay escape: un `;` o un salto de línea dentro de
//! un campo corrompe la línea. Cualquier otro contenido, `\r` y campos vacíos
//! incluidos, se conserva tal cual.

use thiserror::Error;

use crate::domain::{Song, SongKey};

pub const FIELD_SEPARATOR: char = ';';

/// Contenido de una línea ya separada en campos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
  pub key: SongKey,
  /// Playlists en el orden en que aparecen en la línea.
  pub playlists: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  #[error("expected at least 4 fields, found {found}")]
  MissingFields { found: usize },
}

/// Separa una línea (sin el `\n`) en sus campos.
///
/// Un `;` final es una playlist de nombre vacío, igual que la escribe
/// [`encode_line`].
pub fn decode_line(line: &str) -> Result<SongRecord, DecodeError> {
  let mut fields = line.split(FIELD_SEPARATOR);

  let (Some(artist), Some(title), Some(album), Some(genre)) =
    (fields.next(), fields.next(), fields.next(), fields.next())
  else {
    return Err(DecodeError::MissingFields { found: line.split(FIELD_SEPARATOR).count() });
  };

  let playlists = fields.map(str::to_owned).collect();

  Ok(SongRecord { key: SongKey::new(artist, title, album, genre), playlists })
}

/// Serializa una canción sin el salto de línea final.
///
/// Las playlists salen en el orden canónico de la canción (alfabético).
pub fn encode_line(song: &Song) -> String {
  let mut line = String::with_capacity(
    song.artist.len()
      + song.title.len()
      + song.album.len()
      + song.genre.len()
      + song.playlists().iter().map(|p| p.len() + 1).sum::<usize>()
      + 3,
  );

  for (i, field) in [&song.artist, &song.title, &song.album, &song.genre].into_iter().enumerate() {
    if i > 0 {
      line.push(FIELD_SEPARATOR);
    }
    line.push_str(field);
  }
  for name in song.playlists() {
    line.push(FIELD_SEPARATOR);
    line.push_str(name);
  }

  line
}
