use std::cmp::Ordering;
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::domain::song::Song;

/// Criterio de ordenación para listados de canciones.
///
/// | modo     | clave 1 | desempate 2 | desempate 3 |
/// |----------|---------|-------------|-------------|
/// | `title`  | título  | artista     | género      |
/// | `artist` | artista | título      | género      |
/// | `genre`  | género  | artista     | título      |
///
/// La comparación es lexicográfica por bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
  Title,
  Artist,
  Genre,
}

impl SortMode {
  pub fn compare(self, a: &Song, b: &Song) -> Ordering {
    match self {
      SortMode::Title => a
        .title
        .cmp(&b.title)
        .then_with(|| a.artist.cmp(&b.artist))
        .then_with(|| a.genre.cmp(&b.genre)),
      SortMode::Artist => a
        .artist
        .cmp(&b.artist)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.genre.cmp(&b.genre)),
      SortMode::Genre => a
        .genre
        .cmp(&b.genre)
        .then_with(|| a.artist.cmp(&b.artist))
        .then_with(|| a.title.cmp(&b.title)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort mode: {input}")]
pub struct SortModeParseError {
  pub input: String,
}

impl FromStr for SortMode {
  type Err = SortModeParseError;

  /// Solo acepta los nombres exactos `title`, `artist` y `genre`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "title" => Ok(SortMode::Title),
      "artist" => Ok(SortMode::Artist),
      "genre" => Ok(SortMode::Genre),
      _ => Err(SortModeParseError { input: s.to_string() }),
    }
  }
}

impl fmt::Display for SortMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      SortMode::Title => "title",
      SortMode::Artist => "artist",
      SortMode::Genre => "genre",
    };
    write!(f, "{text}")
  }
}
