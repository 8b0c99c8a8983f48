pub mod catalog;
pub mod codec;
pub mod domain;
pub mod errors;
pub mod ports;

pub use catalog::{LoadReport, MusicLibrary, PlaylistIter, PlaylistMut, PlaylistView};
pub use domain::{Playlist, Song, SongId, SongKey, SortMode, SortModeParseError};
pub use errors::LibraryError;
