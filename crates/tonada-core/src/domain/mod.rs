pub mod ids;
pub mod playlist;
pub mod song;
pub mod sort;

pub use ids::SongId;
pub use playlist::Playlist;
pub use song::{Song, SongKey, SongStore};
pub use sort::{SortMode, SortModeParseError};
