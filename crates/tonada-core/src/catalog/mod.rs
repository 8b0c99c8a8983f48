mod library;
mod persistence;
mod view;

pub use library::MusicLibrary;
pub use persistence::LoadReport;
pub use view::{PlaylistIter, PlaylistMut, PlaylistView};
