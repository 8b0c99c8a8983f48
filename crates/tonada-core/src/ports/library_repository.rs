use crate::catalog::{LoadReport, MusicLibrary};
use crate::errors::LibraryError;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error(transparent)]
  Library(#[from] LibraryError),
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia del catálogo.
///
/// El adapter decide dónde vive la base de datos (archivo configurado,
/// memoria, etc.); el dominio solo pide cargar y guardar.
pub trait LibraryRepository {
  /// Vuelca lo almacenado sobre `library`. Un almacén vacío o inexistente no
  /// es un error.
  fn load_into(&self, library: &mut MusicLibrary) -> Result<LoadReport, RepoError>;

  fn save(&self, library: &MusicLibrary) -> Result<(), RepoError>;

  fn load(&self) -> Result<MusicLibrary, RepoError> {
    let mut library = MusicLibrary::new();
    self.load_into(&mut library)?;
    Ok(library)
  }
}
