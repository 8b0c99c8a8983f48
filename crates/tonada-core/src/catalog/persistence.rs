use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::MusicLibrary;
use crate::codec;
use crate::errors::LibraryError;

/// Resumen de una carga. Las líneas descartadas nunca abortan la carga.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
  /// Canciones añadidas al catálogo.
  pub loaded: usize,
  /// Líneas con menos de cuatro campos o que no son UTF-8 válido.
  pub malformed: usize,
  /// Líneas cuya clave ya estaba en el catálogo.
  pub duplicates: usize,
}

impl LoadReport {
  pub fn skipped(&self) -> usize {
    self.malformed + self.duplicates
  }
}

impl MusicLibrary {
  /// Carga el archivo `path` sobre el catálogo actual.
  ///
  /// Si el archivo no existe no hace nada. Las líneas mal formadas o
  /// duplicadas se saltan una a una; solo un error de E/S real se propaga.
  pub fn load_music_db(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LibraryError> {
    let path = path.as_ref();

    let file = match File::open(path) {
      Ok(file) => file,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %path.display(), "music db not found, nothing to load");
        return Ok(LoadReport::default());
      }
      Err(e) => return Err(e.into()),
    };

    let report = self.load_from_reader(BufReader::new(file))?;

    info!(
      path = %path.display(),
      loaded = report.loaded,
      malformed = report.malformed,
      duplicates = report.duplicates,
      "music db loaded"
    );
    Ok(report)
  }

  pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<LoadReport, LibraryError> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
      buf.clear();
      if reader.read_until(b'\n', &mut buf)? == 0 {
        break;
      }
      line_no += 1;

      let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
      let Ok(line) = std::str::from_utf8(bytes) else {
        warn!(line = line_no, "skipping line: not valid UTF-8");
        report.malformed += 1;
        continue;
      };

      let record = match codec::decode_line(line) {
        Ok(record) => record,
        Err(e) => {
          warn!(line = line_no, "skipping malformed line: {e}");
          report.malformed += 1;
          continue;
        }
      };

      match self.insert(record.key, record.playlists) {
        Ok(_) => report.loaded += 1,
        Err(LibraryError::SongAlreadyExists(key)) => {
          warn!(line = line_no, "skipping duplicate song: {key}");
          report.duplicates += 1;
        }
        Err(e) => return Err(e),
      }
    }

    Ok(report)
  }

  /// Escribe todas las canciones en `path`, una por línea.
  ///
  /// El archivo se reemplaza de forma atómica: si la escritura falla, el
  /// contenido anterior sigue ahí. Devuelve cuántas canciones se escribieron.
  pub fn write_music_db(&self, path: impl AsRef<Path>) -> Result<usize, LibraryError> {
    let path = path.as_ref();

    tonada_fs::atomic_write_with(path, |w| self.write_to(w))?;

    info!(path = %path.display(), songs = self.len(), "music db written");
    Ok(self.len())
  }

  pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
    for song in self.store().values() {
      writer.write_all(codec::encode_line(song).as_bytes())?;
      writer.write_all(b"\n")?;
    }
    Ok(())
  }
}
