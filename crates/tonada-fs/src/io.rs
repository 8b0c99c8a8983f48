use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ruta temporal hermana de `path` usada durante la escritura atómica.
///
/// Se añade `.tmp` al nombre completo (no se reemplaza la extensión) para que
/// `music.db` y `music.toml` en el mismo directorio no compartan temporal.
fn tmp_path_for(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(".tmp");
  path.with_file_name(name)
}

pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write_with(path, |w| w.write_all(contents.as_bytes()))
}

/// Escribe un archivo completo a través de un temporal y lo renombra al final.
///
/// El closure recibe un writer con buffer. Si falla, el temporal se borra y el
/// archivo original queda intacto.
pub fn atomic_write_with<F>(path: &Path, write: F) -> io::Result<()>
where
  F: FnOnce(&mut BufWriter<fs::File>) -> io::Result<()>,
{
  let tmp_path = tmp_path_for(path);

  let result = (|| {
    let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
    write(&mut writer)?;
    let tmp_file = writer.into_inner().map_err(|e| e.into_error())?;
    tmp_file.sync_all()
  })();

  if let Err(e) = result {
    let _ = fs::remove_file(&tmp_path);
    return Err(e);
  }

  if let Err(e) = fs::rename(&tmp_path, path) {
    let _ = fs::remove_file(&tmp_path);
    return Err(e);
  }
  Ok(())
}
