use tonada_core::ports::LibraryRepository;
use tonada_storage::FileLibraryRepository;
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  // Ruta opcional por argumento; si no, la de tonada.toml.
  let repo = match std::env::args().nth(1) {
    Some(path) => FileLibraryRepository::new(path),
    None => FileLibraryRepository::from_config().expect("failed to read storage config"),
  };

  println!("Loading {}", repo.path().display());

  let library = repo.load().expect("failed to load music db");

  println!("songs:     {}", library.len());
  println!("artists:   {}", library.list_artists().len());
  println!("genres:    {}", library.list_genres().len());
  println!("playlists: {}", library.playlist_count());

  for song in library.all_songs_sorted("artist").into_iter().take(10) {
    println!("  {song}");
  }
}
