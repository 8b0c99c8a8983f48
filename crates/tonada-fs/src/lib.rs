pub mod io;

pub use io::{atomic_write_str, atomic_write_with};
