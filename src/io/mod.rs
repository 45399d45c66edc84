pub mod walker;

pub use walker::{find_source_files, FileWalker};
