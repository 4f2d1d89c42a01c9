//! Data directory resolution

use std::path::PathBuf;

/// Directory used when neither the flag, the environment nor the platform
/// provide one
const FALLBACK_DATA_DIR: &str = "bookshelf_data";

/// Pick the storage directory: explicit `--data-dir` / `BOOKSHELF_DATA_DIR`
/// first (clap merges the two), then the platform data directory
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(platform_data_dir)
}

fn platform_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "bookshelf", "Bookshelf") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(FALLBACK_DATA_DIR)
    }
}
