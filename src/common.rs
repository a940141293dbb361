use std::path::PathBuf;

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJ_DIRS: ProjectDirs =
        ProjectDirs::from("com.github", "codecraft", env!("CARGO_PKG_NAME"))
            .expect("failed to get project directories");
}

/// Per-user default location of the server data directory, used unless
/// `--data-dir` overrides it.
pub fn default_data_dir() -> PathBuf {
    PROJ_DIRS.data_dir().to_path_buf()
}
