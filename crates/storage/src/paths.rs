// Per-application data directories
// Each platform base directory gets a "cadenza" subdirectory

use std::path::PathBuf;

const APP_DIR: &str = "cadenza";

/// Per-app configuration directory (`~/.config/cadenza` on Linux).
pub fn config_dir() -> PathBuf {
    app_dir(dirs::config_dir())
}

/// Per-app local data directory. The preference store lives here.
pub fn local_dir() -> PathBuf {
    app_dir(dirs::data_local_dir())
}

/// Per-app folder inside the user's music directory.
pub fn music_dir() -> PathBuf {
    app_dir(dirs::audio_dir())
}

/// Path of `name` inside [`config_dir`].
pub fn config_file(name: &str) -> PathBuf {
    config_dir().join(name)
}

/// Path of `name` inside [`local_dir`].
pub fn local_file(name: &str) -> PathBuf {
    local_dir().join(name)
}

/// Path of `name` inside [`music_dir`].
pub fn music_file(name: &str) -> PathBuf {
    music_dir().join(name)
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}
