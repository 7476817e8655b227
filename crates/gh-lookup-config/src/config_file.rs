use crate::paths::APP_NAME;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Name of the config file looked up in the current and home directories
pub const CONFIG_FILE: &str = ".gh-user-lookup.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.gh-user-lookup.toml` in the current working directory
/// 2. `~/.gh-user-lookup.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let home = env::var_os("HOME").map(PathBuf::from);
    load_first_existing(&candidate_paths(home, dirs::config_dir()))
}

/// Config file locations in lookup order
///
/// Only builds paths; nothing is created on disk.
pub fn candidate_paths(home: Option<PathBuf>, config_base: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = home {
        candidates.push(home.join(CONFIG_FILE));
    }
    if let Some(base) = config_base {
        candidates.push(base.join(APP_NAME).join("config.toml"));
    }
    candidates
}

/// Read the first candidate path that can be read
pub fn load_first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<String> {
    for path in candidates {
        let path = path.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}
