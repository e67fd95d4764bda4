// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory
pub fn get_app_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passforge", "passforge") {
        Some(proj_dirs.config_dir().to_path_buf())
    } else {
        log::debug!("Could not determine config directory");
        None
    }
}

/// Loads `.env` from the working directory, then `passforge.env` from the
/// config directory. Variables already set are never overwritten.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(path) = get_app_config_dir().map(|dir| dir.join("passforge.env")) {
        if path.exists() && dotenvy::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }

    loaded
}
