use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "breathetrack";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        match ProjectDirs::from("", "", APP_NAME) {
            Some(proj_dirs) => proj_dirs.config_dir().join("config.json"),
            None => PathBuf::from(format!("{APP_NAME}_config.json")),
        }
    }

    pub fn log_path() -> PathBuf {
        match ProjectDirs::from("", "", APP_NAME) {
            Some(proj_dirs) => proj_dirs.data_local_dir().join(format!("{APP_NAME}.log")),
            None => PathBuf::from(format!("{APP_NAME}.log")),
        }
    }
}
