use std::env;
use std::path::PathBuf;

pub const DEFAULT_SERVER_CONFIG: &str = "./files/ftp.json";
pub const DEFAULT_MANIFEST: &str = "./files/files.json";

/// Where the two configuration documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_config: PathBuf,
    pub manifest: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_CONFIG, DEFAULT_MANIFEST)
    }
}

impl Settings {
    pub fn new(server_config: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            server_config: server_config.into(),
            manifest: manifest.into(),
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // .env is optional

        let defaults = Self::default();
        Self {
            server_config: env::var_os("UPLOADER_SERVER_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(defaults.server_config),
            manifest: env::var_os("UPLOADER_MANIFEST")
                .map(PathBuf::from)
                .unwrap_or(defaults.manifest),
        }
    }
}
