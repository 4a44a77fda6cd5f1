pub mod config;
pub mod loader;
pub mod manifest;
pub mod settings;

pub use config::{Protocol, RootPaths, ServerConfig};
pub use manifest::{Manifest, ManifestEntry};
pub use settings::Settings;
