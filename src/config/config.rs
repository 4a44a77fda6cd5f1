use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Ftp,
    Sftp,
}

impl Protocol {
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Ftp => 21,
            Protocol::Sftp => 22,
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ftp" => Some(Protocol::Ftp),
            "sftp" => Some(Protocol::Sftp),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Ftp => write!(f, "ftp"),
            Protocol::Sftp => write!(f, "sftp"),
        }
    }
}

/// Base directories prepended to every manifest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RootPaths {
    pub local: String,
    pub remote: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Credentials {
    host: String,
    username: String,
    password: String,
    port: Option<u16>,
    protocol: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ServerDocument {
    ftp_credentials: Credentials,
    root_paths: RootPaths,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub protocol: Protocol,
    pub roots: RootPaths,
}

impl ServerConfig {
    /// Normalizes a loaded server document. Absent keys become empty strings.
    pub fn from_value(value: Value, document: &str) -> Result<Self> {
        let doc: ServerDocument =
            serde_json::from_value(value).map_err(|e| Error::config(document, e))?;
        let creds = doc.ftp_credentials;

        let protocol = match creds.protocol.as_deref() {
            None => Protocol::Ftp,
            Some(name) => Protocol::parse(name)
                .ok_or_else(|| Error::config(document, format!("unknown protocol {name:?}")))?,
        };

        Ok(Self {
            host: creds.host,
            port: creds.port.unwrap_or_else(|| protocol.default_port()),
            username: creds.username,
            password: creds.password,
            protocol,
            roots: doc.root_paths,
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("protocol", &self.protocol)
            .field("roots", &self.roots)
            .finish()
    }
}
