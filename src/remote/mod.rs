//! Transport boundary: connect, authenticate, store, close.

pub mod ftp;
pub mod guard;
pub mod sftp;

use crate::config::Protocol;
use crate::error::Result;
use std::io::Read;

pub use guard::SessionGuard;

pub trait Connector {
    /// Opens a control connection. The returned session is not yet authenticated.
    fn connect(&self, host: &str, port: u16) -> Result<Box<dyn RemoteSession>>;
}

pub trait RemoteSession {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<()>;

    /// Streams `reader` to `remote_path` in binary mode, returning the byte count.
    fn store_binary(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64>;

    fn close(&mut self) -> Result<()>;
}

pub fn connector_for(protocol: Protocol) -> Box<dyn Connector> {
    match protocol {
        Protocol::Ftp => Box::new(ftp::FtpConnector),
        Protocol::Sftp => Box::new(sftp::SftpConnector),
    }
}
