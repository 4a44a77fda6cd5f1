use crate::error::{Error, Result};
use crate::remote::{Connector, RemoteSession};
use ssh2::{OpenFlags, OpenType, Session};
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;

const BUFFER_SIZE: usize = 256 * 1024; // 256KB

pub struct SftpConnector;

impl Connector for SftpConnector {
    fn connect(&self, host: &str, port: u16) -> Result<Box<dyn RemoteSession>> {
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| Error::Remote(format!("invalid address {host}:{port}")))?;
        let stream = TcpStream::connect(addr)?;
        let mut session = Session::new()?;
        session.set_tcp_stream(stream);
        session.handshake()?;
        Ok(Box::new(SftpSession { session }))
    }
}

pub struct SftpSession {
    session: Session,
}

impl RemoteSession for SftpSession {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        self.session.userauth_password(username, password)?;
        if !self.session.authenticated() {
            return Err(Error::Remote("authentication failed".into()));
        }
        Ok(())
    }

    fn store_binary(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64> {
        let sftp = self.session.sftp()?;
        let mut remote_file = sftp.open_mode(
            Path::new(remote_path),
            OpenFlags::CREATE | OpenFlags::WRITE | OpenFlags::TRUNCATE,
            0o644,
            OpenType::File,
        )?;

        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            let mut written = 0;
            while written < n {
                let nwritten = remote_file.write(&buffer[written..n])?;
                if nwritten == 0 {
                    return Err(Error::Remote("remote write returned 0 bytes".into()));
                }
                written += nwritten;
            }
            total += n as u64;
        }

        remote_file.close()?;
        Ok(total)
    }

    fn close(&mut self) -> Result<()> {
        self.session.disconnect(None, "upload finished", None)?;
        Ok(())
    }
}
