use crate::error::Result;
use crate::remote::{Connector, RemoteSession};
use std::io::{self, Read};
use suppaftp::FtpStream;
use suppaftp::types::FileType;

pub struct FtpConnector;

impl Connector for FtpConnector {
    fn connect(&self, host: &str, port: u16) -> Result<Box<dyn RemoteSession>> {
        let stream = FtpStream::connect((host, port))?;
        Ok(Box::new(FtpSession { stream }))
    }
}

pub struct FtpSession {
    stream: FtpStream,
}

impl RemoteSession for FtpSession {
    fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        self.stream.login(username, password)?;
        self.stream.transfer_type(FileType::Binary)?;
        Ok(())
    }

    /// The closing reply is always read, even when the local read fails, so
    /// the control channel stays in step for the next transfer.
    fn store_binary(&mut self, remote_path: &str, reader: &mut dyn Read) -> Result<u64> {
        let mut data = self.stream.put_with_stream(remote_path)?;
        let copied = io::copy(reader, &mut data);
        let finalized = self.stream.finalize_put_stream(data);

        let bytes = copied?;
        finalized?;
        Ok(bytes)
    }

    fn close(&mut self) -> Result<()> {
        self.stream.quit()?;
        Ok(())
    }
}
