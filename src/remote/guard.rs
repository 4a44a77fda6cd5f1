use crate::remote::RemoteSession;

/// Owns an open session and closes it exactly once, on `finish` or on drop.
pub struct SessionGuard {
    session: Box<dyn RemoteSession>,
    host: String,
    closed: bool,
}

impl SessionGuard {
    pub fn new(session: Box<dyn RemoteSession>, host: impl Into<String>) -> Self {
        Self {
            session,
            host: host.into(),
            closed: false,
        }
    }

    pub fn session(&mut self) -> &mut dyn RemoteSession {
        self.session.as_mut()
    }

    pub fn finish(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        match self.session.close() {
            Ok(()) => log::info!("Closed connection to {}", self.host),
            Err(e) => log::warn!("Error closing connection to {}: {e}", self.host),
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.release();
    }
}
