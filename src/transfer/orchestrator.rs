//! Batch orchestration: load, connect, upload every entry in order, close.
//!
//! Faults while loading configuration or establishing the session abort the
//! batch. Faults while transferring a single entry are recorded against that
//! entry and the loop moves on with the connection still open.

use crate::config::loader::load_json;
use crate::config::{Manifest, ManifestEntry, Protocol, RootPaths, ServerConfig, Settings};
use crate::error::{Error, Result};
use crate::remote::{Connector, RemoteSession, SessionGuard};
use crate::transfer::models::{BatchReport, SkipReason, TransferOutcome, TransferRecord};
use crate::transfer::paths::{self, ResolvedPaths};
use std::fs::File;
use std::io;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug)]
pub enum BatchState {
    /// Every entry was processed and the connection was released.
    Completed(BatchReport),
    /// Nothing was transferred.
    Aborted(Error),
}

impl BatchState {
    pub fn is_completed(&self) -> bool {
        matches!(self, BatchState::Completed(_))
    }
}

/// Loads both documents from `settings`, then runs the batch over the
/// connector chosen for the configured protocol.
pub fn run<F>(settings: &Settings, connector_for: F) -> BatchState
where
    F: FnOnce(Protocol) -> Box<dyn Connector>,
{
    let (server, manifest) = match load_inputs(settings) {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("Aborting batch: {e}");
            return BatchState::Aborted(e);
        }
    };

    let connector = connector_for(server.protocol);
    run_batch(&server, &manifest, connector.as_ref())
}

pub fn load_inputs(settings: &Settings) -> Result<(ServerConfig, Manifest)> {
    let server = ServerConfig::from_value(
        load_json(&settings.server_config)?,
        &settings.server_config.display().to_string(),
    )?;
    let manifest = Manifest::from_value(
        load_json(&settings.manifest)?,
        &settings.manifest.display().to_string(),
    )?;
    Ok((server, manifest))
}

pub fn run_batch(server: &ServerConfig, manifest: &Manifest, connector: &dyn Connector) -> BatchState {
    let run_id = Uuid::new_v4();
    log::info!(
        "[{run_id}] Uploading {} file(s) to {}://{}:{}",
        manifest.len(),
        server.protocol,
        server.host,
        server.port
    );

    let mut guard = match establish_session(server, connector) {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("[{run_id}] {e}");
            return BatchState::Aborted(e);
        }
    };
    log::info!("[{run_id}] Connected to server: {}", server.host);

    let mut report = BatchReport::new(run_id);
    for entry in manifest.entries() {
        report.push(transfer_entry(guard.session(), &server.roots, entry));
    }
    guard.finish();

    log::info!("[{run_id}] File upload process completed: {report}");
    BatchState::Completed(report)
}

/// Connect and authenticate as one step. A session that connected but
/// failed to authenticate is still closed when the guard drops.
fn establish_session(server: &ServerConfig, connector: &dyn Connector) -> Result<SessionGuard> {
    let connection_error = |e: Error| Error::Connection {
        host: server.host.clone(),
        cause: e.to_string(),
    };

    let session = connector
        .connect(&server.host, server.port)
        .map_err(connection_error)?;
    let mut guard = SessionGuard::new(session, server.host.as_str());
    guard
        .session()
        .authenticate(&server.username, &server.password)
        .map_err(connection_error)?;
    Ok(guard)
}

fn transfer_entry(
    session: &mut dyn RemoteSession,
    roots: &RootPaths,
    entry: &ManifestEntry,
) -> TransferRecord {
    let ResolvedPaths { local, remote } = paths::resolve(roots, entry);
    log::debug!("Resolved {} -> {}", local.display(), remote);

    let outcome = if !local.exists() {
        log::warn!("File does not exist: {}", local.display());
        TransferOutcome::Skipped(SkipReason::NotFound)
    } else {
        match upload(session, &local, &remote) {
            Ok(bytes) => {
                log::info!("Uploaded: {} to {} ({bytes} bytes)", local.display(), remote);
                TransferOutcome::Uploaded { bytes }
            }
            Err(e) => {
                log::error!("Failed to upload {}: {e}", local.display());
                TransferOutcome::Failed(e.to_string())
            }
        }
    };

    TransferRecord {
        local_path: local,
        remote_path: remote,
        outcome,
    }
}

/// Only regular files reach the remote side, so a directory or special file
/// never creates or truncates anything on the server.
fn upload(session: &mut dyn RemoteSession, local: &Path, remote: &str) -> Result<u64> {
    let mut file = File::open(local)?;
    if !file.metadata()?.is_file() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", local.display()),
        )));
    }
    session.store_binary(remote, &mut file)
}
