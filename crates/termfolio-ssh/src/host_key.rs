//! Server host key, created on first start

use std::io::Write;
use std::path::Path;

use rand::rngs::OsRng;
use russh::keys::ssh_key::LineEnding;
use russh::keys::{Algorithm, PrivateKey};
use termfolio_core::prelude::*;

/// Default host key file, relative to the working directory
pub const DEFAULT_HOST_KEY: &str = "ssh_host_ed25519";

/// Load the host key at `path`, generating and saving an Ed25519 key if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<PrivateKey> {
    if path.exists() {
        let key = russh::keys::load_secret_key(path, None)
            .map_err(|e| Error::host_key(path, e.to_string()))?;
        debug!("Loaded host key from {:?}", path);
        return Ok(key);
    }

    let key = PrivateKey::random(&mut OsRng, Algorithm::Ed25519)
        .map_err(|e| Error::host_key(path, e.to_string()))?;
    let pem = key
        .to_openssh(LineEnding::LF)
        .map_err(|e| Error::host_key(path, e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_private(path, pem.as_bytes())?;

    info!("Generated new host key at {:?}", path);
    Ok(key)
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)?;
    Ok(())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents)?;
    Ok(())
}
