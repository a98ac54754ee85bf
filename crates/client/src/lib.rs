//! TuCash Client - HTTP access to the TuCash REST API.
//!
//! This crate implements the resource traits from `tucash-core` over
//! `reqwest`, runs the unread-notification poller and persists the session
//! to disk.

pub mod client;
pub mod config;
pub mod poller;
mod resources;
pub mod session_file;

use std::sync::Arc;

use log::warn;
use tucash_core::session::{AuthSession, SessionStorage};
use tucash_core::Result;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use poller::{NotificationPoller, NotificationSnapshot};
pub use session_file::FileSessionStorage;

/// Opens the configured session file and restores any saved session from it.
/// Only a bad `TUCASH_SESSION_KEY` is an error; a session that cannot be
/// restored leaves the user signed out.
pub fn restore_session(config: &ClientConfig) -> Result<Arc<AuthSession>> {
    let storage: Arc<dyn SessionStorage> = Arc::new(FileSessionStorage::new(
        config.session_file.clone(),
        config.session_key.as_deref(),
    )?);
    let session = Arc::new(AuthSession::new(storage));
    if let Err(e) = session.restore() {
        warn!("Starting signed out, stored session unavailable: {}", e);
    }
    Ok(session)
}
