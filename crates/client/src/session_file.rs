//! The signed-in session kept in a JSON file between runs, optionally sealed
//! with ChaCha20-Poly1305.
//!
//! The file holds one typed record (`token` plus `user`). Writes go to a
//! sibling temp file that is renamed over the target, so an interrupted write
//! leaves the previous record intact. A file that cannot be read back, for
//! example truncated, sealed with another key or sealed while no key is
//! configured, is dropped with a warning and the user is simply signed out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use log::{debug, warn};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use tucash_core::constants::{AUTH_TOKEN_KEY, AUTH_USER_KEY};
use tucash_core::session::{SessionStorage, SessionUser};
use tucash_core::{errors::Error, Result};

const FORMAT_VERSION: u32 = 1;
const NONCE_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<SessionUser>,
}

impl StoredSession {
    fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// On-disk envelope, tagged by `format`.
#[derive(Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
enum SessionFile {
    Plain {
        version: u32,
        session: StoredSession,
    },
    Sealed {
        version: u32,
        nonce: String,
        sealed: String,
    },
}

/// Why a file on disk could not be turned back into a session.
#[derive(Debug)]
enum Unreadable {
    Malformed(String),
    KeyMissing,
    Unsealing(String),
}

impl std::fmt::Display for Unreadable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unreadable::Malformed(reason) => write!(f, "malformed session file: {}", reason),
            Unreadable::KeyMissing => write!(f, "sealed session file but TUCASH_SESSION_KEY is not set"),
            Unreadable::Unsealing(reason) => write!(f, "cannot unseal session file: {}", reason),
        }
    }
}

/// [`SessionStorage`] over a single file. Only the `auth_token` and
/// `auth_user` keys are accepted.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    key: Option<[u8; 32]>,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: PathBuf, session_key: Option<&str>) -> Result<Self> {
        let key = match session_key {
            Some(value) if !value.trim().is_empty() => Some(parse_session_key(value)?),
            _ => None,
        };
        Ok(Self {
            path,
            key,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_sealed(&self) -> bool {
        self.key.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current record; an unreadable file is deleted and reads as empty.
    fn load(&self) -> Result<StoredSession> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredSession::default()),
            Err(e) => {
                return Err(Error::Session(format!(
                    "Cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoredSession::default());
        }

        match self.decode(&raw) {
            Ok(session) => Ok(session),
            Err(reason) => {
                warn!(
                    "Discarding session file {}: {}",
                    self.path.display(),
                    reason
                );
                self.discard()?;
                Ok(StoredSession::default())
            }
        }
    }

    fn decode(&self, raw: &[u8]) -> std::result::Result<StoredSession, Unreadable> {
        let file: SessionFile =
            serde_json::from_slice(raw).map_err(|e| Unreadable::Malformed(e.to_string()))?;
        match file {
            SessionFile::Plain { session, .. } => Ok(session),
            SessionFile::Sealed { nonce, sealed, .. } => {
                let key = self.key.ok_or(Unreadable::KeyMissing)?;
                let nonce = BASE64
                    .decode(nonce)
                    .ok()
                    .filter(|n| n.len() == NONCE_LEN)
                    .ok_or_else(|| Unreadable::Malformed("bad nonce".into()))?;
                let sealed = BASE64
                    .decode(sealed)
                    .map_err(|e| Unreadable::Malformed(e.to_string()))?;
                let plaintext = ChaCha20Poly1305::new(Key::from_slice(&key))
                    .decrypt(Nonce::from_slice(&nonce), sealed.as_ref())
                    .map_err(|_| Unreadable::Unsealing("wrong key or tampered data".into()))?;
                serde_json::from_slice(&plaintext).map_err(|e| Unreadable::Unsealing(e.to_string()))
            }
        }
    }

    fn encode(&self, session: &StoredSession) -> Result<String> {
        let file = match self.key {
            None => SessionFile::Plain {
                version: FORMAT_VERSION,
                session: session.clone(),
            },
            Some(key) => {
                let plaintext = serde_json::to_vec(session)
                    .map_err(|e| Error::Session(format!("Cannot serialize session: {}", e)))?;
                let mut nonce = [0u8; NONCE_LEN];
                OsRng.fill_bytes(&mut nonce);
                let sealed = ChaCha20Poly1305::new(Key::from_slice(&key))
                    .encrypt(Nonce::from_slice(&nonce), plaintext.as_ref())
                    .map_err(|_| Error::Session("Cannot seal session".into()))?;
                SessionFile::Sealed {
                    version: FORMAT_VERSION,
                    nonce: BASE64.encode(nonce),
                    sealed: BASE64.encode(sealed),
                }
            }
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| Error::Session(format!("Cannot serialize session: {}", e)))
    }

    /// Writes `session`, or removes the file once nothing is left in it.
    fn store(&self, session: &StoredSession) -> Result<()> {
        if session.is_empty() {
            return self.discard();
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = self.encode(session)?;
        let staging = self.staging_path();
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            Error::Session(format!("Cannot replace {}: {}", self.path.display(), e))
        })?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn discard(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock();
        let session = self.load()?;
        match key {
            AUTH_TOKEN_KEY => Ok(session.token),
            AUTH_USER_KEY => session
                .user
                .map(|user| serde_json::to_string(&user))
                .transpose()
                .map_err(|e| Error::Session(format!("Cannot serialize session user: {}", e))),
            other => Err(unknown_key(other)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock();
        let mut session = self.load()?;
        match key {
            AUTH_TOKEN_KEY => session.token = Some(value.to_string()),
            AUTH_USER_KEY => {
                let user = serde_json::from_str::<SessionUser>(value)
                    .map_err(|e| Error::Session(format!("Invalid session user: {}", e)))?;
                session.user = Some(user);
            }
            other => return Err(unknown_key(other)),
        }
        self.store(&session)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock();
        let mut session = self.load()?;
        match key {
            AUTH_TOKEN_KEY => session.token = None,
            AUTH_USER_KEY => session.user = None,
            other => return Err(unknown_key(other)),
        }
        self.store(&session)
    }
}

fn unknown_key(key: &str) -> Error {
    Error::Session(format!("Unsupported session key '{}'", key))
}

fn parse_session_key(raw: &str) -> Result<[u8; 32]> {
    let bytes = BASE64.decode(raw.trim()).map_err(|_| {
        Error::InvalidConfigValue("TUCASH_SESSION_KEY must be base64".into())
    })?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        Error::InvalidConfigValue(format!(
            "TUCASH_SESSION_KEY must decode to 32 bytes, got {}",
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;
    use tucash_core::session::{AuthSession, Session};

    fn session() -> Session {
        Session {
            token: "jwt".into(),
            user: SessionUser {
                id: 5,
                email: "eva@tucash.pe".into(),
                display_name: "Eva".into(),
            },
        }
    }

    fn key(byte: u8) -> String {
        BASE64.encode([byte; 32])
    }

    #[test]
    fn session_survives_restart() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("session.json");

        let first = AuthSession::new(Arc::new(FileSessionStorage::new(file.clone(), None).unwrap()));
        first.establish(session()).unwrap();

        let raw = fs::read_to_string(&file).unwrap();
        assert!(raw.contains("\"format\": \"plain\""));
        assert!(raw.contains("\"displayName\": \"Eva\""));

        let second = AuthSession::new(Arc::new(FileSessionStorage::new(file, None).unwrap()));
        assert_eq!(second.restore().unwrap(), Some(session()));
    }

    #[test]
    fn sealed_file_hides_the_token() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");
        let storage = FileSessionStorage::new(file.clone(), Some(&key(7))).unwrap();
        assert!(storage.is_sealed());

        storage.set(AUTH_TOKEN_KEY, "secret-token").unwrap();
        assert_eq!(
            storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(),
            Some("secret-token")
        );

        let raw = fs::read_to_string(&file).unwrap();
        assert!(raw.contains("\"format\": \"sealed\""));
        assert!(!raw.contains("secret-token"));
    }

    #[test]
    fn clearing_the_session_deletes_the_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");
        let auth = AuthSession::new(Arc::new(FileSessionStorage::new(file.clone(), None).unwrap()));

        auth.establish(session()).unwrap();
        assert!(file.exists());
        auth.clear().unwrap();

        assert!(!file.exists());
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[test]
    fn truncated_file_reads_as_signed_out() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");
        fs::write(&file, r#"{"version":1,"val"#).unwrap();

        let auth = AuthSession::new(Arc::new(FileSessionStorage::new(file.clone(), None).unwrap()));

        assert_eq!(auth.restore().unwrap(), None);
        assert!(!auth.is_logged_in());
        assert!(!file.exists());

        auth.establish(session()).unwrap();
        assert_eq!(auth.token().as_deref(), Some("jwt"));
    }

    #[test]
    fn sealed_file_without_or_with_another_key_is_discarded() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");
        let sealed = FileSessionStorage::new(file.clone(), Some(&key(1))).unwrap();
        sealed.set(AUTH_TOKEN_KEY, "t").unwrap();

        let other_key = FileSessionStorage::new(file.clone(), Some(&key(2))).unwrap();
        assert_eq!(other_key.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert!(!file.exists());

        sealed.set(AUTH_TOKEN_KEY, "t").unwrap();
        let no_key = FileSessionStorage::new(file.clone(), None).unwrap();
        assert_eq!(no_key.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert!(!file.exists());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_user_records() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"), None).unwrap();

        assert!(matches!(storage.get("theme"), Err(Error::Session(_))));
        assert!(matches!(
            storage.set(AUTH_USER_KEY, "not json"),
            Err(Error::Session(_))
        ));
    }

    #[test]
    fn rejects_short_keys() {
        let dir = tempdir().unwrap();
        let err = FileSessionStorage::new(dir.path().join("s.json"), Some("c2hvcnQ=")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
