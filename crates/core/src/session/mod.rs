//! Authentication session: cached token and user with pluggable persistence.

mod auth_session;
mod session_model;
mod session_storage;

#[cfg(test)]
mod auth_session_tests;

pub use auth_session::AuthSession;
pub use session_model::{Session, SessionUser};
pub use session_storage::{InMemorySessionStorage, SessionStorage};
