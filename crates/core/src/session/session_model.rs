use serde::{Deserialize, Serialize};

/// The signed-in user as cached alongside the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    #[serde(default, alias = "name")]
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}
