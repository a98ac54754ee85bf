use async_trait::async_trait;

use super::auth_model::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest, RegisterResponse,
    ResetPasswordRequest,
};
use super::users_model::{UpdatePreferences, UpdateUser, User};
use crate::errors::Result;
use crate::session::Session;

/// Unauthenticated `/auth` operations.
#[async_trait]
pub trait AuthClientTrait: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<Session>;
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse>;
    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<MessageResponse>;
    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<MessageResponse>;
}

/// Profile operations on `/users/{id}`.
#[async_trait]
pub trait UserClientTrait: Send + Sync {
    async fn get_user(&self, user_id: i64) -> Result<User>;
    async fn update_user(&self, user_id: i64, update: UpdateUser) -> Result<User>;
    async fn update_preferences(&self, user_id: i64, update: UpdatePreferences) -> Result<User>;
}
