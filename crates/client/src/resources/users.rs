use async_trait::async_trait;
use log::info;
use reqwest::Method;

use tucash_core::errors::Result;
use tucash_core::session::Session;
use tucash_core::users::{
    AuthClientTrait, AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest, UpdatePreferences, UpdateUser, User,
    UserClientTrait,
};

use crate::client::ApiClient;

const AUTH_PATH: &str = "/auth";
const USERS_PATH: &str = "/users";

/// Sign-in returns the session without establishing it; callers do that.
#[async_trait]
impl AuthClientTrait for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<Session> {
        request.validate()?;
        let response: AuthResponse = self
            .send_json(Method::POST, &format!("{}/login", AUTH_PATH), &request)
            .await?;
        let session = Session::from(response);
        info!("[TuCashApi] Signed in as user {}", session.user.id);
        Ok(session)
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        request.validate()?;
        self.send_json(Method::POST, &format!("{}/register", AUTH_PATH), &request)
            .await
    }

    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<MessageResponse> {
        self.send_json(
            Method::POST,
            &format!("{}/forgot-password", AUTH_PATH),
            &request,
        )
        .await
    }

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<MessageResponse> {
        self.send_json(
            Method::POST,
            &format!("{}/reset-password", AUTH_PATH),
            &request,
        )
        .await
    }
}

#[async_trait]
impl UserClientTrait for ApiClient {
    async fn get_user(&self, user_id: i64) -> Result<User> {
        self.get(&format!("{}/{}", USERS_PATH, user_id)).await
    }

    async fn update_user(&self, user_id: i64, update: UpdateUser) -> Result<User> {
        self.send_json(
            Method::PATCH,
            &format!("{}/{}", USERS_PATH, user_id),
            &update,
        )
        .await
    }

    async fn update_preferences(&self, user_id: i64, update: UpdatePreferences) -> Result<User> {
        self.send_json(
            Method::PATCH,
            &format!("{}/{}/preferences", USERS_PATH, user_id),
            &update,
        )
        .await
    }
}
