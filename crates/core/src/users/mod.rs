//! IAM module - users, authentication payloads and resource traits.

mod auth_model;
mod users_model;
mod users_traits;

#[cfg(test)]
mod users_model_tests;

pub use auth_model::{
    AuthResponse, FlatAuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest, WrappedAuthResponse,
};
pub use users_model::{UpdatePreferences, UpdateUser, User};
pub use users_traits::{AuthClientTrait, UserClientTrait};
