//! Auth and profile endpoints.

use scroller_models::{AuthResponse, User};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl ApiClient {
    /// Exchange credentials for a token + user pair.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::response_error(response, "Login failed").await);
        }

        Ok(response.json().await?)
    }

    /// Create an account and log straight in.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::response_error(response, "Registration failed").await);
        }

        Ok(response.json().await?)
    }

    /// Update the profile of the given user. Bearer-authenticated.
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: &UpdateProfileRequest,
        token: &str,
    ) -> Result<User> {
        let response = self
            .client
            .put(self.url(&format!("/user/{}/profile", user_id)))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::response_error(response, "Failed to update profile").await);
        }

        Ok(response.json().await?)
    }

    /// Change the account password. Bearer-authenticated.
    pub async fn change_password(
        &self,
        user_id: i64,
        request: &ChangePasswordRequest,
        token: &str,
    ) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/user/{}/password", user_id)))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::response_error(response, "Failed to change password").await);
        }

        Ok(())
    }
}
