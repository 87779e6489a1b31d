use crate::api::api_url;
use crate::api::utils::{authenticated_put, error_message};
use async_trait::async_trait;
use log::debug;
use shared::services::ProfileService;
use shared::{UpdateEmailRequest, UpdatePasswordRequest, UpdateUsernameRequest, UserProfileDto};

pub async fn update_username(new_username: &str) -> Result<UserProfileDto, String> {
    debug!("Attempting to update username to: {}", new_username);

    let update_request = UpdateUsernameRequest {
        username: new_username.to_string(),
    };

    let response = authenticated_put(&api_url("/api/users/me/username"))
        .json(&update_request)
        .map_err(|e| format!("Failed to serialize username update request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send username update request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let user = response
        .json::<UserProfileDto>()
        .await
        .map_err(|e| format!("Failed to parse update response: {}", e))?;

    debug!("Successfully updated username to: {}", user.username);
    Ok(user)
}

pub async fn update_email(new_email: &str) -> Result<UserProfileDto, String> {
    debug!("Attempting to update email to: {}", new_email);

    let update_request = UpdateEmailRequest {
        email: new_email.to_string(),
    };

    let response = authenticated_put(&api_url("/api/users/me/email"))
        .json(&update_request)
        .map_err(|e| format!("Failed to serialize email update request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send email update request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let user = response
        .json::<UserProfileDto>()
        .await
        .map_err(|e| format!("Failed to parse update response: {}", e))?;

    debug!("Successfully updated email to: {}", user.email);
    Ok(user)
}

pub async fn update_password(current_password: &str, new_password: &str) -> Result<(), String> {
    debug!("Attempting to update password");

    let update_request = UpdatePasswordRequest {
        current_password: current_password.to_string(),
        new_password: new_password.to_string(),
    };

    let response = authenticated_put(&api_url("/api/users/me/password"))
        .json(&update_request)
        .map_err(|e| format!("Failed to serialize password update request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send password update request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    debug!("Successfully updated password");
    Ok(())
}

/// Account service backed by the HTTP API
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpProfileService;

#[async_trait(?Send)]
impl ProfileService for HttpProfileService {
    async fn update_username(&self, username: &str) -> Result<UserProfileDto, String> {
        update_username(username).await
    }

    async fn update_email(&self, email: &str) -> Result<UserProfileDto, String> {
        update_email(email).await
    }

    async fn update_password(&self, current_password: &str, new_password: &str) -> Result<(), String> {
        update_password(current_password, new_password).await
    }
}
