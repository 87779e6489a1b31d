use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, error_message};
use log::debug;
use shared::UserProfileDto;

pub async fn logout() -> Result<(), String> {
    debug!("Attempting logout");

    let response = authenticated_post(&api_url("/api/users/logout"))
        .send()
        .await
        .map_err(|e| format!("Failed to send logout request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", error_message(response).await));
    }

    debug!("Logout successful");
    Ok(())
}

pub async fn get_current_user() -> Result<UserProfileDto, String> {
    debug!("Fetching current user");

    let response = authenticated_get(&api_url("/api/users/me"))
        .send()
        .await
        .map_err(|e| format!("Connection error: {}", e))?;

    if response.status() == 401 || response.status() == 403 {
        return Err("Session expired".to_string());
    }

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let user = response
        .json::<UserProfileDto>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))?;

    debug!("Successfully fetched current user: {}", user.username);
    Ok(user)
}
