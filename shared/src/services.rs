//! Contracts for the external collaborators the UI calls into.
//!
//! The futures are not `Send`: in the browser every call runs on the single
//! wasm thread through `spawn_local`.

use async_trait::async_trait;

use crate::dto::user::UserProfileDto;

/// Account service that persists profile changes
#[async_trait(?Send)]
pub trait ProfileService {
    async fn update_username(&self, username: &str) -> Result<UserProfileDto, String>;

    async fn update_email(&self, email: &str) -> Result<UserProfileDto, String>;

    async fn update_password(&self, current_password: &str, new_password: &str) -> Result<(), String>;
}

/// Title search backing the header dropdown. Results are ordered by relevance.
#[async_trait(?Send)]
pub trait SearchService {
    async fn search(&self, query: &str) -> Result<Vec<String>, String>;
}
