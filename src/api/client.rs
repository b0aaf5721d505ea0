//! HTTP API Client
//!
//! Functions for communicating with the Gambit REST API.

use gloo_net::http::Request;

use crate::state::global::{FriendRequest, FriendUser, GameSummary, UserProfile};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("gambit_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("gambit_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct FriendRequestLists {
    #[serde(default)]
    pub incoming: Vec<FriendRequest>,
    #[serde(default)]
    pub outgoing: Vec<FriendRequest>,
}

#[derive(Debug, serde::Deserialize)]
pub struct FriendListResponse {
    #[serde(default)]
    pub friends: Vec<FriendUser>,
}

#[derive(Debug, serde::Deserialize)]
pub struct GameListResponse {
    #[serde(default)]
    pub games: Vec<GameSummary>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Fetch the signed-in user's profile
pub async fn fetch_me() -> Result<UserProfile, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/users/me", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Replace the signed-in user's record
pub async fn update_me(profile: &UserProfile) -> Result<UserProfile, String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/users/me", api_base))
        .json(profile)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Update failed".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a public account by username
pub async fn fetch_account(username: &str) -> Result<UserProfile, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/accounts/{}", api_base, username))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Player not found".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the viewer's friend list
pub async fn fetch_friends() -> Result<Vec<FriendUser>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/friends", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: FriendListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.friends)
}

/// Fetch the viewer's pending friend requests, incoming and outgoing
pub async fn fetch_friend_requests() -> Result<FriendRequestLists, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/friends/requests", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Accept or decline a pending friend request
pub async fn respond_friend_request(request_id: &str, accept: bool) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct RespondRequest {
        accept: bool,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/friends/requests/{}/respond", api_base, request_id))
        .json(&RespondRequest { accept })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Could not respond to request".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Send a friend request to a recipient email
pub async fn send_friend_request(email: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SendRequest {
        email: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/friends/requests", api_base))
        .json(&SendRequest { email: email.to_string() })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Could not send request".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Fetch recent games for the history panel
pub async fn fetch_recent_games(username: &str) -> Result<Vec<GameSummary>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/games/recent?username={}", api_base, username))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: GameListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.games)
}

/// Check API health
pub async fn check_health() -> Result<(), String> {
    let api_base = get_api_base();
    let health_url = api_base.replace("/api/v1", "/health");

    let response = Request::get(&health_url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    Ok(())
}
