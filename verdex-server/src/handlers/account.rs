use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use verdex_core::{ApiResponse, Profile};
use verdex_model::SubscriptionRecord;

/// `GET /account/profile`
pub async fn get_profile_handler(State(state): State<AppState>) -> AppResult<Json<Profile>> {
    Ok(Json(state.profiles.get().await?))
}

/// `PUT /account/profile` — field validation happens before storage; a bad
/// email never touches the store.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    state.profiles.set(&profile).await?;
    Ok(Json(ApiResponse::success(profile)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionStatusResponse {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<SubscriptionRecord>,
}

/// `GET /subscription` — active flag plus the stored record, if any.
pub async fn subscription_status_handler(
    State(state): State<AppState>,
) -> AppResult<Json<SubscriptionStatusResponse>> {
    let record = state.subscriptions.current().await?;
    let active = record
        .as_ref()
        .is_some_and(|r| r.is_active(Utc::now()));
    Ok(Json(SubscriptionStatusResponse { active, record }))
}
