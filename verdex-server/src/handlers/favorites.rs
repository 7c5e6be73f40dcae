use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use verdex_model::{PlantId, PlantRecord};

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteStatus {
    pub id: PlantId,
    pub favorite: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub ids: Vec<PlantId>,
    /// Favorites resolved against the current catalog; ids whose entry has
    /// been removed are silently skipped.
    pub plants: Vec<PlantRecord>,
}

/// `GET /favorites`
pub async fn list_favorites_handler(
    State(state): State<AppState>,
) -> AppResult<Json<FavoritesResponse>> {
    let ids: Vec<PlantId> = state.favorites.all().await?.into_iter().collect();
    let snapshot = state.catalog.snapshot().await;
    let plants = snapshot
        .iter()
        .filter(|plant| ids.contains(&plant.id))
        .cloned()
        .collect();
    Ok(Json(FavoritesResponse { ids, plants }))
}

/// `GET /favorites/{id}`
pub async fn favorite_status_handler(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
) -> AppResult<Json<FavoriteStatus>> {
    let favorite = state.favorites.is_favorite(id).await?;
    Ok(Json(FavoriteStatus { id, favorite }))
}

/// `PUT /favorites/{id}` — the toggle button. Favoriting is decoupled from
/// the catalog lifecycle, so unknown ids toggle too.
pub async fn toggle_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
) -> AppResult<Json<FavoriteStatus>> {
    let favorite = state.favorites.toggle(id).await?;
    Ok(Json(FavoriteStatus { id, favorite }))
}
