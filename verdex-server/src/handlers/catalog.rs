use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;
use verdex_core::{CatalogQuery, FacetFilters, FacetOptions, Pagination, query};
use verdex_model::{
    AyurvedicProperties, GrowingStep, MedicinalUse, PlantId, PlantRecord, SortKey,
};

/// Query-string form of the browsing state.
#[derive(Debug, Default, Deserialize)]
pub struct ListPlantsParams {
    pub search: Option<String>,
    pub region: Option<String>,
    pub season: Option<String>,
    pub plant_type: Option<String>,
    pub benefit: Option<String>,
    pub sort: Option<SortKey>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListPlantsParams {
    fn into_query(self) -> CatalogQuery {
        let default_pages = Pagination::default();
        CatalogQuery {
            search: self.search,
            filters: FacetFilters {
                region: self.region,
                season: self.season,
                plant_type: self.plant_type,
                benefit: self.benefit,
            },
            sort: self.sort.unwrap_or_default(),
            pagination: Pagination {
                page: self.page.unwrap_or(default_pages.page),
                per_page: self.per_page.unwrap_or(default_pages.per_page),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlantListResponse {
    pub plants: Vec<PlantRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    /// Dropdown options for each facet, derived from the full catalog.
    pub facets: FacetOptions,
}

/// `GET /plants` — the browsing pipeline over a catalog snapshot.
pub async fn list_plants_handler(
    State(state): State<AppState>,
    Query(params): Query<ListPlantsParams>,
) -> AppResult<Json<PlantListResponse>> {
    let snapshot = state.catalog.snapshot().await;
    let result = query::execute(&snapshot, &params.into_query());
    let facets = FacetOptions::collect(&snapshot);

    Ok(Json(PlantListResponse {
        plants: result.items,
        page: result.page,
        total_pages: result.total_pages,
        total_matches: result.total_matches,
        facets,
    }))
}

/// Premium tabs of the detail page; withheld while locked.
#[derive(Debug, Serialize, Deserialize)]
pub struct PremiumContent {
    pub growing_steps: Vec<GrowingStep>,
    pub ayurvedic: Option<AyurvedicProperties>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlantDetailResponse {
    pub plant: PlantRecord,
    pub medicinal_uses: Vec<MedicinalUse>,
    pub traditional_uses: Vec<String>,
    /// Present only for subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<PremiumContent>,
    /// True when premium tabs exist but the visitor is not subscribed.
    pub premium_locked: bool,
}

/// `GET /plants/{id}` — detail page with premium gating.
pub async fn get_plant_handler(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
) -> AppResult<Json<PlantDetailResponse>> {
    let mut plant = state
        .catalog
        .get(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("plant {id}")))?;

    let detail = plant.detail.take().unwrap_or_default();
    let has_premium = !detail.growing_steps.is_empty() || detail.ayurvedic.is_some();
    let is_premium = state.subscriptions.is_premium(Utc::now()).await?;

    let premium = (has_premium && is_premium).then(|| PremiumContent {
        growing_steps: detail.growing_steps.clone(),
        ayurvedic: detail.ayurvedic.clone(),
    });

    Ok(Json(PlantDetailResponse {
        plant,
        medicinal_uses: detail.medicinal_uses,
        traditional_uses: detail.traditional_uses,
        premium_locked: has_premium && !is_premium,
        premium,
    }))
}
