use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;
use verdex_core::ApiResponse;
use verdex_model::{ContactInfo, DetailContent, PlantId, PlantRecord, PricingTable, SiteSettings};

/// Editable fields of a catalog entry, as the admin form submits them.
/// The identifier comes from the route (update) or is minted here (create).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantDraft {
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub plant_type: Option<String>,
    #[serde(default)]
    pub health_benefits: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uses: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub detail: Option<DetailContent>,
}

impl PlantDraft {
    fn into_record(self, id: PlantId) -> PlantRecord {
        PlantRecord {
            id,
            common_name: self.common_name,
            scientific_name: self.scientific_name,
            region: self.region,
            season: self.season,
            plant_type: self.plant_type,
            health_benefits: self.health_benefits,
            description: self.description,
            uses: self.uses,
            image: self.image,
            images: self.images,
            detail: self.detail,
        }
    }
}

/// `POST /plants`
pub async fn create_plant_handler(
    State(state): State<AppState>,
    Json(draft): Json<PlantDraft>,
) -> AppResult<Json<ApiResponse<PlantRecord>>> {
    let record = state
        .catalog
        .insert(draft.into_record(PlantId::new()))
        .await?;
    Ok(Json(ApiResponse::success(record)))
}

/// `PUT /plants/{id}`
pub async fn update_plant_handler(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
    Json(draft): Json<PlantDraft>,
) -> AppResult<Json<ApiResponse<PlantRecord>>> {
    let record = state.catalog.update(id, draft.into_record(id)).await?;
    Ok(Json(ApiResponse::success(record)))
}

/// `DELETE /plants/{id}`
pub async fn delete_plant_handler(
    State(state): State<AppState>,
    Path(id): Path<PlantId>,
) -> AppResult<Json<ApiResponse<PlantRecord>>> {
    let removed = state.catalog.remove(id).await?;
    Ok(Json(
        ApiResponse::success(removed).with_message("plant deleted".to_string()),
    ))
}

/// `PUT /plants` — bulk import: the whole catalog replaced in one call.
pub async fn replace_catalog_handler(
    State(state): State<AppState>,
    Json(items): Json<Vec<PlantRecord>>,
) -> AppResult<Json<ApiResponse<usize>>> {
    let count = items.len();
    state.catalog.replace_all(items).await?;
    Ok(Json(
        ApiResponse::success(count).with_message("catalog replaced".to_string()),
    ))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactDocument {
    pub contact_info: ContactInfo,
}

/// `GET /contact`
pub async fn get_contact_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ContactDocument>> {
    Ok(Json(ContactDocument {
        contact_info: state.site.contact().await?,
    }))
}

/// `PUT /contact`
pub async fn update_contact_handler(
    State(state): State<AppState>,
    Json(document): Json<ContactDocument>,
) -> AppResult<Json<ApiResponse<ContactInfo>>> {
    state.site.set_contact(&document.contact_info).await?;
    Ok(Json(ApiResponse::success(document.contact_info)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PricingDocument {
    pub pricing: PricingTable,
}

/// `GET /pricing`
pub async fn get_pricing_handler(
    State(state): State<AppState>,
) -> AppResult<Json<PricingDocument>> {
    Ok(Json(PricingDocument {
        pricing: state.site.pricing().await?,
    }))
}

/// `PUT /pricing`
pub async fn update_pricing_handler(
    State(state): State<AppState>,
    Json(document): Json<PricingDocument>,
) -> AppResult<Json<ApiResponse<PricingTable>>> {
    state.site.set_pricing(&document.pricing).await?;
    Ok(Json(ApiResponse::success(document.pricing)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub settings: SiteSettings,
}

/// `GET /settings`
pub async fn get_settings_handler(
    State(state): State<AppState>,
) -> AppResult<Json<SettingsDocument>> {
    Ok(Json(SettingsDocument {
        settings: state.site.settings().await?,
    }))
}

/// `PUT /settings`
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(document): Json<SettingsDocument>,
) -> AppResult<Json<ApiResponse<SiteSettings>>> {
    state.site.set_settings(&document.settings).await?;
    Ok(Json(ApiResponse::success(document.settings)))
}
