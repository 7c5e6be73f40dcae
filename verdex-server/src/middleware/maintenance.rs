use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::infra::app_state::AppState;

/// Return 503 from the visitor-facing surface while maintenance mode is on.
/// The catalog and admin endpoints stay reachable so the screen that turns
/// the flag back off keeps working.
pub async fn maintenance_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.site.settings().await {
        Ok(settings) if settings.maintenance_mode => {
            AppError::unavailable("site is down for maintenance").into_response()
        }
        _ => next.run(request).await,
    }
}
