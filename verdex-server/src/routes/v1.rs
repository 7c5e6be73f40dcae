use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{
    handlers::{account, admin, catalog, checkout, favorites, upload},
    infra::app_state::AppState,
    middleware::maintenance::maintenance_middleware,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(create_catalog_routes())
        .merge(create_visitor_routes(state.clone()))
        .merge(create_site_routes())
        .merge(create_payment_routes(state))
}

/// Catalog endpoints. Reads serve the browsing grid; writes are the admin
/// CRUD surface on the same paths (no auth is enforced in current scope).
fn create_catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/plants",
            get(catalog::list_plants_handler)
                .post(admin::create_plant_handler)
                .put(admin::replace_catalog_handler),
        )
        .route(
            "/plants/{id}",
            get(catalog::get_plant_handler)
                .put(admin::update_plant_handler)
                .delete(admin::delete_plant_handler),
        )
}

/// Visitor-facing state: favorites, plans, checkout, account. Goes dark
/// under maintenance mode.
fn create_visitor_routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/favorites", get(favorites::list_favorites_handler))
        .route(
            "/favorites/{id}",
            get(favorites::favorite_status_handler).put(favorites::toggle_favorite_handler),
        )
        .route("/plans", get(checkout::list_plans_handler))
        .route("/checkout", post(checkout::create_checkout_handler))
        .route(
            "/checkout/{order_id}",
            get(checkout::checkout_status_handler).delete(checkout::abandon_checkout_handler),
        )
        .route(
            "/checkout/{order_id}/retry",
            post(checkout::retry_checkout_handler),
        )
        .route(
            "/account/profile",
            get(account::get_profile_handler).put(account::update_profile_handler),
        )
        .route("/subscription", get(account::subscription_status_handler));

    #[cfg(feature = "demo")]
    let router = router.route(
        "/checkout/{order_id}/demo-pay",
        post(checkout::demo_pay_handler),
    );

    router.route_layer(middleware::from_fn_with_state(
        state,
        maintenance_middleware,
    ))
}

/// Site content documents plus image upload (admin screen).
fn create_site_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(admin::get_contact_handler).put(admin::update_contact_handler),
        )
        .route(
            "/pricing",
            get(admin::get_pricing_handler).put(admin::update_pricing_handler),
        )
        .route(
            "/settings",
            get(admin::get_settings_handler).put(admin::update_settings_handler),
        )
        .route(
            "/upload",
            post(upload::upload_image_handler).delete(upload::delete_image_handler),
        )
}

/// The payment collaborator's callback. Deliberately outside the
/// maintenance layer: an in-flight payment must still settle.
fn create_payment_routes(_state: AppState) -> Router<AppState> {
    Router::new().route(
        "/checkout/callback",
        post(checkout::payment_callback_handler),
    )
}
