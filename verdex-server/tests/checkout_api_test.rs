mod support;

use axum::http::StatusCode;
use serde_json::json;
use verdex_core::HmacPaymentVerifier;
use verdex_model::PlanKind;
use verdex_server::handlers::account::SubscriptionStatusResponse;
use verdex_server::handlers::catalog::{PlantDetailResponse, PlantListResponse};
use verdex_server::handlers::checkout::{
    CheckoutAttemptResponse, CheckoutStatusResponse, PlansResponse,
};

fn signed_callback(order_id: &str, payment_id: &str) -> serde_json::Value {
    let verifier = HmacPaymentVerifier::new(support::TEST_PAYMENT_SECRET);
    json!({
        "order_id": order_id,
        "payment_id": payment_id,
        "signature": verifier.signature_for(order_id, payment_id),
    })
}

#[tokio::test]
async fn plans_page_lists_three_offers() {
    let ctx = support::spawn().await;
    let response = ctx.server.get("/api/v1/plans").await;
    response.assert_status_ok();

    let body: PlansResponse = response.json();
    assert_eq!(body.plans.len(), 3);
    assert_eq!(body.key_id, "rzp_test_key");
    let yearly = body
        .plans
        .iter()
        .find(|p| p.kind == PlanKind::Yearly)
        .unwrap();
    assert_eq!(yearly.price, 1499);
    assert_eq!(yearly.original_price, 8999);
}

#[tokio::test]
async fn signed_callback_settles_and_activates_a_yearly_subscription() {
    let ctx = support::spawn().await;

    let attempt: CheckoutAttemptResponse = ctx
        .server
        .post("/api/v1/checkout")
        .json(&json!({ "plan": "yearly" }))
        .await
        .json();
    assert_eq!(attempt.amount_minor_units, 149_900);
    assert_eq!(attempt.currency, "INR");
    assert!(attempt.remaining_seconds > 290);

    let response = ctx
        .server
        .post("/api/v1/checkout/callback")
        .json(&signed_callback(&attempt.order_id, "pay_live_42"))
        .await;
    response.assert_status_ok();

    let status: SubscriptionStatusResponse =
        ctx.server.get("/api/v1/subscription").await.json();
    assert!(status.active);
    let record = status.record.expect("record persisted");
    assert_eq!(record.plan, PlanKind::Yearly);
    assert_eq!(record.amount, 1499);
    assert_eq!(
        record.expires_at,
        PlanKind::Yearly.expiry_from(record.subscribed_at)
    );
}

#[tokio::test]
async fn forged_callback_fails_and_retry_mints_a_new_correlation_id() {
    let ctx = support::spawn().await;

    let attempt: CheckoutAttemptResponse = ctx
        .server
        .post("/api/v1/checkout")
        .json(&json!({ "plan": "monthly" }))
        .await
        .json();

    let forged = json!({
        "order_id": attempt.order_id,
        "payment_id": "pay_forged",
        "signature": "deadbeef",
    });
    let response = ctx.server.post("/api/v1/checkout/callback").json(&forged).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let status: CheckoutStatusResponse = ctx
        .server
        .get(&format!("/api/v1/checkout/{}", attempt.order_id))
        .await
        .json();
    assert_eq!(status.phase, verdex_core::CheckoutPhase::Failed);

    let retried: CheckoutAttemptResponse = ctx
        .server
        .post(&format!("/api/v1/checkout/{}/retry", attempt.order_id))
        .await
        .json();
    assert_ne!(retried.order_id, attempt.order_id);

    // The superseded correlation id stops resolving.
    ctx.server
        .get(&format!("/api/v1/checkout/{}", attempt.order_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .post("/api/v1/checkout/callback")
        .json(&signed_callback(&attempt.order_id, "pay_late"))
        .await
        .assert_status(StatusCode::CONFLICT);

    // The fresh id settles normally.
    ctx.server
        .post("/api/v1/checkout/callback")
        .json(&signed_callback(&retried.order_id, "pay_retry_ok"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn abandoning_a_checkout_forgets_the_session() {
    let ctx = support::spawn().await;

    let attempt: CheckoutAttemptResponse = ctx
        .server
        .post("/api/v1/checkout")
        .json(&json!({ "plan": "weekly" }))
        .await
        .json();

    ctx.server
        .delete(&format!("/api/v1/checkout/{}", attempt.order_id))
        .await
        .assert_status_ok();
    ctx.server
        .get(&format!("/api/v1/checkout/{}", attempt.order_id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let status: SubscriptionStatusResponse =
        ctx.server.get("/api/v1/subscription").await.json();
    assert!(!status.active);
}

#[tokio::test]
async fn subscription_unlocks_premium_detail_tabs() {
    let ctx = support::spawn().await;

    let attempt: CheckoutAttemptResponse = ctx
        .server
        .post("/api/v1/checkout")
        .json(&json!({ "plan": "weekly" }))
        .await
        .json();
    ctx.server
        .post("/api/v1/checkout/callback")
        .json(&signed_callback(&attempt.order_id, "pay_weekly"))
        .await
        .assert_status_ok();

    let list: PlantListResponse = ctx.server.get("/api/v1/plants").await.json();
    let tulsi = list
        .plants
        .iter()
        .find(|p| p.common_name.as_deref() == Some("Tulsi"))
        .unwrap();

    let detail: PlantDetailResponse = ctx
        .server
        .get(&format!("/api/v1/plants/{}", tulsi.id))
        .await
        .json();
    assert!(!detail.premium_locked);
    let premium = detail.premium.expect("premium tabs present");
    assert!(!premium.growing_steps.is_empty());
    assert!(premium.ayurvedic.is_some());
}
