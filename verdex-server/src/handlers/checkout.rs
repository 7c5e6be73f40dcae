use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;
use verdex_contracts::plan_like::PlanLike;
use verdex_core::{
    ApiResponse, CheckoutPhase, CheckoutSession, PaymentNotification,
};
use verdex_model::{BillingPlan, PlanKind, SubscriptionRecord};

#[derive(Debug, Serialize, Deserialize)]
pub struct PlansResponse {
    pub plans: Vec<BillingPlan>,
    /// Public key id for the hosted checkout widget.
    pub key_id: String,
}

/// `GET /plans` — the offer list, from the admin-editable pricing table.
pub async fn list_plans_handler(
    State(state): State<AppState>,
) -> AppResult<Json<PlansResponse>> {
    let pricing = state.site.pricing().await?;
    Ok(Json(PlansResponse {
        plans: pricing.plans(),
        key_id: state.config.payment.key_id.clone(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    pub plan: PlanKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutAttemptResponse {
    pub order_id: String,
    pub phase: CheckoutPhase,
    pub plan: PlanKind,
    /// Amount handed to the payment widget, in minor units (paise).
    pub amount_minor_units: u64,
    pub currency: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub remaining_seconds: i64,
}

fn attempt_response(
    session: &CheckoutSession,
    now: chrono::DateTime<chrono::Utc>,
) -> CheckoutAttemptResponse {
    CheckoutAttemptResponse {
        order_id: session.order_id.clone().unwrap_or_default(),
        phase: session.phase,
        plan: session.plan.kind,
        amount_minor_units: session.plan.amount_minor_units(),
        currency: "INR".to_string(),
        deadline: session.deadline.unwrap_or(now),
        remaining_seconds: session
            .remaining(now)
            .map(|d| d.num_seconds())
            .unwrap_or(0),
    }
}

/// `POST /checkout` — select a plan and open a payment attempt.
pub async fn create_checkout_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> AppResult<Json<CheckoutAttemptResponse>> {
    let pricing = state.site.pricing().await?;
    let plan = pricing
        .plans()
        .into_iter()
        .find(|p| p.kind == request.plan)
        .ok_or_else(|| AppError::bad_request("unknown plan"))?;

    let now = Utc::now();
    let mut session = CheckoutSession::new(plan, now);
    let order_id = session
        .begin_payment(now, state.config.checkout_window)?
        .to_string();

    let response = attempt_response(&session, now);
    state.checkouts.lock().await.insert(order_id, session);
    Ok(Json(response))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutStatusResponse {
    pub order_id: String,
    pub phase: CheckoutPhase,
    pub plan: PlanKind,
    pub remaining_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// `GET /checkout/{order_id}` — countdown polling.
pub async fn checkout_status_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<CheckoutStatusResponse>> {
    let now = Utc::now();
    let mut checkouts = state.checkouts.lock().await;
    let session = checkouts
        .get_mut(&order_id)
        .ok_or_else(|| AppError::not_found("unknown checkout"))?;
    session.expire_if_due(now);

    Ok(Json(CheckoutStatusResponse {
        order_id,
        phase: session.phase,
        plan: session.plan.kind,
        remaining_seconds: session
            .remaining(now)
            .map(|d| d.num_seconds())
            .unwrap_or(0),
        payment_id: session.payment_id.clone(),
    }))
}

/// `POST /checkout/{order_id}/retry` — after a failure or timeout. The
/// attempt re-enters `ConfirmingPayment` under a fresh correlation id, so
/// the session is re-keyed and the stale id stops resolving.
pub async fn retry_checkout_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<CheckoutAttemptResponse>> {
    let now = Utc::now();
    let mut checkouts = state.checkouts.lock().await;
    let mut session = checkouts
        .remove(&order_id)
        .ok_or_else(|| AppError::not_found("unknown checkout"))?;
    session.expire_if_due(now);

    if !session.phase.can_retry() {
        let phase = session.phase;
        checkouts.insert(order_id, session);
        return Err(AppError::conflict(format!(
            "checkout is not retryable (phase: {phase:?})"
        )));
    }

    let new_order_id = session
        .begin_payment(now, state.config.checkout_window)?
        .to_string();
    let response = attempt_response(&session, now);
    checkouts.insert(new_order_id, session);
    Ok(Json(response))
}

/// `DELETE /checkout/{order_id}` — navigate-away. Cancels the countdown and
/// abandons the in-flight correlation id without reconciliation.
pub async fn abandon_checkout_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let removed = state.checkouts.lock().await.remove(&order_id);
    match removed {
        Some(_) => Ok(Json(
            ApiResponse::success(()).with_message("checkout abandoned".to_string()),
        )),
        None => Err(AppError::not_found("unknown checkout")),
    }
}

/// `POST /checkout/callback` — the payment collaborator's notification.
/// Signature verification decides settlement; on success the subscription
/// record is persisted before the response goes out.
pub async fn payment_callback_handler(
    State(state): State<AppState>,
    Json(notification): Json<PaymentNotification>,
) -> AppResult<Json<ApiResponse<SubscriptionRecord>>> {
    let now = Utc::now();
    let mut checkouts = state.checkouts.lock().await;
    let session = checkouts
        .get_mut(&notification.order_id)
        .ok_or_else(|| AppError::conflict("unknown or superseded correlation identifier"))?;

    let record = session.settle(&notification, state.verifier.as_ref(), now)?;
    drop(checkouts);

    state.subscriptions.activate(&record).await?;
    Ok(Json(ApiResponse::success(record)))
}

/// `POST /checkout/{order_id}/demo-pay` — demo builds only: fabricate the
/// gateway notification and push it through the normal settlement path.
#[cfg(feature = "demo")]
pub async fn demo_pay_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<SubscriptionRecord>>> {
    use verdex_core::checkout::demo;

    let notification = {
        let mut checkouts = state.checkouts.lock().await;
        let session = checkouts
            .get_mut(&order_id)
            .ok_or_else(|| AppError::not_found("unknown checkout"))?;
        if session.phase != CheckoutPhase::ConfirmingPayment {
            return Err(AppError::conflict("no payment awaiting confirmation"));
        }
        match demo::simulate_notification(&order_id) {
            Ok(notification) => notification,
            Err(err) => {
                session.phase = CheckoutPhase::Failed;
                return Err(err.into());
            }
        }
    };

    payment_callback_handler(State(state), Json(notification)).await
}
