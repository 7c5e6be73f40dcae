//! Full checkout walk: plan selection through settlement and persistence.

use std::sync::Arc;

use chrono::Utc;
use verdex_core::checkout::payment::{HmacPaymentVerifier, PaymentNotification};
use verdex_core::checkout::session::{CheckoutSession, DEFAULT_PAYMENT_WINDOW};
use verdex_core::persistence::state::JsonStateStore;
use verdex_core::persistence::subscription::SubscriptionRepository;
use verdex_model::{PlanKind, PricingTable};

#[tokio::test]
async fn settled_checkout_activates_a_persisted_subscription() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStateStore::in_dir(dir.path()));
    let subscriptions = SubscriptionRepository::new(store);
    let verifier = HmacPaymentVerifier::new("gateway-secret");

    let yearly = PricingTable::default()
        .plans()
        .into_iter()
        .find(|p| p.kind == PlanKind::Yearly)
        .unwrap();

    let now = Utc::now();
    let mut session = CheckoutSession::new(yearly, now);
    let order_id = session
        .begin_payment(now, DEFAULT_PAYMENT_WINDOW)
        .unwrap()
        .to_string();

    let notification = PaymentNotification {
        order_id: order_id.clone(),
        payment_id: "pay_live_1".to_string(),
        signature: verifier.signature_for(&order_id, "pay_live_1"),
    };
    let record = session.settle(&notification, &verifier, now).unwrap();
    subscriptions.activate(&record).await.unwrap();

    let stored = subscriptions.current().await.unwrap().unwrap();
    assert_eq!(stored.plan, PlanKind::Yearly);
    assert_eq!(stored.amount, 1499);
    assert_eq!(stored.order_id, order_id);
    assert_eq!(stored.expires_at, PlanKind::Yearly.expiry_from(now));
    assert!(subscriptions.is_premium(now).await.unwrap());
}

#[tokio::test]
async fn failed_attempt_leaves_no_subscription_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStateStore::in_dir(dir.path()));
    let subscriptions = SubscriptionRepository::new(store);
    let verifier = HmacPaymentVerifier::new("gateway-secret");

    let monthly = PricingTable::default()
        .plans()
        .into_iter()
        .find(|p| p.kind == PlanKind::Monthly)
        .unwrap();

    let now = Utc::now();
    let mut session = CheckoutSession::new(monthly, now);
    let order_id = session
        .begin_payment(now, DEFAULT_PAYMENT_WINDOW)
        .unwrap()
        .to_string();

    let forged = PaymentNotification {
        order_id,
        payment_id: "pay_forged".to_string(),
        signature: "0000".to_string(),
    };
    assert!(session.settle(&forged, &verifier, now).is_err());
    assert!(subscriptions.current().await.unwrap().is_none());
    assert!(!subscriptions.is_premium(now).await.unwrap());
}
