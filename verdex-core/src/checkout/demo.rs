//! Demo-mode payment plumbing. Everything here skips real verification and
//! must never be compiled into a production build.

use tracing::warn;
use uuid::Uuid;

use crate::checkout::payment::{PaymentNotification, PaymentVerifier};
use crate::error::{CoreError, Result};

/// Accept-all verifier for local demos.
#[derive(Debug, Default)]
pub struct DemoPaymentVerifier;

impl PaymentVerifier for DemoPaymentVerifier {
    fn verify(&self, notification: &PaymentNotification) -> Result<()> {
        warn!(
            order_id = %notification.order_id,
            "demo verifier accepted a payment without checking its signature"
        );
        Ok(())
    }
}

/// Fabricate the notification a gateway would send, failing roughly 15% of
/// the time the way the original demo flow did.
pub fn simulate_notification(order_id: &str) -> Result<PaymentNotification> {
    if rand::random::<f64>() < 0.15 {
        return Err(CoreError::Payment("simulated gateway decline".to_string()));
    }
    Ok(PaymentNotification {
        order_id: order_id.to_string(),
        payment_id: format!("pay_{}_demo", Uuid::new_v4().simple()),
        signature: "demo_signature".to_string(),
    })
}
