use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::{CoreError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Callback payload from the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentNotification {
    pub order_id: String,
    pub payment_id: String,
    /// Hex-encoded HMAC-SHA256 over `"{order_id}|{payment_id}"`.
    pub signature: String,
}

/// Decides whether a payment notification is authentic.
///
/// Activation authority lives behind this trait; the browsing client is
/// never trusted to report success on its own.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentVerifier: Send + Sync {
    fn verify(&self, notification: &PaymentNotification) -> Result<()>;
}

/// Production verifier: recomputes the gateway's HMAC-SHA256 signature and
/// compares in constant time.
pub struct HmacPaymentVerifier {
    secret: String,
}

impl std::fmt::Debug for HmacPaymentVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacPaymentVerifier").finish_non_exhaustive()
    }
}

impl HmacPaymentVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac_bytes(&self, order_id: &str, payment_id: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("hmac accepts any key length");
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    /// Hex signature the gateway would produce. Used by tests and the demo
    /// gateway simulator.
    pub fn signature_for(&self, order_id: &str, payment_id: &str) -> String {
        hex::encode(self.mac_bytes(order_id, payment_id))
    }
}

impl PaymentVerifier for HmacPaymentVerifier {
    fn verify(&self, notification: &PaymentNotification) -> Result<()> {
        let claimed = hex::decode(notification.signature.trim())
            .map_err(|_| CoreError::Payment("malformed signature".to_string()))?;
        let expected = self.mac_bytes(&notification.order_id, &notification.payment_id);
        if constant_time_eq::constant_time_eq(&claimed, &expected) {
            Ok(())
        } else {
            Err(CoreError::Payment("signature mismatch".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(verifier: &HmacPaymentVerifier) -> PaymentNotification {
        PaymentNotification {
            order_id: "order_abc".to_string(),
            payment_id: "pay_123".to_string(),
            signature: verifier.signature_for("order_abc", "pay_123"),
        }
    }

    #[test]
    fn accepts_a_correctly_signed_notification() {
        let verifier = HmacPaymentVerifier::new("gateway-secret");
        assert!(verifier.verify(&notification(&verifier)).is_ok());
    }

    #[test]
    fn rejects_a_signature_from_another_secret() {
        let verifier = HmacPaymentVerifier::new("gateway-secret");
        let other = HmacPaymentVerifier::new("wrong-secret");
        let mut n = notification(&verifier);
        n.signature = other.signature_for(&n.order_id, &n.payment_id);
        assert!(matches!(
            verifier.verify(&n),
            Err(CoreError::Payment(_))
        ));
    }

    #[test]
    fn rejects_a_tampered_order_id() {
        let verifier = HmacPaymentVerifier::new("gateway-secret");
        let mut n = notification(&verifier);
        n.order_id = "order_other".to_string();
        assert!(verifier.verify(&n).is_err());
    }

    #[test]
    fn rejects_non_hex_signatures() {
        let verifier = HmacPaymentVerifier::new("gateway-secret");
        let mut n = notification(&verifier);
        n.signature = "demo_signature".to_string();
        assert!(matches!(
            verifier.verify(&n),
            Err(CoreError::Payment(_))
        ));
    }
}
