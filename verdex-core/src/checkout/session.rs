use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::checkout::payment::{PaymentNotification, PaymentVerifier};
use crate::error::{CoreError, Result};
use verdex_model::{BillingPlan, SubscriptionRecord};

/// How long one payment attempt may wait for confirmation.
pub const DEFAULT_PAYMENT_WINDOW: std::time::Duration = std::time::Duration::from_secs(300);

/// Where one checkout attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    SelectingPlan,
    ConfirmingPayment,
    Success,
    Failed,
    TimedOut,
}

impl CheckoutPhase {
    /// Failed and timed-out attempts may retry; success is final.
    pub fn can_retry(&self) -> bool {
        matches!(self, CheckoutPhase::Failed | CheckoutPhase::TimedOut)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckoutPhase::Success | CheckoutPhase::Failed | CheckoutPhase::TimedOut
        )
    }
}

/// One checkout attempt walking
/// `SelectingPlan → ConfirmingPayment → {Success | Failed | TimedOut}`,
/// with retry looping back into `ConfirmingPayment` under a fresh
/// correlation id and deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub plan: BillingPlan,
    pub phase: CheckoutPhase,
    /// Correlation identifier for the current payment attempt; minted on
    /// entering `ConfirmingPayment`, regenerated on retry.
    pub order_id: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn mint_order_id() -> String {
    format!("order_{}", Uuid::new_v4().simple())
}

impl CheckoutSession {
    pub fn new(plan: BillingPlan, now: DateTime<Utc>) -> Self {
        Self {
            plan,
            phase: CheckoutPhase::SelectingPlan,
            order_id: None,
            deadline: None,
            payment_id: None,
            created_at: now,
        }
    }

    /// Enter `ConfirmingPayment`, minting the correlation id and deadline.
    /// From a failed or timed-out attempt this is the retry transition and
    /// regenerates both.
    pub fn begin_payment(
        &mut self,
        now: DateTime<Utc>,
        window: std::time::Duration,
    ) -> Result<&str> {
        match self.phase {
            CheckoutPhase::SelectingPlan | CheckoutPhase::Failed | CheckoutPhase::TimedOut => {}
            CheckoutPhase::ConfirmingPayment => {
                return Err(CoreError::Checkout(
                    "a payment attempt is already in flight".to_string(),
                ));
            }
            CheckoutPhase::Success => {
                return Err(CoreError::Checkout(
                    "checkout already settled".to_string(),
                ));
            }
        }

        let window = Duration::from_std(window)
            .unwrap_or_else(|_| Duration::seconds(300));
        self.order_id = Some(mint_order_id());
        self.deadline = Some(now + window);
        self.payment_id = None;
        self.phase = CheckoutPhase::ConfirmingPayment;
        let order_id = self.order_id.as_deref().expect("just minted");
        info!(order_id, deadline = %self.deadline.expect("just set"), "payment attempt opened");
        Ok(order_id)
    }

    /// Seconds left on the countdown, if a payment attempt is in flight.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        match (self.phase, self.deadline) {
            (CheckoutPhase::ConfirmingPayment, Some(deadline)) => {
                Some((deadline - now).max(Duration::zero()))
            }
            _ => None,
        }
    }

    /// Move a stale in-flight attempt to `TimedOut`. Returns true if the
    /// transition happened.
    pub fn expire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.phase == CheckoutPhase::ConfirmingPayment
            && self.deadline.is_some_and(|deadline| now >= deadline)
        {
            warn!(order_id = ?self.order_id, "payment window expired");
            self.phase = CheckoutPhase::TimedOut;
            true
        } else {
            false
        }
    }

    /// Apply a payment notification.
    ///
    /// Only an in-flight attempt can settle; the notification must carry the
    /// current correlation id and a signature the verifier accepts. On
    /// success the session is final and the subscription record to persist
    /// is returned; on signature rejection the attempt moves to `Failed`
    /// (retryable).
    pub fn settle(
        &mut self,
        notification: &PaymentNotification,
        verifier: &dyn PaymentVerifier,
        now: DateTime<Utc>,
    ) -> Result<SubscriptionRecord> {
        if self.expire_if_due(now) {
            return Err(CoreError::Checkout(
                "payment window expired".to_string(),
            ));
        }
        if self.phase != CheckoutPhase::ConfirmingPayment {
            return Err(CoreError::Checkout(format!(
                "no payment awaiting confirmation (phase: {:?})",
                self.phase
            )));
        }
        let order_id = self
            .order_id
            .clone()
            .expect("in-flight attempt has an order id");
        if notification.order_id != order_id {
            return Err(CoreError::Payment(
                "unknown correlation identifier".to_string(),
            ));
        }

        if let Err(err) = verifier.verify(notification) {
            warn!(%order_id, %err, "payment verification failed");
            self.phase = CheckoutPhase::Failed;
            return Err(err);
        }

        self.phase = CheckoutPhase::Success;
        self.payment_id = Some(notification.payment_id.clone());
        info!(%order_id, payment_id = %notification.payment_id, "payment settled");

        Ok(SubscriptionRecord {
            plan: self.plan.kind,
            amount: self.plan.price,
            payment_id: notification.payment_id.clone(),
            order_id,
            subscribed_at: now,
            expires_at: self.plan.kind.expiry_from(now),
        })
    }
}
