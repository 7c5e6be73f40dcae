//! Subscription checkout: the linear state machine and the payment
//! notification verifier that gates activation.

pub mod payment;
pub mod session;

#[cfg(feature = "demo")]
pub mod demo;
