//! Verdex core: catalog store, query pipeline, durable local state, and the
//! subscription checkout state machine.
//!
//! The HTTP crate (`verdex-server`) is a thin shell over this library; all
//! business rules live here so they can be exercised without a server.
#![allow(missing_docs)]

pub mod api_types;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod persistence;
pub mod query;
pub mod validate;

pub use api_types::ApiResponse;
pub use catalog::facets::FacetOptions;
pub use catalog::store::CatalogStore;
pub use checkout::payment::{HmacPaymentVerifier, PaymentNotification, PaymentVerifier};
pub use checkout::session::{CheckoutPhase, CheckoutSession};
pub use error::{CoreError, Result};
pub use persistence::favorites::FavoritesRepository;
pub use persistence::profile::{Profile, ProfileRepository};
pub use persistence::site::SiteRepository;
pub use persistence::state::{JsonStateStore, StateStore};
pub use persistence::subscription::SubscriptionRepository;
pub use query::types::{CatalogQuery, FacetFilters, PageResult, Pagination};
pub use validate::ValidationError;
