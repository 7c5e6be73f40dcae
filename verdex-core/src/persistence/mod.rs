//! Durable local state: the file-backed stand-in for origin-scoped browser
//! storage, reached only through repository interfaces.

pub mod favorites;
pub mod profile;
pub mod site;
pub mod state;
pub mod subscription;
