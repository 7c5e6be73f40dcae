pub mod v1;

pub use v1::create_v1_router;
