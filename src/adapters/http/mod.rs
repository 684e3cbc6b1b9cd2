//! HTTP inbound adapter (actix-web).

pub mod error;
pub mod handlers;

pub use error::ErrorResponse;
pub use handlers::configure;
