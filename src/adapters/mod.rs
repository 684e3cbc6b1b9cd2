//! Infrastructure adapters.
//!
//! Storage implements the outbound CatalogPort; HTTP drives the inbound port.
//! Errors are mapped to DomainError.

pub mod http;
pub mod persistence;
