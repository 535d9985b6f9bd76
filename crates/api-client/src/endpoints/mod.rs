//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one identification-service
//! endpoint. There is currently a single one: `identify`, which fronts
//! the hosted vision model.

pub mod identify;

pub use identify::IdentifyApi;
