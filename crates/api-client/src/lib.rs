//! HTTP client for the plant identification service.
//!
//! The identification service is a thin endpoint in front of a hosted
//! vision model: it takes a photo as a base64 data URL and answers with
//! a structured analysis (name, description, care guidance, Wikipedia
//! link). This crate provides a typed client for that endpoint.
//!
//! # Features
//!
//! - **Environment-based configuration**: URL, key, and timeout from
//!   environment variables
//! - **Retry with exponential backoff**: automatic retry for transient
//!   failures
//! - **Request correlation**: unique IDs per request for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use plantdex_api_client::IdentifyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IdentifyClient::new()?;
//!
//!     let analysis = client
//!         .identify()
//!         .analyze("data:image/jpeg;base64,...")
//!         .await?;
//!     println!("That looks like {}", analysis.plant_name);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::IdentifyClient;
pub use config::{ClientConfig, RetryPolicy};
pub use endpoints::IdentifyApi;
pub use error::{ApiError, ApiResult};
