//! Core domain types and local persistence for plantdex.
//!
//! This crate provides:
//!
//! - **`PlantRecord`**: the identified-plant model shared across the
//!   workspace, with optional fields where the identification service
//!   had no data
//! - **`CollectionStore`**: the JSON-file collection, loaded in full at
//!   startup and written back in full after every mutation
//!
//! # Example
//!
//! ```rust,no_run
//! use plantdex_core::CollectionStore;
//!
//! let store = CollectionStore::default_location().expect("no data directory");
//! let plants = store.load().expect("collection unreadable");
//! println!("{} plants saved", plants.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod model;
pub mod store;

pub use error::{CoreError, Result};
pub use model::{NOT_AVAILABLE, PlantRecord};
pub use store::CollectionStore;
