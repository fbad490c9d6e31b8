//! Configuration loading and schema definitions
//!
//! Shared configuration types used by the fetch and transform crates.

mod loader;
mod schema;

pub use loader::{apply_overrides, validate, Config};
pub use schema::*;
