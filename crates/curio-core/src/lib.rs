//! # curio-core
//!
//! Core crate for Curio. Contains configuration schemas, the storage
//! boundary trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Curio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
