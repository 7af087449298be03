//! Shared types and models for the Footwear Order Management Platform
//!
//! This crate contains types shared between the backend and other components
//! of the system: domain models, the order pricing engine, and validation
//! helpers. It performs no I/O and has no database dependency.

pub mod models;
pub mod pricing;
pub mod types;
pub mod validation;

pub use models::*;
pub use pricing::*;
pub use types::*;
pub use validation::*;
