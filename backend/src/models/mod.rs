//! Database models for the Footwear Order Management Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
