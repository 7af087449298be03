//! Domain models for the Footwear Order Management Platform

mod customer;
mod order;
mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
