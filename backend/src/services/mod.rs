//! Business logic services for the Footwear Order Management Platform

pub mod customer;
pub mod order;
pub mod product;

pub use customer::CustomerService;
pub use order::OrderService;
pub use product::ProductService;
