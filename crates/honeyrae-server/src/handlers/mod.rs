//! HTTP handlers

pub mod customers;
pub mod employees;
pub mod health;
pub mod openapi;
pub mod service_tickets;

pub use health::health;
