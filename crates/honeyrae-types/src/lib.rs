//! Honey Rae Types - Pure type definitions for the service desk
//!
//! This crate contains only plain data types and their predicates, with no
//! runtime or storage dependencies. JSON field names are camelCase.

pub mod customer;
pub mod datetime;
pub mod employee;
pub mod ticket;

pub use customer::*;
pub use employee::*;
pub use ticket::*;

/// Identifier type shared by every entity
pub type EntityId = i32;
