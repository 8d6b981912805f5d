//! Business logic services

pub mod clock;
pub mod customers;
pub mod employees;
pub mod tickets;

pub use clock::{Clock, SystemClock};
pub use customers::CustomerDirectory;
pub use employees::EmployeeDirectory;
pub use tickets::TicketService;

use crate::error::{DeskError, Result};

/// Derived queries report an empty result as not-found
fn non_empty<T>(rows: Vec<T>, what: &'static str) -> Result<Vec<T>> {
    if rows.is_empty() {
        Err(DeskError::NoMatches(what))
    } else {
        Ok(rows)
    }
}
