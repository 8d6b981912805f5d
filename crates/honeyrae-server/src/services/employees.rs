//! Employee lookups and performance queries

use crate::error::{DeskError, Result};
use crate::storage::MemoryStore;
use chrono::{Datelike, Days, NaiveDate};
use honeyrae_types::{Customer, Employee, EmployeeDetails, EntityId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

pub struct EmployeeDirectory {
    store: Arc<MemoryStore>,
}

impl EmployeeDirectory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Employee> {
        self.store.list_employees()
    }

    pub fn get_details(&self, id: EntityId) -> Result<EmployeeDetails> {
        let employee = self
            .store
            .get_employee(id)
            .ok_or(DeskError::EmployeeNotFound(id))?;
        Ok(self.join_tickets(employee))
    }

    /// Employees not holding any open ticket
    pub fn available(&self) -> Vec<Employee> {
        let busy: BTreeSet<EntityId> = self
            .store
            .tickets_where(|t| t.is_open())
            .into_iter()
            .filter_map(|t| t.employee_id)
            .collect();

        self.store
            .list_employees()
            .into_iter()
            .filter(|e| !busy.contains(&e.id))
            .collect()
    }

    /// Distinct customers that appear on the employee's tickets
    pub fn customers_served(&self, id: EntityId) -> Vec<Customer> {
        let customer_ids: BTreeSet<EntityId> = self
            .store
            .tickets_where(|t| t.is_assigned_to(id))
            .into_iter()
            .map(|t| t.customer_id)
            .collect();

        customer_ids
            .into_iter()
            .filter_map(|c| self.store.get_customer(c))
            .collect()
    }

    /// Employee who completed the most tickets during the previous calendar
    /// month. Ties go to the lowest employee id.
    pub fn employee_of_the_month(&self, today: NaiveDate) -> Result<EmployeeDetails> {
        let (start, end) = previous_month(today);
        debug!("Employee of the month window: [{}, {})", start, end);

        let mut completions: BTreeMap<EntityId, usize> = BTreeMap::new();
        for ticket in self.store.tickets_where(|t| t.completed_between(start, end)) {
            if let Some(employee_id) = ticket.employee_id {
                *completions.entry(employee_id).or_default() += 1;
            }
        }

        // max_by_key keeps the last maximum, so walk ids in descending order
        let winner = completions
            .into_iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .and_then(|(id, _)| self.store.get_employee(id))
            .ok_or(DeskError::NoMatches("completions last month"))?;

        Ok(self.join_tickets(winner))
    }

    fn join_tickets(&self, employee: Employee) -> EmployeeDetails {
        let service_tickets = self.store.tickets_where(|t| t.is_assigned_to(employee.id));
        EmployeeDetails {
            employee,
            service_tickets,
        }
    }
}

/// `[first day of last month, first day of this month)`
fn previous_month(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let this_month = today - Days::new(u64::from(today.day0()));
    let last_day_of_previous = this_month - Days::new(1);
    let previous = last_day_of_previous - Days::new(u64::from(last_day_of_previous.day0()));
    (previous, this_month)
}
