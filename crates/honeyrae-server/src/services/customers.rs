//! Customer lookups

use super::non_empty;
use crate::error::{DeskError, Result};
use crate::storage::MemoryStore;
use chrono::{Days, NaiveDate};
use honeyrae_types::{Customer, CustomerDetails, EntityId};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Customers with no completion on or after `today - INACTIVE_AFTER_DAYS`
/// are inactive.
pub const INACTIVE_AFTER_DAYS: u64 = 365;

pub struct CustomerDirectory {
    store: Arc<MemoryStore>,
}

impl CustomerDirectory {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Customer> {
        self.store.list_customers()
    }

    pub fn get_details(&self, id: EntityId) -> Result<CustomerDetails> {
        let customer = self
            .store
            .get_customer(id)
            .ok_or(DeskError::CustomerNotFound(id))?;
        let service_tickets = self.store.tickets_where(|t| t.customer_id == id);

        Ok(CustomerDetails {
            customer,
            service_tickets,
        })
    }

    pub fn inactive(&self, today: NaiveDate) -> Result<Vec<Customer>> {
        let since = today - Days::new(INACTIVE_AFTER_DAYS);
        let active: BTreeSet<EntityId> = self
            .store
            .tickets_where(|t| t.completed_since(since))
            .into_iter()
            .map(|t| t.customer_id)
            .collect();

        let inactive = self
            .store
            .list_customers()
            .into_iter()
            .filter(|c| !active.contains(&c.id))
            .collect();
        non_empty(inactive, "inactive customers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use honeyrae_types::ServiceTicket;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn directory(completions: &[(EntityId, Option<NaiveDate>)]) -> CustomerDirectory {
        let store = MemoryStore::new();
        store.insert_customer(Customer::new(100, "Bob Marley", "345 Maple Street"));
        store.insert_customer(Customer::new(101, "Sean Connery", "678 Ocean Drive"));
        for (i, (customer_id, completed)) in completions.iter().enumerate() {
            store.insert_ticket(ServiceTicket {
                id: i as EntityId + 1,
                customer_id: *customer_id,
                employee_id: None,
                description: String::new(),
                emergency: false,
                date_completed: completed.map(NaiveDateTime::from),
            });
        }
        CustomerDirectory::new(Arc::new(store))
    }

    fn ids(customers: &[Customer]) -> Vec<EntityId> {
        customers.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_inactive_boundary_at_365_days() {
        let today = date(2026, 10, 18);
        let exactly_365 = today - Days::new(365);
        let just_outside = today - Days::new(366);
        assert_eq!(exactly_365, date(2025, 10, 18));

        let dir = directory(&[(100, Some(exactly_365)), (101, Some(just_outside))]);
        assert_eq!(ids(&dir.inactive(today).unwrap()), vec![101]);
    }

    #[test]
    fn test_open_tickets_do_not_count_as_activity() {
        let today = date(2026, 10, 18);
        let dir = directory(&[(100, None), (101, Some(today))]);
        assert_eq!(ids(&dir.inactive(today).unwrap()), vec![100]);
    }

    #[test]
    fn test_no_inactive_customers() {
        let today = date(2026, 10, 18);
        let dir = directory(&[(100, Some(today)), (101, Some(date(2026, 1, 1)))]);
        assert_eq!(
            dir.inactive(today),
            Err(DeskError::NoMatches("inactive customers"))
        );
    }

    #[test]
    fn test_details_join_tickets() {
        let dir = directory(&[(100, None), (101, None), (100, None)]);
        let details = dir.get_details(100).unwrap();
        let ticket_ids: Vec<_> = details.service_tickets.iter().map(|t| t.id).collect();
        assert_eq!(ticket_ids, vec![1, 3]);
        assert_eq!(
            dir.get_details(5).unwrap_err(),
            DeskError::CustomerNotFound(5)
        );
    }
}
