//! Starting data loaded when `SEED_DATA` is enabled

use super::MemoryStore;
use chrono::{NaiveDate, NaiveDateTime};
use honeyrae_types::{Customer, Employee, ServiceTicket};
use tracing::info;

impl MemoryStore {
    /// A store holding the demo customers, employees and tickets
    pub fn seeded() -> Self {
        let store = Self::new();

        store.insert_customer(Customer::new(100, "Bob Marley", "345 Maple Street"));
        store.insert_customer(Customer::new(101, "Sean Connery", "678 Ocean Drive"));
        store.insert_customer(Customer::new(102, "Genghis Khan", "1234 Elmwood Avenue"));

        store.insert_employee(Employee::new(200, "Steve Perry", "Singing"));
        store.insert_employee(Employee::new(201, "David Coverdale", "Screaming"));

        let tickets = [
            (1, 100, Some(200), "Plugged-up toilet", false, completed_on(2025, 1, 28)),
            (2, 101, Some(201), "Exposed wires", true, None),
            (3, 102, None, "Busted mailbox", false, None),
            (4, 101, Some(200), "Non-functioning monitor", false, None),
            (5, 100, None, "Leaky faucet", true, None),
        ];
        for (id, customer_id, employee_id, description, emergency, date_completed) in tickets {
            store.insert_ticket(ServiceTicket {
                id,
                customer_id,
                employee_id,
                description: description.to_string(),
                emergency,
                date_completed,
            });
        }

        let counts = store.counts();
        info!(
            "Seeded store: {} customers, {} employees, {} tickets",
            counts.customers, counts.employees, counts.tickets
        );
        store
    }
}

fn completed_on(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(NaiveDateTime::from)
}
