//! In-memory tables using DashMap
//!
//! All state lives in process memory and is lost on restart.

use dashmap::DashMap;
use honeyrae_types::{Customer, Employee, EntityId, NewServiceTicket, ServiceTicket};
use serde::Serialize;
use std::sync::Mutex;
use utoipa::ToSchema;

/// The three entity tables, shared by every service
pub struct MemoryStore {
    customers: DashMap<EntityId, Customer>,
    employees: DashMap<EntityId, Employee>,
    tickets: DashMap<EntityId, ServiceTicket>,
    // Held while computing max + 1 so concurrent creations get distinct ids
    next_ticket_id: Mutex<()>,
}

/// Row counts per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreCounts {
    pub customers: usize,
    pub employees: usize,
    pub tickets: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
            employees: DashMap::new(),
            tickets: DashMap::new(),
            next_ticket_id: Mutex::new(()),
        }
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.customers.insert(customer.id, customer);
    }

    pub fn insert_employee(&self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Insert a ticket with a caller-chosen id (seed data and tests)
    pub fn insert_ticket(&self, ticket: ServiceTicket) {
        self.tickets.insert(ticket.id, ticket);
    }

    pub fn get_customer(&self, id: EntityId) -> Option<Customer> {
        self.customers.get(&id).map(|c| c.value().clone())
    }

    pub fn get_employee(&self, id: EntityId) -> Option<Employee> {
        self.employees.get(&id).map(|e| e.value().clone())
    }

    pub fn get_ticket(&self, id: EntityId) -> Option<ServiceTicket> {
        self.tickets.get(&id).map(|t| t.value().clone())
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        sorted_by_id(&self.customers, |c| c.id)
    }

    pub fn list_employees(&self) -> Vec<Employee> {
        sorted_by_id(&self.employees, |e| e.id)
    }

    pub fn list_tickets(&self) -> Vec<ServiceTicket> {
        self.tickets_where(|_| true)
    }

    /// Snapshot of the tickets matching `predicate`, ordered by id
    pub fn tickets_where<F>(&self, predicate: F) -> Vec<ServiceTicket>
    where
        F: Fn(&ServiceTicket) -> bool,
    {
        let mut tickets: Vec<ServiceTicket> = self
            .tickets
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        tickets.sort_by_key(|t| t.id);
        tickets
    }

    /// Store a new ticket under `max(existing ids) + 1`, or 1 when empty
    pub fn create_ticket(&self, new_ticket: NewServiceTicket) -> ServiceTicket {
        let _guard = self
            .next_ticket_id
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let id = self
            .tickets
            .iter()
            .map(|entry| *entry.key())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1);

        let ticket = new_ticket.into_ticket(id);
        self.tickets.insert(id, ticket.clone());
        ticket
    }

    /// Replace an existing ticket wholesale. Returns false if it is absent.
    pub fn replace_ticket(&self, ticket: ServiceTicket) -> bool {
        match self.tickets.get_mut(&ticket.id) {
            Some(mut existing) => {
                *existing = ticket;
                true
            }
            None => false,
        }
    }

    pub fn remove_ticket(&self, id: EntityId) -> Option<ServiceTicket> {
        self.tickets.remove(&id).map(|(_, ticket)| ticket)
    }

    /// Apply `f` to a stored ticket and return the updated copy
    pub fn update_ticket<F>(&self, id: EntityId, f: F) -> Option<ServiceTicket>
    where
        F: FnOnce(&mut ServiceTicket),
    {
        self.tickets.get_mut(&id).map(|mut entry| {
            f(entry.value_mut());
            entry.value().clone()
        })
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            customers: self.customers.len(),
            employees: self.employees.len(),
            tickets: self.tickets.len(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_id<T, F>(table: &DashMap<EntityId, T>, id: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> EntityId,
{
    let mut rows: Vec<T> = table.iter().map(|entry| entry.value().clone()).collect();
    rows.sort_by_key(|row| id(row));
    rows
}
