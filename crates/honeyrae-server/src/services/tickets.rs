//! Service ticket management

use super::non_empty;
use crate::error::{DeskError, Result};
use crate::storage::MemoryStore;
use chrono::NaiveDate;
use honeyrae_types::{EntityId, NewServiceTicket, ServiceTicket, ServiceTicketDetails};
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, info};

pub struct TicketService {
    store: Arc<MemoryStore>,
}

impl TicketService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<ServiceTicket> {
        self.store.list_tickets()
    }

    /// Ticket joined with its customer and employee
    pub fn get_details(&self, id: EntityId) -> Result<ServiceTicketDetails> {
        let ticket = self
            .store
            .get_ticket(id)
            .ok_or(DeskError::TicketNotFound(id))?;

        let customer = self.store.get_customer(ticket.customer_id);
        let employee = ticket.employee_id.and_then(|e| self.store.get_employee(e));

        Ok(ServiceTicketDetails {
            ticket,
            customer,
            employee,
        })
    }

    pub fn create(&self, new_ticket: NewServiceTicket) -> ServiceTicket {
        let ticket = self.store.create_ticket(new_ticket);
        info!(
            "Created ticket {} for customer {}",
            ticket.id, ticket.customer_id
        );
        ticket
    }

    /// Full replacement. The id check runs before the existence check.
    pub fn replace(&self, path_id: EntityId, ticket: ServiceTicket) -> Result<()> {
        if ticket.id != path_id {
            return Err(DeskError::IdMismatch {
                path: path_id,
                body: ticket.id,
            });
        }

        if !self.store.replace_ticket(ticket) {
            return Err(DeskError::TicketNotFound(path_id));
        }
        info!("Replaced ticket {}", path_id);
        Ok(())
    }

    pub fn delete(&self, id: EntityId) -> Result<()> {
        self.store
            .remove_ticket(id)
            .ok_or(DeskError::TicketNotFound(id))?;
        info!("Deleted ticket {}", id);
        Ok(())
    }

    pub fn complete(&self, id: EntityId, today: NaiveDate) -> Result<ServiceTicket> {
        let ticket = self
            .store
            .update_ticket(id, |t| t.complete(today))
            .ok_or(DeskError::TicketNotFound(id))?;
        info!("Completed ticket {} on {}", id, today);
        Ok(ticket)
    }

    /// Completed tickets, oldest completion first
    pub fn completed(&self) -> Result<Vec<ServiceTicket>> {
        let mut tickets = self.store.tickets_where(|t| !t.is_open());
        // Stable sort keeps id order among equal dates
        tickets.sort_by_key(|t| t.date_completed);
        debug!("{} completed tickets", tickets.len());
        non_empty(tickets, "completed tickets")
    }

    /// Open tickets flagged as emergencies
    pub fn emergencies(&self) -> Result<Vec<ServiceTicket>> {
        non_empty(
            self.store.tickets_where(|t| t.emergency && t.is_open()),
            "emergency tickets",
        )
    }

    pub fn unassigned(&self) -> Result<Vec<ServiceTicket>> {
        non_empty(
            self.store.tickets_where(|t| t.employee_id.is_none()),
            "unassigned tickets",
        )
    }

    /// Open tickets: emergencies first, then by employee id with unassigned
    /// tickets ahead of assigned ones.
    pub fn prioritized(&self) -> Result<Vec<ServiceTicket>> {
        let mut tickets = self.store.tickets_where(|t| t.is_open());
        tickets.sort_by_key(|t| (Reverse(t.emergency), t.employee_id));
        non_empty(tickets, "open tickets")
    }
}
