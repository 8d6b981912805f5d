//! Service ticket types

use crate::{Customer, Employee, EntityId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A service ticket
///
/// A ticket with no `date_completed` is open. A ticket with no `employee_id`
/// is unassigned. Foreign keys are not checked against the other tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    #[schema(value_type = i32)]
    pub id: EntityId,
    #[schema(value_type = i32)]
    pub customer_id: EntityId,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub employee_id: Option<EntityId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_option")]
    pub date_completed: Option<NaiveDateTime>,
}

impl ServiceTicket {
    /// True while no completion date is set
    pub fn is_open(&self) -> bool {
        self.date_completed.is_none()
    }

    pub fn is_assigned_to(&self, employee_id: EntityId) -> bool {
        self.employee_id == Some(employee_id)
    }

    /// Calendar date the ticket was completed on
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.date_completed.map(|d| d.date())
    }

    /// Completed on a date in `[start, end)`
    pub fn completed_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.completion_date()
            .map(|d| d >= start && d < end)
            .unwrap_or(false)
    }

    /// Completed on `since` or any later date
    pub fn completed_since(&self, since: NaiveDate) -> bool {
        self.completion_date().map(|d| d >= since).unwrap_or(false)
    }

    /// Mark complete as of midnight on `today`
    pub fn complete(&mut self, today: NaiveDate) {
        self.date_completed = Some(NaiveDateTime::from(today));
    }
}

/// Request body for creating a ticket; the id is assigned by the store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceTicket {
    #[schema(value_type = i32)]
    pub customer_id: EntityId,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub employee_id: Option<EntityId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_option")]
    pub date_completed: Option<NaiveDateTime>,
}

impl NewServiceTicket {
    pub fn into_ticket(self, id: EntityId) -> ServiceTicket {
        ServiceTicket {
            id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            description: self.description,
            emergency: self.emergency,
            date_completed: self.date_completed,
        }
    }
}

/// A ticket joined with its customer and employee, when they exist
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDetails {
    #[serde(flatten)]
    pub ticket: ServiceTicket,
    pub customer: Option<Customer>,
    pub employee: Option<Employee>,
}
