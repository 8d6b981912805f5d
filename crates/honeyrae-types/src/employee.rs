//! Employee types

use crate::{EntityId, ServiceTicket};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An employee who can be assigned service tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(value_type = i32)]
    pub id: EntityId,
    pub name: String,
    pub speciality: String,
}

impl Employee {
    pub fn new(id: EntityId, name: impl Into<String>, speciality: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            speciality: speciality.into(),
        }
    }
}

/// An employee joined with the tickets assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    #[serde(flatten)]
    pub employee: Employee,
    pub service_tickets: Vec<ServiceTicket>,
}
