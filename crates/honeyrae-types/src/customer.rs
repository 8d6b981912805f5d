//! Customer types

use crate::{EntityId, ServiceTicket};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer; fixed seed data, never created over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(value_type = i32)]
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(id: EntityId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A customer joined with the tickets that reference it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(flatten)]
    pub customer: Customer,
    pub service_tickets: Vec<ServiceTicket>,
}
