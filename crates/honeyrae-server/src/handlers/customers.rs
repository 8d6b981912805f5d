//! Customer handlers

use crate::error::Result;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use honeyrae_types::{Customer, CustomerDetails, EntityId};

#[utoipa::path(
    get,
    path = "/customers",
    responses((status = 200, body = Vec<Customer>)),
    tag = "customers"
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.customers.list())
}

/// Get a customer with its tickets
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, body = CustomerDetails),
        (status = 404, description = "No such customer")
    ),
    tag = "customers"
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CustomerDetails>> {
    state.customers.get_details(id).map(Json)
}

/// Customers with no completion in the trailing 365 days
#[utoipa::path(
    get,
    path = "/customers/inactive",
    responses(
        (status = 200, body = Vec<Customer>),
        (status = 404, description = "Every customer is active")
    ),
    tag = "customers"
)]
pub async fn inactive(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    state.customers.inactive(state.clock.today()).map(Json)
}
