//! Employee handlers

use crate::error::Result;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use honeyrae_types::{Customer, Employee, EmployeeDetails, EntityId};

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses((status = 200, body = Vec<Employee>)),
    tag = "employees"
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.list())
}

/// Get an employee with its tickets
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, body = EmployeeDetails),
        (status = 404, description = "No such employee")
    ),
    tag = "employees"
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<EmployeeDetails>> {
    state.employees.get_details(id).map(Json)
}

/// Employees holding no open ticket
#[utoipa::path(
    get,
    path = "/employees/available",
    responses((status = 200, body = Vec<Employee>)),
    tag = "employees"
)]
pub async fn available(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.available())
}

/// Distinct customers on the employee's tickets
#[utoipa::path(
    get,
    path = "/employees/{id}/customers",
    params(("id" = i32, Path, description = "Employee id")),
    responses((status = 200, body = Vec<Customer>)),
    tag = "employees"
)]
pub async fn customers(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Json<Vec<Customer>> {
    Json(state.employees.customers_served(id))
}

/// Most completions during the previous calendar month
#[utoipa::path(
    get,
    path = "/employees/employee-of-the-month",
    responses(
        (status = 200, body = EmployeeDetails),
        (status = 404, description = "No completions last month")
    ),
    tag = "employees"
)]
pub async fn employee_of_the_month(
    State(state): State<AppState>,
) -> Result<Json<EmployeeDetails>> {
    state
        .employees
        .employee_of_the_month(state.clock.today())
        .map(Json)
}
