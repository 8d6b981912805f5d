//! OpenAPI document served at `/api-docs/openapi.json` and browsed at `/swagger-ui`

use super::{customers, employees, health, service_tickets};
use crate::storage::StoreCounts;
use honeyrae_types::{
    Customer, CustomerDetails, Employee, EmployeeDetails, NewServiceTicket, ServiceTicket,
    ServiceTicketDetails,
};
use utoipa::OpenApi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Honey Rae's Repairs API",
        description = "Customers, employees and service tickets"
    ),
    paths(
        health::health,
        service_tickets::list,
        service_tickets::get,
        service_tickets::completed,
        service_tickets::emergencies,
        service_tickets::unassigned,
        service_tickets::prioritized,
        service_tickets::create,
        service_tickets::replace,
        service_tickets::delete,
        service_tickets::complete,
        employees::list,
        employees::get,
        employees::available,
        employees::customers,
        employees::employee_of_the_month,
        customers::list,
        customers::get,
        customers::inactive,
    ),
    components(schemas(
        Customer,
        CustomerDetails,
        Employee,
        EmployeeDetails,
        ServiceTicket,
        NewServiceTicket,
        ServiceTicketDetails,
        health::HealthResponse,
        StoreCounts,
    )),
    tags(
        (name = "servicetickets", description = "Ticket CRUD and derived queries"),
        (name = "employees", description = "Employees and performance"),
        (name = "customers", description = "Customers"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
