//! Honey Rae's Repairs service desk
//!
//! In-memory REST service for customers, employees and service tickets.
//! All state is lost when the process exits.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::ServerConfig;
use handlers::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use services::{Clock, CustomerDirectory, EmployeeDirectory, SystemClock, TicketService};
use storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub tickets: Arc<TicketService>,
    pub employees: Arc<EmployeeDirectory>,
    pub customers: Arc<CustomerDirectory>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tickets: Arc::new(TicketService::new(store.clone())),
            employees: Arc::new(EmployeeDirectory::new(store.clone())),
            customers: Arc::new(CustomerDirectory::new(store.clone())),
            store,
            clock,
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Honey Rae service desk v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, seed_data={}",
        config.bind_address, config.seed_data
    );

    let store = if config.seed_data {
        MemoryStore::seeded()
    } else {
        info!("Starting with an empty store");
        MemoryStore::new()
    };
    let state = AppState::new(Arc::new(store), Arc::new(SystemClock));

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", config.bind_address);
    info!("API docs at {}", SWAGGER_UI_PATH);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .route("/health", get(handlers::health))
        .merge(api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Static segments such as /completed take priority over /:id
fn api_routes() -> Router<AppState> {
    use handlers::{customers, employees, service_tickets};

    Router::new()
        .route(
            "/servicetickets",
            get(service_tickets::list).post(service_tickets::create),
        )
        .route("/servicetickets/completed", get(service_tickets::completed))
        .route(
            "/servicetickets/emergencies",
            get(service_tickets::emergencies),
        )
        .route(
            "/servicetickets/unassigned",
            get(service_tickets::unassigned),
        )
        .route(
            "/servicetickets/prioritized",
            get(service_tickets::prioritized),
        )
        .route(
            "/servicetickets/:id",
            get(service_tickets::get)
                .put(service_tickets::replace)
                .delete(service_tickets::delete),
        )
        .route(
            "/servicetickets/:id/complete",
            post(service_tickets::complete),
        )
        .route("/employees", get(employees::list))
        .route("/employees/available", get(employees::available))
        .route(
            "/employees/employee-of-the-month",
            get(employees::employee_of_the_month),
        )
        .route("/employees/:id", get(employees::get))
        .route("/employees/:id/customers", get(employees::customers))
        .route("/customers", get(customers::list))
        .route("/customers/inactive", get(customers::inactive))
        .route("/customers/:id", get(customers::get))
}
