//! Service ticket handlers

use crate::error::Result;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use honeyrae_types::{EntityId, NewServiceTicket, ServiceTicket, ServiceTicketDetails};

/// List all service tickets
#[utoipa::path(
    get,
    path = "/servicetickets",
    responses((status = 200, description = "All tickets ordered by id", body = Vec<ServiceTicket>)),
    tag = "servicetickets"
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<ServiceTicket>> {
    Json(state.tickets.list())
}

/// Get a ticket with its customer and employee
#[utoipa::path(
    get,
    path = "/servicetickets/{id}",
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, body = ServiceTicketDetails),
        (status = 404, description = "No such ticket")
    ),
    tag = "servicetickets"
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<ServiceTicketDetails>> {
    state.tickets.get_details(id).map(Json)
}

/// Completed tickets, oldest completion first
#[utoipa::path(
    get,
    path = "/servicetickets/completed",
    responses(
        (status = 200, body = Vec<ServiceTicket>),
        (status = 404, description = "No completed tickets")
    ),
    tag = "servicetickets"
)]
pub async fn completed(State(state): State<AppState>) -> Result<Json<Vec<ServiceTicket>>> {
    state.tickets.completed().map(Json)
}

/// Open emergency tickets
#[utoipa::path(
    get,
    path = "/servicetickets/emergencies",
    responses(
        (status = 200, body = Vec<ServiceTicket>),
        (status = 404, description = "No open emergencies")
    ),
    tag = "servicetickets"
)]
pub async fn emergencies(State(state): State<AppState>) -> Result<Json<Vec<ServiceTicket>>> {
    state.tickets.emergencies().map(Json)
}

/// Tickets with no employee
#[utoipa::path(
    get,
    path = "/servicetickets/unassigned",
    responses(
        (status = 200, body = Vec<ServiceTicket>),
        (status = 404, description = "Every ticket is assigned")
    ),
    tag = "servicetickets"
)]
pub async fn unassigned(State(state): State<AppState>) -> Result<Json<Vec<ServiceTicket>>> {
    state.tickets.unassigned().map(Json)
}

/// Open tickets, emergencies first, then by employee id
#[utoipa::path(
    get,
    path = "/servicetickets/prioritized",
    responses(
        (status = 200, body = Vec<ServiceTicket>),
        (status = 404, description = "No open tickets")
    ),
    tag = "servicetickets"
)]
pub async fn prioritized(State(state): State<AppState>) -> Result<Json<Vec<ServiceTicket>>> {
    state.tickets.prioritized().map(Json)
}

/// Create a ticket; the id is assigned by the server
#[utoipa::path(
    post,
    path = "/servicetickets",
    request_body = NewServiceTicket,
    responses(
        (status = 201, body = ServiceTicket),
        (status = 400, description = "Malformed body")
    ),
    tag = "servicetickets"
)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewServiceTicket>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(new_ticket) = payload?;
    let ticket = state.tickets.create(new_ticket);
    let location = format!("/servicetickets/{}", ticket.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(ticket)))
}

/// Replace a ticket wholesale
#[utoipa::path(
    put,
    path = "/servicetickets/{id}",
    params(("id" = i32, Path, description = "Ticket id; must equal the body id")),
    request_body = ServiceTicket,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Id mismatch or malformed body"),
        (status = 404, description = "No such ticket")
    ),
    tag = "servicetickets"
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: std::result::Result<Json<ServiceTicket>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(ticket) = payload?;
    state.tickets.replace(id, ticket)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/servicetickets/{id}",
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No such ticket")
    ),
    tag = "servicetickets"
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode> {
    state.tickets.delete(id)?;
    Ok(StatusCode::OK)
}

/// Mark a ticket completed today
#[utoipa::path(
    post,
    path = "/servicetickets/{id}/complete",
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Completed"),
        (status = 404, description = "No such ticket")
    ),
    tag = "servicetickets"
)]
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode> {
    state.tickets.complete(id, state.clock.today())?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{request, seeded_app, today};
    use axum::http::{header, Method, StatusCode};
    use serde_json::{json, Value};

    fn ids(body: &Value) -> Vec<i64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_get_missing_ticket() {
        let app = seeded_app();
        for id in [0, 6, 42, -1] {
            let (status, _, _) = request(&app, Method::GET, &format!("/servicetickets/{}", id), None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_get_ticket_embeds_relations() {
        let app = seeded_app();
        let (status, _, body) = request(&app, Method::GET, "/servicetickets/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "Non-functioning monitor");
        assert_eq!(body["customer"]["id"], 101);
        assert_eq!(body["employee"]["name"], "Steve Perry");

        let (_, _, body) = request(&app, Method::GET, "/servicetickets/3", None).await;
        assert_eq!(body["employee"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let app = seeded_app();
        let new_ticket = json!({
            "customerId": 102,
            "description": "Squeaky gate",
            "emergency": true
        });

        let (status, headers, body) =
            request(&app, Method::POST, "/servicetickets", Some(new_ticket)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 6);
        assert_eq!(headers[header::LOCATION], "/servicetickets/6");

        let (status, _, body) = request(&app, Method::GET, "/servicetickets/6", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customer"]["name"], "Genghis Khan");
        assert_eq!(body["dateCompleted"], Value::Null);
    }

    #[tokio::test]
    async fn test_replace_id_mismatch() {
        let app = seeded_app();
        let body = json!({ "id": 2, "customerId": 101, "employeeId": 200 });

        for path in ["/servicetickets/1", "/servicetickets/77"] {
            let (status, _, _) = request(&app, Method::PUT, path, Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_replace_mismatch_without_customer_is_bad_request() {
        let app = seeded_app();
        for path in ["/servicetickets/9", "/servicetickets/2"] {
            let (status, _, body) =
                request(&app, Method::PUT, path, Some(json!({ "id": 2 }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {}", path);
            assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
        }

        let (status, _, body) =
            request(&app, Method::POST, "/servicetickets", Some(json!({ "emergency": true }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_replace_accepts_utc_timestamp() {
        let app = seeded_app();
        let body = json!({
            "id": 2,
            "customerId": 101,
            "employeeId": 201,
            "description": "Exposed wires",
            "emergency": true,
            "dateCompleted": "2026-09-14T00:00:00.000Z"
        });

        let (status, _, _) = request(&app, Method::PUT, "/servicetickets/2", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, _, fetched) = request(&app, Method::GET, "/servicetickets/2", None).await;
        assert_eq!(fetched["dateCompleted"], "2026-09-14T00:00:00");

        let created = json!({ "customerId": 100, "dateCompleted": "2026-10-01T08:30:00Z" });
        let (status, _, body) =
            request(&app, Method::POST, "/servicetickets", Some(created)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["dateCompleted"], "2026-10-01T08:30:00");
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let app = seeded_app();
        let body = json!({
            "id": 3,
            "customerId": 102,
            "employeeId": 201,
            "description": "Busted mailbox",
            "emergency": false,
            "dateCompleted": null
        });

        let (status, _, _) = request(&app, Method::PUT, "/servicetickets/3", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let (_, _, fetched) = request(&app, Method::GET, "/servicetickets/3", None).await;
        assert_eq!(fetched["employeeId"], 201);

        let missing = json!({ "id": 50, "customerId": 100 });
        let (status, _, _) = request(&app, Method::PUT, "/servicetickets/50", Some(missing)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = request(&app, Method::DELETE, "/servicetickets/3", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _, _) = request(&app, Method::DELETE, "/servicetickets/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_complete_then_listed_as_completed() {
        let app = seeded_app();

        let (status, _, _) = request(&app, Method::POST, "/servicetickets/4/complete", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, _, ticket) = request(&app, Method::GET, "/servicetickets/4", None).await;
        let expected = format!("{}T00:00:00", today().format("%Y-%m-%d"));
        assert_eq!(ticket["dateCompleted"], expected.as_str());

        let (status, _, body) = request(&app, Method::GET, "/servicetickets/completed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 4]);

        let (status, _, _) = request(&app, Method::POST, "/servicetickets/99/complete", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_derived_lists() {
        let app = seeded_app();

        let (_, _, body) = request(&app, Method::GET, "/servicetickets/emergencies", None).await;
        assert_eq!(ids(&body), vec![2, 5]);

        let (_, _, body) = request(&app, Method::GET, "/servicetickets/unassigned", None).await;
        assert_eq!(ids(&body), vec![3, 5]);

        // Emergencies first; unassigned ahead of assigned within a group
        let (_, _, body) = request(&app, Method::GET, "/servicetickets/prioritized", None).await;
        assert_eq!(ids(&body), vec![5, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_empty_derived_lists_are_not_found() {
        let app = seeded_app();
        for id in [2, 5] {
            let (status, _, _) =
                request(&app, Method::POST, &format!("/servicetickets/{}/complete", id), None).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, _, body) = request(&app, Method::GET, "/servicetickets/emergencies", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No emergency tickets");
    }
}
