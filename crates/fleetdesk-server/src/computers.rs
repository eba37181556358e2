//! `/api/computers` handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use fleetdesk_core::schema::{validate_insert, validate_update};
use fleetdesk_core::{Computer, Stats, Status};

use crate::error::ApiError;
use crate::routes::AppState;

/// Query string of `GET /api/computers`. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub ram: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Path ids that do not parse can never match a stored record.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| {
        debug!(id = raw, "Unparsable computer id");
        ApiError::computer_not_found()
    })
}

/// `GET /api/computers` — `search` wins over `status`; `ram` narrows either.
#[instrument(skip_all)]
pub async fn list_computers(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Computer>>, ApiError> {
    let Query(params) = params?;

    let mut computers = if let Some(query) = non_empty(params.search) {
        state.store.search(&query).await
    } else if let Some(status) = non_empty(params.status) {
        match status.parse::<Status>() {
            Ok(status) => state.store.filter_by_status(status).await,
            Err(e) => {
                debug!(error = %e, "Status filter matches nothing");
                Vec::new()
            }
        }
    } else {
        state.store.get_all().await
    };

    if let Some(ram) = non_empty(params.ram) {
        let ram = ram.to_lowercase();
        computers.retain(|c| c.ram.to_lowercase().contains(&ram));
    }

    Ok(Json(computers))
}

/// `GET /api/computers/{id}`
#[instrument(skip_all, fields(id = %id))]
pub async fn get_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Computer>, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(ApiError::computer_not_found)
}

/// `POST /api/computers`
#[instrument(skip_all)]
pub async fn create_computer(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Computer>), ApiError> {
    let Json(body) = body?;
    let new = validate_insert(&body).inspect_err(|e| debug!(error = %e, "Rejected create"))?;
    let computer = state.store.create(new).await;
    Ok((StatusCode::CREATED, Json(computer)))
}

/// `PATCH /api/computers/{id}` — the body is validated before the id is
/// looked up, so a bad body on a missing id is still a 400.
#[instrument(skip_all, fields(id = %id))]
pub async fn update_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Computer>, ApiError> {
    let Json(body) = body?;
    let update = validate_update(&body).inspect_err(|e| debug!(error = %e, "Rejected update"))?;
    let id = parse_id(&id)?;
    state
        .store
        .update(id, update)
        .await
        .map(Json)
        .ok_or_else(ApiError::computer_not_found)
}

/// `DELETE /api/computers/{id}`
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_computer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::computer_not_found())
    }
}

/// `GET /api/computers/stats/overview`
pub async fn stats_overview(State(state): State<AppState>) -> Json<Stats> {
    Json(state.store.stats().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_plain_unsigned_integers() {
        assert_eq!(parse_id("12").unwrap(), 12);
        for raw in ["abc", "12abc", "-1", "", "1.5"] {
            assert!(
                matches!(parse_id(raw), Err(ApiError::NotFound(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn empty_query_values_are_absent() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("ssd".into())), Some("ssd".into()));
        assert_eq!(non_empty(None), None);
    }
}
