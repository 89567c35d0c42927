//! HTTP routes.
//!
//! | Path                 | Response                                   |
//! |----------------------|--------------------------------------------|
//! | `/`                  | home page                                  |
//! | `/home`              | 308 redirect to `/`                        |
//! | `/people`            | people table                               |
//! | `/people/{slug}`     | people table with the row for `slug` lit   |
//! | `/api/people`        | resolved records as JSON                   |
//! | `/api/people/{slug}` | one resolved record as JSON                |
//! | `/health`            | `OK`                                       |
//! | anything else        | 404 not-found page                         |
//!
//! Every people request is a fresh page mount with its own fetch.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use kinship_client::PeopleSource;
use kinship_core::{EnrichedPerson, find_by_slug, resolve};

use crate::render;
use crate::state::PeoplePage;
use crate::{Error, Result};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn PeopleSource>,
}

impl AppState {
    /// Creates handler state around a record source.
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        Self { source }
    }

    /// The record source.
    pub fn source(&self) -> &dyn PeopleSource {
        self.source.as_ref()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/home", get(legacy_home))
        .route("/people", get(people))
        .route("/people/", get(people))
        .route("/people/{slug}", get(person))
        .route("/api/people", get(api_people))
        .route("/api/people/{slug}", get(api_person))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

async fn home() -> Html<String> {
    Html(render::home_page())
}

async fn legacy_home() -> Redirect {
    Redirect::permanent("/")
}

async fn people(State(state): State<AppState>) -> Html<String> {
    people_response(&state, None).await
}

async fn person(State(state): State<AppState>, Path(slug): Path<String>) -> Html<String> {
    people_response(&state, Some(slug.as_str())).await
}

async fn people_response(state: &AppState, selected: Option<&str>) -> Html<String> {
    let page = PeoplePage::load(state.source()).await;
    tracing::debug!(state = %page.state(), selected = ?selected, "Rendering people page");
    Html(render::people_page(page.state(), selected))
}

async fn fetch_resolved(state: &AppState) -> Result<Vec<EnrichedPerson>> {
    let records = state.source().fetch_people().await?;
    Ok(resolve(&records))
}

async fn api_people(State(state): State<AppState>) -> Result<Json<Vec<EnrichedPerson>>> {
    Ok(Json(fetch_resolved(&state).await?))
}

async fn api_person(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EnrichedPerson>> {
    let people = fetch_resolved(&state).await?;
    find_by_slug(&people, &slug)
        .cloned()
        .map(Json)
        .ok_or(Error::PersonNotFound(slug))
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render::not_found_page()))
}
