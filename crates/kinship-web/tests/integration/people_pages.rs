//! Integration tests for the people pages and JSON API.

use axum::http::StatusCode;
use kinship_client::StaticPeopleSource;
use kinship_core::{EnrichedPerson, Person, Sex};
use kinship_web::render::{ERROR_MESSAGE, NO_PEOPLE_MESSAGE};

use crate::common::{TestHarness, family};

#[tokio::test]
async fn test_people_page_renders_table_in_order() {
    let harness = TestHarness::with_people(family());
    let (status, body) = harness.get("/people").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-cy="peopleTable""#));
    assert_eq!(body.matches(r#"data-cy="person""#).count(), 4);

    let positions: Vec<usize> = [
        "Carolus Haverbeke</a>",
        "Maria van Brussel</a>",
        "Emma Haverbeke</a>",
        "Pieter Haverbeke</a>",
    ]
    .iter()
    .map(|needle| body.find(needle).expect("row rendered"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_people_page_links_resolved_parents() {
    let harness = TestHarness::with_people(family());
    let (_, body) = harness.get("/people").await;

    assert!(body.contains(
        r#"<td><a href="/people/maria-van-brussel-1835" class="has-text-danger">Maria van Brussel</a></td>"#
    ));
    assert!(body.contains(
        r#"<td><a href="/people/carolus-haverbeke-1832">Carolus Haverbeke</a></td>"#
    ));
}

#[tokio::test]
async fn test_people_page_unresolved_and_absent_parents() {
    let harness = TestHarness::with_people(family());
    let (_, body) = harness.get("/people").await;

    // Pieter: mother named but not in the dataset, father absent.
    assert!(body.contains("<td>Lieve de Vos</td><td>-</td>"));
    assert!(!body.contains("undefined"));
}

#[tokio::test]
async fn test_selected_slug_highlights_one_row() {
    let harness = TestHarness::with_people(family());
    let (status, body) = harness.get("/people/emma-haverbeke-1860").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("has-background-warning").count(), 1);
    let row = &body[body.find("has-background-warning").unwrap()..];
    let row = &row[..row.find("</tr>").unwrap()];
    assert!(row.contains(">Emma Haverbeke</a>"));
}

#[tokio::test]
async fn test_unknown_slug_still_renders_table() {
    let harness = TestHarness::with_people(family());
    let (status, body) = harness.get("/people/nobody-1999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-cy="peopleTable""#));
    assert!(!body.contains("has-background-warning"));
}

#[tokio::test]
async fn test_trailing_slash_is_people_index() {
    let harness = TestHarness::with_people(family());
    let (status, body) = harness.get("/people/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("has-background-warning"));
}

#[tokio::test]
async fn test_empty_dataset_shows_no_people_message() {
    let harness = TestHarness::with_people(vec![]);
    let (status, body) = harness.get("/people").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(NO_PEOPLE_MESSAGE));
    assert!(!body.contains(ERROR_MESSAGE));
    assert!(!body.contains("peopleTable"));
}

#[tokio::test]
async fn test_fetch_failure_shows_error_not_empty_message() {
    let harness = TestHarness::with_source(StaticPeopleSource::failing("connection reset"));
    let (status, body) = harness.get("/people").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-cy="peopleLoadingError""#));
    assert!(body.contains(ERROR_MESSAGE));
    assert!(!body.contains(NO_PEOPLE_MESSAGE));
    assert!(!body.contains("connection reset"));
}

#[tokio::test]
async fn test_each_page_request_fetches_once() {
    let harness = TestHarness::with_people(family());
    harness.get("/people").await;
    assert_eq!(harness.source.fetch_count(), 1);

    harness.get("/people/emma-haverbeke-1860").await;
    assert_eq!(harness.source.fetch_count(), 2);

    harness.get("/").await;
    assert_eq!(harness.source.fetch_count(), 2);
}

#[tokio::test]
async fn test_home_page_and_nav() {
    let harness = TestHarness::with_people(vec![]);
    let (status, body) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Home page"));
    assert!(body.contains(r#"<a href="/people" class="navbar-item">People</a>"#));
}

#[tokio::test]
async fn test_api_people_returns_resolved_records() {
    let harness = TestHarness::with_people(vec![
        Person::new("Alice", Sex::Female, 1990).with_mother("Beth"),
        Person::new("Beth", Sex::Female, 1960),
    ]);
    let (status, body) = harness.get("/api/people").await;

    assert_eq!(status, StatusCode::OK);
    let people: Vec<EnrichedPerson> = serde_json::from_str(&body).unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].mother.as_ref().unwrap().name, "Beth");
    assert_eq!(people[1].mother, None);
}

#[tokio::test]
async fn test_api_person_by_slug() {
    let harness = TestHarness::with_people(family());
    let (status, body) = harness.get("/api/people/emma-haverbeke-1860").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["name"], "Emma Haverbeke");
    assert_eq!(value["motherName"], "Maria van Brussel");
    assert_eq!(value["father"]["slug"], "carolus-haverbeke-1832");
}
