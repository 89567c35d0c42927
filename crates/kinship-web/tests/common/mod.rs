//! Common test utilities for kinship-web integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use kinship_client::StaticPeopleSource;
use kinship_core::{Person, Sex};
use kinship_web::{AppState, router};
use tower::ServiceExt;

/// Test harness holding the router and the source behind it.
pub struct TestHarness {
    /// Source shared with the router, for fetch counting
    pub source: Arc<StaticPeopleSource>,
    /// Application under test
    pub app: Router,
}

impl TestHarness {
    /// Builds a harness around `source`.
    pub fn with_source(source: StaticPeopleSource) -> Self {
        let source = Arc::new(source);
        let app = router(AppState::new(source.clone()));
        Self { source, app }
    }

    /// Harness serving `people`.
    pub fn with_people(people: Vec<Person>) -> Self {
        Self::with_source(StaticPeopleSource::new(people))
    }

    /// Issues a GET and returns status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let resp = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

/// Three generations with one unresolved and one absent parent.
pub fn family() -> Vec<Person> {
    vec![
        Person::new("Carolus Haverbeke", Sex::Male, 1832).with_died(1905),
        Person::new("Maria van Brussel", Sex::Female, 1835).with_died(1912),
        Person::new("Emma Haverbeke", Sex::Female, 1860)
            .with_died(1930)
            .with_mother("Maria van Brussel")
            .with_father("Carolus Haverbeke"),
        Person::new("Pieter Haverbeke", Sex::Male, 1862).with_mother("Lieve de Vos"),
    ]
}
