//! # kinship-web
//!
//! Server-rendered people browser.
//!
//! This crate provides:
//! - [`state`]: the per-mount page state machine (fetch once, resolve, settle)
//! - [`render`]: HTML for the home, people, and not-found pages
//! - [`routes`]: the axum router and handlers, including a JSON API
//! - [`server`]: binding and serving with graceful shutdown

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::{AppState, router};
pub use server::{Server, ServerConfig};
pub use state::{PageState, PeoplePage};
