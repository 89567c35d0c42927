//! # kinship-cli
//!
//! Command-line interface for Kinship.
//!
//! - `kinship serve`: run the people browser over HTTP
//! - `kinship list`: print the resolved people table to the terminal
//! - `kinship config ...`: inspect and edit the config file

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use config::KinshipConfig;
pub use error::{Error, Result};
