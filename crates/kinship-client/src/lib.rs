//! # kinship-client
//!
//! Record sources for Kinship.
//!
//! A [`PeopleSource`] performs one read of the people dataset and returns
//! the flat records, unresolved. Provided sources:
//! - [`HttpPeopleSource`]: a single GET of static JSON
//! - [`FilePeopleSource`]: the same JSON from a local file
//! - [`StaticPeopleSource`]: in-memory records, or a source that always fails

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{
    DEFAULT_PEOPLE_URL, FilePeopleSource, HttpPeopleSource, PeopleSource, StaticPeopleSource,
};
