//! People page lifecycle.
//!
//! A page mount performs exactly one fetch:
//!
//! ```text
//! Idle ──mount──▶ Loading ──finish(Ok, non-empty)──▶ Populated
//!                    │     ──finish(Ok, empty)─────▶ Empty
//!                    └─────finish(Err)─────────────▶ Errored
//! ```
//!
//! Populated, Empty, and Errored are terminal. There is no retry.

use std::fmt;

use kinship_client::PeopleSource;
use kinship_core::{EnrichedPerson, Person, resolve_with_stats};

/// What the people page is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageState {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded with at least one record.
    Populated(Vec<EnrichedPerson>),
    /// Fetch succeeded with no records.
    Empty,
    /// Fetch failed; details are only logged.
    Errored,
}

impl PageState {
    /// Resolved records, empty unless Populated.
    pub fn people(&self) -> &[EnrichedPerson] {
        match self {
            Self::Populated(people) => people,
            _ => &[],
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Populated(people) => write!(f, "populated ({})", people.len()),
            Self::Empty => write!(f, "empty"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// One mount of the people page.
#[derive(Debug, Default)]
pub struct PeoplePage {
    state: PageState,
}

impl PeoplePage {
    /// A page that has not been mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts the page and runs its single fetch to completion.
    pub async fn load(source: &dyn PeopleSource) -> Self {
        let mut page = Self::new();
        page.mount();
        let outcome = source.fetch_people().await;
        page.finish(outcome);
        page
    }

    /// Current state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Consumes the page, returning its state.
    pub fn into_state(self) -> PageState {
        self.state
    }

    /// Idle → Loading. Returns `false` (and does nothing) if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.state != PageState::Idle {
            return false;
        }
        self.state = PageState::Loading;
        true
    }

    /// Settles a Loading page with the fetch outcome.
    ///
    /// Outcomes arriving in any other state are dropped and `false` is
    /// returned.
    pub fn finish(&mut self, outcome: kinship_client::Result<Vec<Person>>) -> bool {
        if self.state != PageState::Loading {
            tracing::debug!(state = %self.state, "Ignoring fetch completion outside loading");
            return false;
        }

        self.state = match outcome {
            Ok(records) if records.is_empty() => PageState::Empty,
            Ok(records) => {
                let (people, stats) = resolve_with_stats(&records);
                tracing::debug!(
                    records = stats.records,
                    links = stats.links_resolved(),
                    dangling = stats.dangling_refs.len(),
                    "Resolved parents"
                );
                PageState::Populated(people)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load people");
                PageState::Errored
            }
        };
        true
    }
}
