//! Name-based parent resolution.
//!
//! Turns the `mother_name`/`father_name` strings of each [`Person`] into
//! full records by matching against `name`. Slugs never take part in
//! matching.
//!
//! Resolution runs in two phases:
//!
//! 1. Build a [`ParentIndex`] over all names, keeping the first record for
//!    each name so duplicates behave like a front-to-back linear scan.
//! 2. Look up both parents of every record, in input order.
//!
//! References that match nothing are recorded in
//! [`ResolutionStats::dangling_refs`] and left unresolved. Nothing here can
//! fail.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::types::{EnrichedPerson, Person};

// ============================================================================
// ParentIndex
// ============================================================================

/// Lookup table from `name` to the first record carrying that name.
#[derive(Debug)]
pub struct ParentIndex<'a> {
    by_name: HashMap<&'a str, &'a Person>,
    duplicates: Vec<String>,
}

impl<'a> ParentIndex<'a> {
    /// Indexes `records` by name.
    pub fn build(records: &'a [Person]) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for person in records {
            match by_name.entry(person.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(person);
                }
                Entry::Occupied(_) => {
                    if !duplicates.contains(&person.name) {
                        duplicates.push(person.name.clone());
                    }
                }
            }
        }

        Self {
            by_name,
            duplicates,
        }
    }

    /// First record named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&'a Person> {
        self.by_name.get(name).copied()
    }

    /// Names carried by more than one record, in order of first repeat.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

// ============================================================================
// ResolutionStats
// ============================================================================

/// Summary of a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Records processed.
    pub records: usize,
    /// Mother references that matched a record.
    pub mothers_resolved: usize,
    /// Father references that matched a record.
    pub fathers_resolved: usize,
    /// References naming a person absent from the dataset,
    /// formatted as `"<child> -> mother '<name>'"`.
    pub dangling_refs: Vec<String>,
    /// Names shared by more than one record; first match wins for these.
    pub duplicate_names: Vec<String>,
}

impl ResolutionStats {
    /// Total parent links resolved.
    pub fn links_resolved(&self) -> usize {
        self.mothers_resolved + self.fathers_resolved
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves mother and father references for every record.
///
/// Output has the same length and order as `records`. Each output entry
/// carries a copy of the first record whose `name` equals the reference,
/// or `None` when the reference is absent or unmatched.
///
/// ```
/// use kinship_core::{Person, Sex, resolve};
///
/// let people = vec![
///     Person::new("Alice", Sex::Female, 1990).with_mother("Beth"),
///     Person::new("Beth", Sex::Female, 1960),
/// ];
/// let enriched = resolve(&people);
/// assert_eq!(enriched[0].mother.as_ref(), Some(&people[1]));
/// assert!(enriched[1].mother.is_none());
/// ```
pub fn resolve(records: &[Person]) -> Vec<EnrichedPerson> {
    resolve_with_stats(records).0
}

/// Like [`resolve`], also reporting what matched and what did not.
pub fn resolve_with_stats(records: &[Person]) -> (Vec<EnrichedPerson>, ResolutionStats) {
    let index = ParentIndex::build(records);
    let mut stats = ResolutionStats {
        records: records.len(),
        duplicate_names: index.duplicates().to_vec(),
        ..Default::default()
    };

    for name in &stats.duplicate_names {
        log::debug!("Duplicate person name '{name}'; parent links use the first record");
    }

    let enriched = records
        .iter()
        .map(|person| {
            let mother = resolve_parent(
                &index,
                person,
                "mother",
                person.mother_name.as_deref(),
                &mut stats,
            );
            let father = resolve_parent(
                &index,
                person,
                "father",
                person.father_name.as_deref(),
                &mut stats,
            );
            if mother.is_some() {
                stats.mothers_resolved += 1;
            }
            if father.is_some() {
                stats.fathers_resolved += 1;
            }
            EnrichedPerson {
                mother,
                father,
                ..EnrichedPerson::unresolved(person.clone())
            }
        })
        .collect();

    log::debug!(
        "Resolved {} parent links across {} records ({} dangling)",
        stats.links_resolved(),
        stats.records,
        stats.dangling_refs.len()
    );

    (enriched, stats)
}

fn resolve_parent(
    index: &ParentIndex<'_>,
    child: &Person,
    role: &str,
    name: Option<&str>,
    stats: &mut ResolutionStats,
) -> Option<Person> {
    let name = name?;
    match index.get(name) {
        Some(parent) => Some(parent.clone()),
        None => {
            log::debug!("No record for {role} '{name}' of '{}'", child.name);
            stats
                .dangling_refs
                .push(format!("{} -> {role} '{name}'", child.name));
            None
        }
    }
}

/// Finds a resolved record by slug.
pub fn find_by_slug<'a>(people: &'a [EnrichedPerson], slug: &str) -> Option<&'a EnrichedPerson> {
    people.iter().find(|p| p.slug == slug)
}
