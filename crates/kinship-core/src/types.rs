//! Person records, before and after parent resolution.
//!
//! The wire format is the JSON shape served by the people dataset:
//!
//! ```json
//! {
//!   "name": "Emma de Milliano",
//!   "sex": "f",
//!   "born": 1876,
//!   "died": 1956,
//!   "fatherName": "Petrus de Milliano",
//!   "motherName": "Sophia van Damme",
//!   "slug": "emma-de-milliano-1876"
//! }
//! ```

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// Sex
// ============================================================================

/// Two-valued sex field. Drives the link colour in the people table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"m"`.
    #[serde(rename = "m", alias = "male")]
    Male,
    /// Serialized as `"f"`.
    #[serde(rename = "f", alias = "female")]
    Female,
}

impl Sex {
    /// The short code used on the wire and in the table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(Error::InvalidSex(s.to_string())),
        }
    }
}

// ============================================================================
// Person
// ============================================================================

/// One person's flat record as received from the source.
///
/// `mother_name` and `father_name` refer to another record's `name`;
/// `slug` is only used for addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Display name, also the join key for parent references
    pub name: String,
    /// Sex of the person
    pub sex: Sex,
    /// Year of birth
    pub born: i32,
    /// Year of death, absent for the living or unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub died: Option<i32>,
    /// Name of the mother record, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    /// Name of the father record, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    /// URL-safe identifier
    pub slug: String,
}

impl Person {
    /// Creates a record with a slug derived from name and birth year.
    pub fn new(name: impl Into<String>, sex: Sex, born: i32) -> Self {
        let name = name.into();
        let slug = slugify(&name, born);
        Self {
            name,
            sex,
            born,
            died: None,
            mother_name: None,
            father_name: None,
            slug,
        }
    }

    /// Sets the year of death.
    pub fn with_died(mut self, died: i32) -> Self {
        self.died = Some(died);
        self
    }

    /// Sets the mother reference.
    pub fn with_mother(mut self, name: impl Into<String>) -> Self {
        self.mother_name = Some(name.into());
        self
    }

    /// Sets the father reference.
    pub fn with_father(mut self, name: impl Into<String>) -> Self {
        self.father_name = Some(name.into());
        self
    }

    /// Overrides the derived slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Returns `true` for female records.
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}

/// Builds a slug in the dataset's style: kebab-case name plus birth year.
///
/// ```
/// use kinship_core::types::slugify;
///
/// assert_eq!(slugify("Emma de Milliano", 1876), "emma-de-milliano-1876");
/// assert_eq!(slugify("  Jan  Frans ", 1900), "jan-frans-1900");
/// ```
pub fn slugify(name: &str, born: i32) -> String {
    let base = name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if base.is_empty() {
        born.to_string()
    } else {
        format!("{base}-{born}")
    }
}

// ============================================================================
// EnrichedPerson
// ============================================================================

/// A [`Person`] with its mother and father resolved to full records.
///
/// Serializes as the flat person object plus optional `mother` and
/// `father` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPerson {
    /// The record as received
    #[serde(flatten)]
    pub person: Person,
    /// Record whose name matches `mother_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<Person>,
    /// Record whose name matches `father_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<Person>,
}

impl EnrichedPerson {
    /// Wraps a record with no resolved parents.
    pub fn unresolved(person: Person) -> Self {
        Self {
            person,
            mother: None,
            father: None,
        }
    }
}

impl Deref for EnrichedPerson {
    type Target = Person;

    fn deref(&self) -> &Self::Target {
        &self.person
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Male.to_string(), "m");
        assert_eq!(Sex::Female.to_string(), "f");
    }

    #[test]
    fn test_sex_from_str_accepts_long_and_short_forms() {
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_person_deserialize_full_record() {
        let json = r#"{
            "name": "Emma de Milliano",
            "sex": "f",
            "born": 1876,
            "died": 1956,
            "fatherName": "Petrus de Milliano",
            "motherName": "Sophia van Damme",
            "slug": "emma-de-milliano-1876"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Emma de Milliano");
        assert_eq!(person.sex, Sex::Female);
        assert_eq!(person.died, Some(1956));
        assert_eq!(person.mother_name.as_deref(), Some("Sophia van Damme"));
        assert_eq!(person.father_name.as_deref(), Some("Petrus de Milliano"));
    }

    #[test]
    fn test_person_deserialize_null_and_missing_optionals() {
        let json = r#"{
            "name": "Carolus Haverbeke",
            "sex": "male",
            "born": 1832,
            "fatherName": null,
            "slug": "carolus-haverbeke-1832"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.sex, Sex::Male);
        assert_eq!(person.died, None);
        assert_eq!(person.mother_name, None);
        assert_eq!(person.father_name, None);
    }

    #[test]
    fn test_person_serialize_uses_camel_case() {
        let person = Person::new("Alice", Sex::Female, 1990).with_mother("Beth");
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["motherName"], "Beth");
        assert!(value.get("fatherName").is_none());
        assert_eq!(value["sex"], "f");
    }

    #[test]
    fn test_person_builder_derives_slug() {
        let person = Person::new("Cal", Sex::Male, 2000);
        assert_eq!(person.slug, "cal-2000");
        assert!(!person.is_female());
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Anne-Marie O'Neil", 1950), "anne-marie-o-neil-1950");
        assert_eq!(slugify("", 1950), "1950");
    }

    #[test]
    fn test_enriched_person_flattens_on_the_wire() {
        let beth = Person::new("Beth", Sex::Female, 1960);
        let alice = EnrichedPerson {
            person: Person::new("Alice", Sex::Female, 1990).with_mother("Beth"),
            mother: Some(beth.clone()),
            father: None,
        };
        let value = serde_json::to_value(&alice).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["mother"]["name"], "Beth");
        assert!(value.get("father").is_none());

        let back: EnrichedPerson = serde_json::from_value(value).unwrap();
        assert_eq!(back, alice);
    }

    #[test]
    fn test_enriched_person_derefs_to_person() {
        let enriched = EnrichedPerson::unresolved(Person::new("Cal", Sex::Male, 2000));
        assert_eq!(enriched.name, "Cal");
        assert_eq!(enriched.slug, "cal-2000");
    }
}
