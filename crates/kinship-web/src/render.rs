//! HTML rendering.
//!
//! Pages are plain strings built from small helpers. Every piece of record
//! data goes through [`escape`]. The `data-cy` attributes are stable hooks
//! for end-to-end tests and scrapers.

use kinship_core::{EnrichedPerson, Person};

use crate::state::PageState;

/// Shown when the fetch failed.
pub const ERROR_MESSAGE: &str = "Something went wrong";

/// Shown when the fetch returned no records.
pub const NO_PEOPLE_MESSAGE: &str = "There are no people on the server";

/// Placeholder for a parent with no stored name.
pub const MISSING_PARENT: &str = "-";

/// Top-level section, used to highlight the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Landing page
    Home,
    /// People table
    People,
    /// Anything else
    Other,
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active {
        "navbar-item has-background-grey-lighter"
    } else {
        "navbar-item"
    };
    format!(r#"<a href="{href}" class="{class}">{label}</a>"#)
}

/// Wraps page content in the document shell and nav bar.
pub fn layout(title: &str, section: Section, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<div data-cy="app">
<nav data-cy="nav" class="navbar is-fixed-top has-shadow" role="navigation" aria-label="main navigation">
<div class="container"><div class="navbar-brand">
{home}
{people}
</div></div>
</nav>
<main class="section"><div class="container">
{content}
</div></main>
</div>
</body>
</html>
"#,
        title = escape(title),
        home = nav_link("/", "Home", section == Section::Home),
        people = nav_link("/people", "People", section == Section::People),
    )
}

/// Landing page.
pub fn home_page() -> String {
    layout(
        "Home",
        Section::Home,
        r#"<h1 class="title">Home page</h1>"#,
    )
}

/// Page for unrecognised paths.
pub fn not_found_page() -> String {
    layout(
        "Page not found",
        Section::Other,
        r#"<h1 class="title">Page not found</h1>"#,
    )
}

/// Link to a person's row. Female records get the danger colour.
pub fn person_link(person: &Person) -> String {
    let class = if person.is_female() {
        r#" class="has-text-danger""#
    } else {
        ""
    };
    format!(
        r#"<a href="/people/{slug}"{class}>{name}</a>"#,
        slug = escape(&person.slug),
        name = escape(&person.name),
    )
}

/// Mother/father cell: a link when resolved, else the stored name, else `-`.
pub fn parent_cell(resolved: Option<&Person>, stored_name: Option<&str>) -> String {
    match (resolved, stored_name) {
        (Some(parent), _) => person_link(parent),
        (None, Some(name)) if !name.is_empty() => escape(name),
        _ => MISSING_PARENT.to_string(),
    }
}

fn person_row(out: &mut String, person: &EnrichedPerson, selected: Option<&str>) {
    let class = if selected == Some(person.slug.as_str()) {
        r#" class="has-background-warning""#
    } else {
        ""
    };
    let died = person.died.map(|year| year.to_string()).unwrap_or_default();

    out.push_str(&format!(
        r#"<tr data-cy="person"{class}><td>{link}</td><td>{sex}</td><td>{born}</td><td>{died}</td><td>{mother}</td><td>{father}</td></tr>
"#,
        link = person_link(person),
        sex = person.sex,
        born = person.born,
        mother = parent_cell(person.mother.as_ref(), person.mother_name.as_deref()),
        father = parent_cell(person.father.as_ref(), person.father_name.as_deref()),
    ));
}

/// The people table. Rows keep input order; `selected` highlights a slug.
pub fn people_table(people: &[EnrichedPerson], selected: Option<&str>) -> String {
    let mut out = String::from(
        r#"<table data-cy="peopleTable" class="table is-striped is-hoverable is-narrow is-fullwidth">
<thead><tr><th>Name</th><th>Sex</th><th>Born</th><th>Died</th><th>Mother</th><th>Father</th></tr></thead>
<tbody>
"#,
    );
    for person in people {
        person_row(&mut out, person, selected);
    }
    out.push_str("</tbody>\n</table>");
    out
}

/// Body of the people box for a given page state.
pub fn people_content(state: &PageState, selected: Option<&str>) -> String {
    match state {
        PageState::Idle | PageState::Loading => {
            r#"<div class="loader" data-cy="loader"></div>"#.to_string()
        }
        PageState::Populated(people) => people_table(people, selected),
        PageState::Empty => format!(r#"<p data-cy="noPeopleMessage">{NO_PEOPLE_MESSAGE}</p>"#),
        PageState::Errored => format!(
            r#"<p data-cy="peopleLoadingError" class="has-text-danger">{ERROR_MESSAGE}</p>"#
        ),
    }
}

/// Full people page.
pub fn people_page(state: &PageState, selected: Option<&str>) -> String {
    let content = format!(
        r#"<h1 class="title">People Page</h1>
<div class="block"><div class="box table-container">
{}
</div></div>"#,
        people_content(state, selected)
    );
    layout("People", Section::People, &content)
}
