//! `serve` and `list` commands.

use kinship_client::PeopleSource;
use kinship_core::EnrichedPerson;
use kinship_web::render::{ERROR_MESSAGE, MISSING_PARENT, NO_PEOPLE_MESSAGE};
use kinship_web::{PageState, PeoplePage, Server};

use crate::config::KinshipConfig;
use crate::{Error, Result};

const HEADERS: [&str; 6] = ["Name", "Sex", "Born", "Died", "Mother", "Father"];

/// Runs the web server until Ctrl-C.
pub async fn serve(config: &KinshipConfig) -> Result<()> {
    let source = config.people_source()?;
    Server::new(config.server_config(), source).run().await?;
    Ok(())
}

/// Loads the dataset once and renders it for the terminal.
///
/// A failed fetch is reported as [`Error::LoadFailed`] with the same
/// generic message the web page shows.
pub async fn list(source: &dyn PeopleSource, selected: Option<&str>) -> Result<String> {
    tracing::debug!(source = %source.describe(), "Listing people");
    match PeoplePage::load(source).await.into_state() {
        PageState::Populated(people) => Ok(format_people_table(&people, selected)),
        PageState::Empty => Ok(NO_PEOPLE_MESSAGE.to_string()),
        _ => Err(Error::LoadFailed(ERROR_MESSAGE)),
    }
}

/// Column-aligned table. The row whose slug is `selected` is marked `*`.
pub fn format_people_table(people: &[EnrichedPerson], selected: Option<&str>) -> String {
    let rows: Vec<(bool, [String; 6])> = people
        .iter()
        .map(|p| {
            let cells = [
                p.name.clone(),
                p.sex.to_string(),
                p.born.to_string(),
                p.died.map(|y| y.to_string()).unwrap_or_default(),
                parent_text(p.mother.as_ref().map(|m| m.name.as_str()), p.mother_name.as_deref()),
                parent_text(p.father.as_ref().map(|f| f.name.as_str()), p.father_name.as_deref()),
            ];
            (selected == Some(p.slug.as_str()), cells)
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(' ', HEADERS.map(String::from).as_slice(), &widths));
    for (marked, cells) in &rows {
        lines.push(format_line(if *marked { '*' } else { ' ' }, cells, &widths));
    }
    lines.join("\n")
}

fn parent_text(resolved: Option<&str>, stored: Option<&str>) -> String {
    match (resolved, stored) {
        (Some(name), _) => name.to_string(),
        (None, Some(name)) if !name.is_empty() => name.to_string(),
        _ => MISSING_PARENT.to_string(),
    }
}

fn format_line(marker: char, cells: &[String], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    format!("{marker} {}", padded.join("  ")).trim_end().to_string()
}
