use std::fmt::Display;

use anyhow::{bail, Result};
use inquire::{InquireError, Select};

use crate::registry::Template;

/// Outcome of the non-interactive part of resolution.
#[derive(Debug)]
pub enum Preselection {
    Resolved(&'static Template),
    NeedsPrompt,
}

/// Resolve without prompting where possible.
///
/// A single-entry registry always wins, even over an explicit request. An
/// unrecognized request is an error naming the offending value and the known
/// identifiers; nothing has been created at that point.
pub fn preselect(
    templates: &'static [Template],
    requested: Option<&str>,
) -> Result<Preselection> {
    if let [only] = templates {
        return Ok(Preselection::Resolved(only));
    }

    let Some(requested) = requested else {
        return Ok(Preselection::NeedsPrompt);
    };

    match templates.iter().find(|t| t.value == requested) {
        Some(template) => Ok(Preselection::Resolved(template)),
        None => {
            let known = templates
                .iter()
                .map(|t| t.value)
                .collect::<Vec<_>>()
                .join(", ");

            bail!("unrecognized template \"{requested}\". Known templates: {known}")
        }
    }
}

/// Resolve the template to materialize. `Ok(None)` means the user cancelled
/// the selection; the caller exits cleanly without side effects.
pub fn resolve(
    templates: &'static [Template],
    requested: Option<&str>,
) -> Result<Option<&'static Template>> {
    match preselect(templates, requested)? {
        Preselection::Resolved(template) => Ok(Some(template)),
        Preselection::NeedsPrompt => {
            let choices = templates.iter().map(Choice).collect();

            match Select::new("Select a template:", choices).prompt() {
                Ok(Choice(template)) => Ok(Some(template)),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

struct Choice(&'static Template);

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.0.icon, self.0.name, self.0.description
        )
    }
}
