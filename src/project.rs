use std::{fmt::Display, str::FromStr};

/// A validated project name. Doubles as the destination directory name and
/// as the manifest `name` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err("project name must not be empty".to_string());
        }

        let valid = s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_'));

        if !valid {
            return Err(format!(
                "invalid project name \"{s}\": use lowercase letters, digits, '-' and '_'"
            ));
        }

        Ok(ProjectName(s.to_string()))
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
