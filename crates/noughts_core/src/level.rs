//! Engine difficulty levels.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Difficulty tier, each mapped to a fixed search depth in plies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Level {
    /// Three plies.
    #[serde(alias = "easy")]
    #[strum(to_string = "shallow", serialize = "easy")]
    Shallow,
    /// Five plies.
    #[strum(to_string = "medium")]
    Medium,
    /// Eight plies, enough to solve the board.
    #[default]
    #[serde(alias = "hard")]
    #[strum(to_string = "deep", serialize = "hard")]
    Deep,
}

impl Level {
    /// Search depth for this level.
    pub fn depth(self) -> usize {
        match self {
            Level::Shallow => 3,
            Level::Medium => 5,
            Level::Deep => 8,
        }
    }

    /// Parses a level label, falling back to [`Level::Deep`] when unrecognized.
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_depths() {
        let depths: Vec<usize> = Level::iter().map(Level::depth).collect();
        assert_eq!(depths, vec![3, 5, 8]);
        assert_eq!(Level::default().depth(), crate::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("shallow".parse::<Level>().unwrap(), Level::Shallow);
        assert_eq!("Easy".parse::<Level>().unwrap(), Level::Shallow);
        assert_eq!("MEDIUM".parse::<Level>().unwrap(), Level::Medium);
        assert_eq!("hard".parse::<Level>().unwrap(), Level::Deep);
        assert!("impossible".parse::<Level>().is_err());
    }

    #[test]
    fn test_from_label_falls_back_to_deep() {
        assert_eq!(Level::from_label(" medium "), Level::Medium);
        assert_eq!(Level::from_label("whatever"), Level::Deep);
    }

    #[test]
    fn test_display_is_canonical_name() {
        assert_eq!(Level::Shallow.to_string(), "shallow");
        assert_eq!(Level::Deep.to_string(), "deep");
    }
}
