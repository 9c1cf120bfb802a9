use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleIntent {
    /// Empty the list. `user` and `login` are kept.
    Clear,
    /// Restore the seed list.
    Reset,
    /// Drop every person whose id equals `id`.
    RemoveItem { id: u32 },
}

impl Intent for PeopleIntent {}

/// Errors from parsing the textual action form (`CLEAR`, `RESET`, `REMOVE_ITEM:<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("Unknown action kind '{0}'")]
    UnknownKind(String),

    #[error("Action '{0}' requires an id, e.g. REMOVE_ITEM:1")]
    MissingId(String),

    #[error("Invalid id '{value}' for action '{kind}'")]
    InvalidId { kind: String, value: String },

    #[error("Action '{0}' takes no payload")]
    UnexpectedPayload(String),
}

impl FromStr for PeopleIntent {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, payload) = match s.split_once(':') {
            Some((kind, payload)) => (kind.trim(), Some(payload.trim())),
            None => (s, None),
        };

        match (kind.to_ascii_uppercase().as_str(), payload) {
            ("CLEAR", None) => Ok(PeopleIntent::Clear),
            ("RESET", None) => Ok(PeopleIntent::Reset),
            ("CLEAR" | "RESET", Some(_)) => Err(ActionParseError::UnexpectedPayload(kind.to_string())),
            ("REMOVE_ITEM", None) => Err(ActionParseError::MissingId(kind.to_string())),
            ("REMOVE_ITEM", Some(value)) => value
                .parse()
                .map(|id| PeopleIntent::RemoveItem { id })
                .map_err(|_| ActionParseError::InvalidId {
                    kind: kind.to_string(),
                    value: value.to_string(),
                }),
            _ => Err(ActionParseError::UnknownKind(kind.to_string())),
        }
    }
}

impl fmt::Display for PeopleIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeopleIntent::Clear => write!(f, "CLEAR"),
            PeopleIntent::Reset => write!(f, "RESET"),
            PeopleIntent::RemoveItem { id } => write!(f, "REMOVE_ITEM:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_kinds_case_insensitively() {
        assert_eq!("CLEAR".parse::<PeopleIntent>(), Ok(PeopleIntent::Clear));
        assert_eq!("reset".parse::<PeopleIntent>(), Ok(PeopleIntent::Reset));
    }

    #[test]
    fn parses_remove_item_with_id() {
        assert_eq!(
            "REMOVE_ITEM:2".parse::<PeopleIntent>(),
            Ok(PeopleIntent::RemoveItem { id: 2 })
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            "LOGOUT".parse::<PeopleIntent>(),
            Err(ActionParseError::UnknownKind("LOGOUT".to_string()))
        );
    }

    #[test]
    fn rejects_remove_item_without_id() {
        assert!(matches!(
            "REMOVE_ITEM".parse::<PeopleIntent>(),
            Err(ActionParseError::MissingId(_))
        ));
        assert!(matches!(
            "REMOVE_ITEM:abc".parse::<PeopleIntent>(),
            Err(ActionParseError::InvalidId { .. })
        ));
    }

    #[test]
    fn display_matches_parse_form() {
        let intent = PeopleIntent::RemoveItem { id: 7 };
        assert_eq!(intent.to_string().parse::<PeopleIntent>(), Ok(intent));
    }
}
