use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four quadrant buttons on the Senso board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensoButtonId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SensoButtonId {
    /// All quadrants in board order (row by row).
    pub const ALL: [SensoButtonId; 4] = [
        SensoButtonId::TopLeft,
        SensoButtonId::TopRight,
        SensoButtonId::BottomLeft,
        SensoButtonId::BottomRight,
    ];

    /// Stable element id used by the board markup.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            SensoButtonId::TopLeft => "top-left",
            SensoButtonId::TopRight => "top-right",
            SensoButtonId::BottomLeft => "bottom-left",
            SensoButtonId::BottomRight => "bottom-right",
        }
    }

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SensoButtonId::TopLeft => 0,
            SensoButtonId::TopRight => 1,
            SensoButtonId::BottomLeft => 2,
            SensoButtonId::BottomRight => 3,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SensoButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown senso button: {0}")]
pub struct ParseButtonIdError(pub String);

impl FromStr for SensoButtonId {
    type Err = ParseButtonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "topleft" => Ok(SensoButtonId::TopLeft),
            "topright" => Ok(SensoButtonId::TopRight),
            "bottomleft" => Ok(SensoButtonId::BottomLeft),
            "bottomright" => Ok(SensoButtonId::BottomRight),
            _ => Err(ParseButtonIdError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_ids_and_variant_names() {
        assert_eq!("top-left".parse(), Ok(SensoButtonId::TopLeft));
        assert_eq!("BottomRight".parse(), Ok(SensoButtonId::BottomRight));
        assert_eq!("bottom_left".parse(), Ok(SensoButtonId::BottomLeft));
        assert!("middle".parse::<SensoButtonId>().is_err());
    }

    #[test]
    fn index_round_trips_through_all() {
        for id in SensoButtonId::ALL {
            assert_eq!(SensoButtonId::from_index(id.index()), Some(id));
        }
        assert_eq!(SensoButtonId::from_index(4), None);
    }
}
