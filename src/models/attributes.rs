//! Categorical record attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CensusError;

/// Eye and hair color. Comparison between colors follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    White,
    Brown,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::White,
        Color::Brown,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::White => "white",
            Color::Brown => "brown",
        };
        f.write_str(token)
    }
}

impl FromStr for Color {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "white" => Ok(Color::White),
            "brown" => Ok(Color::Brown),
            other => Err(CensusError::Validation(format!(
                "unknown color '{}'; expected one of: {}",
                other,
                values_hint(&Color::ALL)
            ))),
        }
    }
}

/// Nationality of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    India,
    Vatican,
    SouthKorea,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::India, Country::Vatican, Country::SouthKorea];
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Country::India => "india",
            Country::Vatican => "vatican",
            Country::SouthKorea => "south_korea",
        };
        f.write_str(token)
    }
}

impl FromStr for Country {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "india" => Ok(Country::India),
            "vatican" => Ok(Country::Vatican),
            "south_korea" | "southkorea" => Ok(Country::SouthKorea),
            other => Err(CensusError::Validation(format!(
                "unknown country '{}'; expected one of: {}",
                other,
                values_hint(&Country::ALL)
            ))),
        }
    }
}

/// Comma-separated list of enumeration values for prompts and error hints.
pub fn values_hint<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
