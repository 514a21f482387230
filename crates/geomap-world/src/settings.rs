//! Game-creation settings that influence how the map is modified.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a setting name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {setting} '{value}' (expected one of: {expected})")]
pub struct ParseSettingError {
    /// Which setting was being parsed.
    pub setting: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted names.
    pub expected: &'static str,
}

/// Landscape climate of the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    #[default]
    Temperate,
    Arctic,
    Tropic,
    Toyland,
}

impl Climate {
    pub const ALL: [Climate; 4] = [
        Climate::Temperate,
        Climate::Arctic,
        Climate::Tropic,
        Climate::Toyland,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Climate::Temperate => "temperate",
            Climate::Arctic => "arctic",
            Climate::Tropic => "tropic",
            Climate::Toyland => "toyland",
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Climate {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Climate::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSettingError {
                setting: "climate",
                value: s.to_string(),
                expected: "temperate, arctic, tropic, toyland",
            })
    }
}

/// Orientation used when projecting an image onto the map.
///
/// The map is drawn as a diamond; the rotation decides which image axis
/// follows the map's X axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Rotation {
    pub fn name(self) -> &'static str {
        match self {
            Rotation::CounterClockwise => "counter-clockwise",
            Rotation::Clockwise => "clockwise",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rotation {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ccw" | "counter-clockwise" | "counterclockwise" => Ok(Rotation::CounterClockwise),
            "cw" | "clockwise" => Ok(Rotation::Clockwise),
            _ => Err(ParseSettingError {
                setting: "rotation",
                value: s.to_string(),
                expected: "ccw, cw",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_parse_roundtrip() {
        for climate in Climate::ALL {
            assert_eq!(climate.to_string().parse::<Climate>(), Ok(climate));
        }
        assert_eq!("ARCTIC".parse::<Climate>(), Ok(Climate::Arctic));
    }

    #[test]
    fn test_climate_parse_rejects_unknown() {
        let err = "martian".parse::<Climate>().unwrap_err();
        assert_eq!(err.setting, "climate");
        assert!(err.to_string().contains("martian"));
    }

    #[test]
    fn test_rotation_aliases() {
        assert_eq!("cw".parse::<Rotation>(), Ok(Rotation::Clockwise));
        assert_eq!("Counter-Clockwise".parse::<Rotation>(), Ok(Rotation::CounterClockwise));
        assert!("sideways".parse::<Rotation>().is_err());
    }
}
