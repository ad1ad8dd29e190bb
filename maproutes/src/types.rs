//! Request enums for the Maps endpoints.
//!
//! Each enum knows the name it is sent under on the wire. `Display` prints that
//! name, and `FromStr` parses it back case-insensitively.

use std::fmt;
use std::str::FromStr;

use crate::error::RoutesError;

/// The endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Address to latitude/longitude.
    Geocode,
    /// Step-by-step route between two places.
    Directions,
}

impl Operation {
    /// Path segment of the endpoint (e.g. `geocode` in `.../geocode/json`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Geocode => "geocode",
            Operation::Directions => "directions",
        }
    }
}

/// Travel mode for a directions request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Walking,
    Driving,
    Transit,
    /// Sent as `bicycling`, the name the directions endpoint accepts.
    Biking,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Walking => "walking",
            Mode::Driving => "driving",
            Mode::Transit => "transit",
            Mode::Biking => "bicycling",
        }
    }
}

/// Locale hint appended to directions requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// English
    En,
    /// Spanish
    Es,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::En => "en",
            Region::Es => "es",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RoutesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geocode" => Ok(Operation::Geocode),
            "directions" => Ok(Operation::Directions),
            other => Err(unknown("operation", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RoutesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" => Ok(Mode::Walking),
            "driving" => Ok(Mode::Driving),
            "transit" => Ok(Mode::Transit),
            "biking" | "bicycling" => Ok(Mode::Biking),
            other => Err(unknown("mode", other)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = RoutesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Region::En),
            "es" => Ok(Region::Es),
            other => Err(unknown("region", other)),
        }
    }
}

fn unknown(kind: &str, value: &str) -> RoutesError {
    RoutesError::InvalidArgument {
        reason: format!("unknown {}: {:?}", kind, value),
    }
}
