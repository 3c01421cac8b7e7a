use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// São Paulo, where the map sits until the couple picks a place.
pub const DEFAULT_LATITUDE: f64 = -23.55052;
pub const DEFAULT_LONGITUDE: f64 = -46.633308;

#[derive(Debug, Error, PartialEq)]
pub enum PositionParseError {
    #[error("expected \"lat,lon\", got {0:?}")]
    MissingSeparator(String),
    #[error("invalid coordinate {0:?}")]
    InvalidNumber(String),
    #[error("coordinate out of range: {latitude}, {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = value
            .split_once(',')
            .ok_or_else(|| PositionParseError::MissingSeparator(value.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| PositionParseError::InvalidNumber(part.to_string()))
        };

        let position = Position::new(parse(lat)?, parse(lon)?);
        if !position.is_valid() {
            return Err(PositionParseError::OutOfRange {
                latitude: position.latitude,
                longitude: position.longitude,
            });
        }

        Ok(position)
    }
}
