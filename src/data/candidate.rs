use serde::{Deserialize, Serialize};

use super::position::{Position, PositionParseError};

/// One geocoder hit as the typeahead sees it.
///
/// `value` keeps the coordinates exactly as the geocoder returned them,
/// joined as `"lat,lon"`, so rows stay keyed by the service's own text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub value: String,
    pub label: String,
}

impl Candidate {
    pub fn new(latitude: &str, longitude: &str, label: impl Into<String>) -> Self {
        Self {
            value: format!("{},{}", latitude, longitude),
            label: label.into(),
        }
    }

    pub fn position(&self) -> Result<Position, PositionParseError> {
        self.value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_joins_raw_coordinates() {
        let candidate = Candidate::new("48.8534951", "2.3483915", "Paris, Île-de-France, France");
        assert_eq!(candidate.value, "48.8534951,2.3483915");
        assert_eq!(candidate.label, "Paris, Île-de-France, France");
    }

    #[test]
    fn position_round_trips_through_value() {
        let candidate = Candidate::new("-22.9110137", "-43.2093727", "Rio de Janeiro");
        assert_eq!(
            candidate.position().unwrap(),
            Position::new(-22.9110137, -43.2093727)
        );
    }

    #[test]
    fn garbage_value_is_an_error() {
        let candidate = Candidate {
            value: "somewhere".into(),
            label: "Somewhere".into(),
        };
        assert!(candidate.position().is_err());
    }
}
