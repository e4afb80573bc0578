//! Flattened asteroid record exposed by the simplified and ranked views.

use serde::{Deserialize, Serialize};

/// One asteroid, flattened out of its feed entry.
///
/// Serialized as `{name, diameter, speed, date, planet}`; existing consumers
/// depend on those property names.
///
/// `approach_date` is the feed's grouping date for the entry, not the
/// `close_approach_date` recorded inside the entry's first approach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    name: String,
    #[serde(rename = "diameter")]
    diameter_km: f64,
    #[serde(rename = "speed")]
    speed_kmh: f64,
    #[serde(rename = "date")]
    approach_date: String,
    #[serde(rename = "planet")]
    orbiting_body: String,
}

impl AsteroidRecord {
    pub fn new(
        name: impl Into<String>,
        diameter_km: f64,
        speed_kmh: f64,
        approach_date: impl Into<String>,
        orbiting_body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            diameter_km,
            speed_kmh,
            approach_date: approach_date.into(),
            orbiting_body: orbiting_body.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mean of the provider's min and max estimated diameter, in kilometres.
    pub fn diameter_km(&self) -> f64 {
        self.diameter_km
    }

    /// Relative velocity at the first listed close approach, in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Grouping date (`YYYY-MM-DD`) the feed listed this entry under.
    pub fn approach_date(&self) -> &str {
        &self.approach_date
    }

    pub fn orbiting_body(&self) -> &str {
        &self.orbiting_body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_consumer_property_names() {
        let record = AsteroidRecord::new("433 Eros", 1.5, 30000.0, "2025-05-26", "Earth");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "433 Eros",
                "diameter": 1.5,
                "speed": 30000.0,
                "date": "2025-05-26",
                "planet": "Earth"
            })
        );
    }
}
