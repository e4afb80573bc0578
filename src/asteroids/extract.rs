//! Flattens the date-grouped feed into [`AsteroidRecord`]s.

use tracing::debug;

use crate::asteroids::node::{FieldError, Node};
use crate::asteroids::types::AsteroidRecord;
use crate::error::{NeoError, Result};
use crate::parser::RawFeedEnvelope;

const HAZARD_FIELD: &str = "is_potentially_hazardous_asteroid";

/// Decodes every entry in `envelope`, bucket by bucket in provider order.
///
/// With `hazard_only`, entries whose hazard flag is false or absent are
/// skipped before decoding. Within a bucket, entry order is preserved.
///
/// # Errors
///
/// The first entry missing a required field aborts the whole extraction with
/// [`NeoError::MalformedEntry`]. Bad entries are never silently dropped.
pub fn extract(envelope: &RawFeedEnvelope, hazard_only: bool) -> Result<Vec<AsteroidRecord>> {
    let mut records = Vec::new();

    for (date, entries) in envelope.buckets() {
        for (index, entry) in entries.iter().enumerate() {
            let node = Node::root(entry);
            if hazard_only && !is_hazardous(&node) {
                continue;
            }

            let record = decode_entry(&node, date).map_err(|e| NeoError::MalformedEntry {
                date: date.to_string(),
                index,
                field_path: e.path,
            })?;
            records.push(record);
        }
    }

    debug!(
        buckets = envelope.bucket_count(),
        entries = envelope.entry_count(),
        records = records.len(),
        hazard_only,
        "Feed entries extracted"
    );
    Ok(records)
}

fn is_hazardous(node: &Node<'_>) -> bool {
    node.field(HAZARD_FIELD)
        .ok()
        .and_then(|flag| flag.as_bool())
        .unwrap_or(false)
}

/// Midpoint of the estimated range, halved first so large finite bounds
/// cannot overflow to infinity.
fn average_diameter(min: f64, max: f64) -> f64 {
    min / 2.0 + max / 2.0
}

fn decode_entry(node: &Node<'_>, date: &str) -> std::result::Result<AsteroidRecord, FieldError> {
    let name = node.field("name")?.as_str()?;

    let km = node.field("estimated_diameter")?.field("kilometers")?;
    let min = km.field("estimated_diameter_min")?.as_f64()?;
    let max = km.field("estimated_diameter_max")?.as_f64()?;

    let approach = node.field("close_approach_data")?.index(0)?;
    let speed = approach
        .field("relative_velocity")?
        .field("kilometers_per_hour")?
        .as_f64()?;
    let orbiting_body = approach.field("orbiting_body")?.as_str()?;

    Ok(AsteroidRecord::new(
        name,
        average_diameter(min, max),
        speed,
        date,
        orbiting_body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_feed;
    use serde_json::{Value, json};

    fn entry(name: &str, hazardous: bool, min: f64, max: f64) -> Value {
        json!({
            "name": name,
            "is_potentially_hazardous_asteroid": hazardous,
            "estimated_diameter": {
                "kilometers": {
                    "estimated_diameter_min": min,
                    "estimated_diameter_max": max
                }
            },
            "close_approach_data": [{
                "close_approach_date": "2025-05-30",
                "relative_velocity": { "kilometers_per_hour": "30000.5" },
                "orbiting_body": "Earth"
            }]
        })
    }

    fn envelope(buckets: Value) -> RawFeedEnvelope {
        let payload = json!({ "near_earth_objects": buckets });
        parse_feed(payload.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_extract_computes_derived_fields() {
        let env = envelope(json!({ "2025-05-26": [entry("X", false, 1.0, 2.0)] }));
        let records = extract(&env, false).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.name(), "X");
        assert_eq!(r.diameter_km(), 1.5);
        assert_eq!(r.speed_kmh(), 30000.5);
        assert_eq!(r.orbiting_body(), "Earth");
    }

    #[test]
    fn test_average_diameter_is_exact() {
        assert_eq!(average_diameter(1.0, 2.0), 1.5);
        assert_eq!(average_diameter(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_huge_diameters_stay_finite() {
        let env = envelope(json!({ "2025-05-26": [entry("Huge", true, 1e308, 1.5e308)] }));
        let records = extract(&env, false).unwrap();
        assert!(records[0].diameter_km().is_finite());
        assert!((records[0].diameter_km() - 1.25e308).abs() / 1.25e308 < 1e-12);

        let value = serde_json::to_value(&records[0]).unwrap();
        assert!(value["diameter"].is_f64());
    }

    #[test]
    fn test_extract_uses_grouping_date() {
        let env = envelope(json!({ "2025-05-26": [entry("X", false, 1.0, 2.0)] }));
        let records = extract(&env, false).unwrap();
        assert_eq!(records[0].approach_date(), "2025-05-26");
    }

    #[test]
    fn test_extract_preserves_bucket_order() {
        let env = envelope(json!({
            "2025-05-27": [entry("C", false, 1.0, 1.0)],
            "2025-05-26": [entry("A", false, 1.0, 1.0), entry("B", false, 1.0, 1.0)]
        }));
        let names: Vec<String> = extract(&env, false)
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_hazard_only_skips_safe_and_unflagged() {
        let mut unflagged = entry("U", true, 9.0, 9.0);
        unflagged
            .as_object_mut()
            .unwrap()
            .remove("is_potentially_hazardous_asteroid");
        let env = envelope(json!({
            "2025-05-26": [entry("Safe", false, 9.0, 9.0), entry("Risky", true, 1.0, 1.0), unflagged]
        }));

        let all = extract(&env, false).unwrap();
        assert_eq!(all.len(), 3);

        let hazardous = extract(&env, true).unwrap();
        assert_eq!(hazardous.len(), 1);
        assert_eq!(hazardous[0].name(), "Risky");
    }

    #[test]
    fn test_missing_diameter_aborts_extraction() {
        let mut broken = entry("Broken", false, 1.0, 2.0);
        broken.as_object_mut().unwrap().remove("estimated_diameter");
        let env = envelope(json!({
            "2025-05-26": [entry("Fine", false, 1.0, 2.0), broken]
        }));

        match extract(&env, false) {
            Err(NeoError::MalformedEntry {
                date,
                index,
                field_path,
            }) => {
                assert_eq!(date, "2025-05-26");
                assert_eq!(index, 1);
                assert_eq!(field_path, "estimated_diameter");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_approach_list_is_malformed() {
        let mut broken = entry("NoApproach", false, 1.0, 2.0);
        broken["close_approach_data"] = json!([]);
        let env = envelope(json!({ "2025-05-26": [broken] }));

        match extract(&env, false) {
            Err(NeoError::MalformedEntry { field_path, .. }) => {
                assert_eq!(field_path, "close_approach_data[0]");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_safe_malformed_entry_is_skipped_under_hazard_filter() {
        let mut broken = entry("Broken", false, 1.0, 2.0);
        broken.as_object_mut().unwrap().remove("name");
        let env = envelope(json!({ "2025-05-26": [broken] }));

        assert!(extract(&env, false).is_err());
        assert!(extract(&env, true).unwrap().is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let env = envelope(json!({
            "2025-05-26": [entry("A", true, 1.0, 3.0)],
            "2025-05-27": [entry("B", false, 2.0, 4.0)]
        }));
        assert_eq!(extract(&env, false).unwrap(), extract(&env, false).unwrap());
    }
}
