use crate::asteroids::types::AsteroidRecord;

/// Number of records returned by the "top dangerous" view.
pub const TOP_HAZARDOUS_LIMIT: usize = 3;

/// Orders `records` by diameter, largest first, and keeps at most `limit`.
///
/// The sort is stable: records with equal diameters keep their input order.
/// Fewer than `limit` records are returned as-is, without padding.
pub fn rank_top(mut records: Vec<AsteroidRecord>, limit: usize) -> Vec<AsteroidRecord> {
    records.sort_by(|a, b| b.diameter_km().total_cmp(&a.diameter_km()));
    records.truncate(limit);
    records
}
