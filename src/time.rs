use chrono::Utc;

/// Get current Unix timestamp in UTC (milliseconds)
pub fn unix_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}
