//! Time utilities for the trust profile engine.
//!
//! All timestamps are Unix epoch microseconds (u64).

/// Return the current time as microseconds since Unix epoch.
pub fn now_micros() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_micros() as u64
}

/// Convert microseconds to an RFC 3339 string.
pub fn micros_to_rfc3339(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let nsecs = ((micros % 1_000_000) * 1000) as u32;
    let dt = chrono::DateTime::from_timestamp(secs, nsecs).unwrap_or(chrono::DateTime::UNIX_EPOCH);
    dt.to_rfc3339()
}

/// Compute an expiry timestamp from a base time and a validity window.
///
/// The window may be negative (an already-expired artifact, useful for
/// testing expiry handling); the result saturates at 0 and `u64::MAX`
/// instead of wrapping.
pub fn expiry_micros(now: u64, validity: chrono::Duration) -> u64 {
    match validity.num_microseconds() {
        Some(delta) => now.saturating_add_signed(delta),
        // Window too large to represent in micros: effectively unbounded.
        None => {
            if validity > chrono::Duration::zero() {
                u64::MAX
            } else {
                0
            }
        }
    }
}
