use crate::tracking::TrackId;

/// Parses a user-supplied track id. Anything that is not a plain
/// non-negative integer means "no id filter".
pub fn parse_track_id(raw: &str) -> Option<TrackId> {
    parse_unsigned(raw)
}

/// Parses a user-supplied track length. Zero is treated like missing input,
/// since no track has length zero.
pub fn parse_track_length(raw: &str) -> Option<u32> {
    parse_unsigned(raw).filter(|length| *length > 0)
}

fn parse_unsigned<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
