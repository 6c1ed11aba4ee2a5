//! Time handling for generated images.

use chrono::{DateTime, SecondsFormat, Utc};

/// Generation time of a rendered image.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
pub fn now() -> Timestamp {
    Utc::now()
}

/// A fresh timestamp that never sorts before `previous`.
///
/// Wall clocks can step backwards; consumers compare `last_updated` values
/// to decide whether to re-fetch, so the sequence must not go back in time.
pub fn refreshed_after(previous: Timestamp) -> Timestamp {
    now().max(previous)
}

/// RFC 3339 form with millisecond precision, e.g. `2024-01-15T12:00:00.000Z`.
pub fn format_rfc3339(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
