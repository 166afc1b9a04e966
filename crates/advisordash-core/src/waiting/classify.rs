//! Elapsed-time classification and fixed-zone timestamp rendering.
//!
//! Both operations are pure: "now" is always an explicit parameter, and
//! the rendering zone is pinned to America/New_York. Nothing in here
//! consults the process wall clock or the viewer's local zone.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::America::New_York;

use super::model::{NO_TIMESTAMP, Severity, WaitingTime};
use crate::{Error, Result};

/// Bare timestamps accept an optional fractional-seconds part.
const BARE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a received timestamp into a UTC instant.
///
/// A value that self-declares a zone (trailing `Z` or an explicit
/// `+hh:mm`/`-hh:mm` offset) is honored as written. A bare value is
/// assumed UTC. Treating a bare value as local time instead would shift
/// every waiting-time computation by the viewer's UTC offset.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] for non-empty input that parses
/// under neither rule. Empty input is the caller's fallback case, not an
/// error here.
pub fn parse_received(received_at: &str) -> Result<DateTime<Utc>> {
    let trimmed = received_at.trim();

    if let Ok(with_zone) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_zone.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, BARE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::InvalidTimestamp(received_at.to_string()))
}

/// Computes how long an email has been waiting as of `now`.
///
/// An empty `received_at` yields the placeholder value. Elapsed time is
/// clamped at zero so clock skew or future-dated fixtures never report a
/// negative wait.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] for non-empty input that does not
/// parse.
pub fn compute_waiting(received_at: &str, now: DateTime<Utc>) -> Result<WaitingTime> {
    if received_at.trim().is_empty() {
        return Ok(WaitingTime::placeholder());
    }

    let received = parse_received(received_at)?;
    let minutes = u64::try_from(now.signed_duration_since(received).num_minutes()).unwrap_or(0);
    let hours = minutes / 60;
    let days = hours / 24;

    let label = if minutes < 1 {
        "< 1m".to_string()
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if hours < 24 {
        match minutes % 60 {
            0 => format!("{hours}h"),
            mins => format!("{hours}h {mins}m"),
        }
    } else {
        match hours % 24 {
            0 => format!("{days}d"),
            rem => format!("{days}d {rem}h"),
        }
    };

    // Thresholds are inclusive on the hour boundary: exactly 12h is still
    // green, exactly 24h is still yellow.
    let severity = if minutes <= 12 * 60 {
        Severity::Green
    } else if minutes <= 24 * 60 {
        Severity::Yellow
    } else {
        Severity::Red
    };

    Ok(WaitingTime {
        label,
        minutes,
        severity,
    })
}

/// Renders a received timestamp in Eastern time as `MM/DD/YY, hh:mm AM|PM`.
///
/// Empty input yields the placeholder. The zone is fixed: advising staff
/// read every timestamp in America/New_York regardless of where the
/// dashboard runs.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] for non-empty input that does not
/// parse.
pub fn format_received(received_at: &str) -> Result<String> {
    if received_at.trim().is_empty() {
        return Ok(NO_TIMESTAMP.to_string());
    }

    let received = parse_received(received_at)?;
    Ok(received
        .with_timezone(&New_York)
        .format("%m/%d/%y, %I:%M %p")
        .to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_bare_timestamp_is_utc() {
        let info = compute_waiting("2024-01-01T00:00:00", utc(2024, 1, 1, 0, 30, 0)).unwrap();
        assert_eq!(info.label, "30m");
        assert_eq!(info.minutes, 30);
        assert_eq!(info.severity, Severity::Green);
    }

    #[test]
    fn test_wire_forms_agree() {
        let now = utc(2024, 11, 2, 18, 0, 0);
        let bare = compute_waiting("2024-11-02T10:15:00", now).unwrap();
        let zulu = compute_waiting("2024-11-02T10:15:00Z", now).unwrap();
        let offset = compute_waiting("2024-11-02T05:15:00-05:00", now).unwrap();
        assert_eq!(bare, zulu);
        assert_eq!(bare, offset);

        let formatted: Vec<String> = [
            "2024-11-02T10:15:00",
            "2024-11-02T10:15:00Z",
            "2024-11-02T05:15:00-05:00",
        ]
        .iter()
        .map(|s| format_received(s).unwrap())
        .collect();
        assert_eq!(formatted[0], formatted[1]);
        assert_eq!(formatted[0], formatted[2]);
    }

    #[test]
    fn test_positive_offset_honored() {
        let info = compute_waiting("2024-01-01T05:00:00+05:00", utc(2024, 1, 1, 1, 0, 0)).unwrap();
        assert_eq!(info.minutes, 60);
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        let info = compute_waiting("2024-01-02T00:00:00", utc(2024, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(info.minutes, 0);
        assert_eq!(info.label, "< 1m");
        assert_eq!(info.severity, Severity::Green);
    }

    #[test]
    fn test_empty_yields_placeholder() {
        let info = compute_waiting("", utc(2024, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(info, WaitingTime::placeholder());
        assert_eq!(format_received("").unwrap(), NO_TIMESTAMP);
    }

    #[test]
    fn test_malformed_is_an_error() {
        let now = utc(2024, 1, 1, 0, 0, 0);
        assert!(matches!(
            compute_waiting("yesterday-ish", now),
            Err(Error::InvalidTimestamp(_))
        ));
        assert!(matches!(
            format_received("yesterday-ish"),
            Err(Error::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_label_tiers() {
        let start = "2024-01-01T00:00:00";
        let cases = [
            (utc(2024, 1, 1, 0, 0, 30), "< 1m"),
            (utc(2024, 1, 1, 0, 37, 0), "37m"),
            (utc(2024, 1, 1, 4, 12, 0), "4h 12m"),
            (utc(2024, 1, 1, 4, 0, 0), "4h"),
            (utc(2024, 1, 3, 5, 0, 0), "2d 5h"),
            (utc(2024, 1, 3, 0, 0, 0), "2d"),
        ];
        for (now, expected) in cases {
            assert_eq!(compute_waiting(start, now).unwrap().label, expected);
        }
    }

    #[test]
    fn test_severity_boundaries_inclusive() {
        let start = "2024-01-01T00:00:00";
        let cases = [
            (utc(2024, 1, 1, 12, 0, 0), Severity::Green),
            (utc(2024, 1, 1, 12, 1, 0), Severity::Yellow),
            (utc(2024, 1, 2, 0, 0, 0), Severity::Yellow),
            (utc(2024, 1, 2, 0, 1, 0), Severity::Red),
        ];
        for (now, expected) in cases {
            assert_eq!(
                compute_waiting(start, now).unwrap().severity,
                expected,
                "at {now}"
            );
        }
    }

    #[test]
    fn test_format_eastern_standard_time() {
        // 2024-11-02 is EDT (UTC-4): 10:15 UTC -> 06:15 AM Eastern.
        assert_eq!(
            format_received("2024-11-02T10:15:00").unwrap(),
            "11/02/24, 06:15 AM"
        );
        // 2024-12-15 is EST (UTC-5): 18:30 UTC -> 01:30 PM Eastern.
        assert_eq!(
            format_received("2024-12-15T18:30:00Z").unwrap(),
            "12/15/24, 01:30 PM"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn waiting_minutes_never_negative(offset_minutes in -100_000i64..100_000) {
                let received = utc(2024, 6, 1, 0, 0, 0);
                let now = received + chrono::Duration::minutes(offset_minutes);
                let info = compute_waiting("2024-06-01T00:00:00", now).unwrap();
                prop_assert!(info.minutes <= 100_000);
                if offset_minutes <= 0 {
                    prop_assert_eq!(info.minutes, 0);
                }
            }

            #[test]
            fn severity_monotone_in_elapsed(a in 0i64..200_000, b in 0i64..200_000) {
                let received = utc(2024, 6, 1, 0, 0, 0);
                let earlier = received + chrono::Duration::minutes(a.min(b));
                let later = received + chrono::Duration::minutes(a.max(b));
                let sev_earlier = compute_waiting("2024-06-01T00:00:00", earlier).unwrap().severity;
                let sev_later = compute_waiting("2024-06-01T00:00:00", later).unwrap().severity;
                prop_assert!(sev_earlier <= sev_later);
            }
        }
    }
}
