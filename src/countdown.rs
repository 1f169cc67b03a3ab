//! Countdown text for the pre-maintenance banner.

use chrono::{DateTime, Utc};

/// Render the time remaining until `target` as human-readable text, e.g.
/// "1 hour, 1 minute, 1 second" or "42 minutes, 5 seconds". Components that
/// are zero are omitted. A target that is due or already passed (including
/// sub-second remainders, which floor to zero) renders as "starting now...".
pub fn project(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = target.signed_duration_since(now).num_seconds();
    if remaining <= 0 {
        return "starting now...".to_string();
    }

    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    let seconds = remaining % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(pluralize(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute"));
    }
    if seconds > 0 {
        parts.push(pluralize(seconds, "second"));
    }

    parts.join(", ")
}

fn pluralize(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_case::test_case;

    fn base() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-04-10T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test_case(3661, "1 hour, 1 minute, 1 second" ; "every unit singular")]
    #[test_case(3600, "1 hour" ; "exact hour omits zero components")]
    #[test_case(3601, "1 hour, 1 second" ; "zero minutes dropped in the middle")]
    #[test_case(7322, "2 hours, 2 minutes, 2 seconds" ; "plural units")]
    #[test_case(5400, "1 hour, 30 minutes" ; "zero seconds dropped")]
    #[test_case(61, "1 minute, 1 second" ; "no hour component")]
    #[test_case(59, "59 seconds" ; "seconds only")]
    #[test_case(1, "1 second" ; "single second")]
    fn test_renders_remaining_components(seconds: i64, expected: &str) {
        let now = base();
        assert_eq!(project(now + Duration::seconds(seconds), now), expected);
    }

    #[test_case(0 ; "exactly due")]
    #[test_case(-5 ; "already passed")]
    #[test_case(-86_400 ; "passed a day ago")]
    fn test_due_or_past_targets_are_imminent(seconds: i64) {
        let now = base();
        assert_eq!(project(now + Duration::seconds(seconds), now), "starting now...");
    }

    #[test]
    fn test_sub_second_remainder_floors_to_imminent() {
        let now = base();
        assert_eq!(project(now + Duration::milliseconds(400), now), "starting now...");
    }
}
