use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::PlanType;

/// Premium access is derived on every evaluation, never cached.
///
/// Lifetime plans are premium as long as the flag is set. Monthly plans
/// additionally need a recorded expiry strictly in the future; a monthly
/// plan with no expiry on record is treated as premium rather than
/// locking a paying user out over missing data.
pub fn is_effectively_premium(
    is_premium: bool,
    plan_type: Option<PlanType>,
    premium_expires_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if !is_premium {
        return false;
    }

    match plan_type {
        Some(PlanType::Monthly) => match premium_expires_at {
            Some(expiry) => expiry > now,
            None => true,
        },
        Some(PlanType::Lifetime) | None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn flag_off_is_never_premium() {
        let now = Utc::now();
        assert!(!is_effectively_premium(
            false,
            Some(PlanType::Lifetime),
            None,
            now
        ));
        assert!(!is_effectively_premium(
            false,
            Some(PlanType::Monthly),
            Some(now + Duration::days(30)),
            now
        ));
    }

    #[test]
    fn lifetime_ignores_expiry() {
        let now = Utc::now();
        assert!(is_effectively_premium(
            true,
            Some(PlanType::Lifetime),
            Some(now - Duration::days(1)),
            now
        ));
        assert!(is_effectively_premium(true, Some(PlanType::Lifetime), None, now));
    }

    #[test]
    fn monthly_requires_future_expiry() {
        let now = Utc::now();
        assert!(is_effectively_premium(
            true,
            Some(PlanType::Monthly),
            Some(now + Duration::seconds(1)),
            now
        ));
        assert!(!is_effectively_premium(
            true,
            Some(PlanType::Monthly),
            Some(now),
            now
        ));
        assert!(!is_effectively_premium(
            true,
            Some(PlanType::Monthly),
            Some(now - Duration::seconds(1)),
            now
        ));
    }

    #[test]
    fn monthly_without_recorded_expiry_stays_premium() {
        assert!(is_effectively_premium(
            true,
            Some(PlanType::Monthly),
            None,
            Utc::now()
        ));
    }

    // For a fixed monthly expiry, access never flips back on as time
    // moves forward.
    #[test]
    fn monthly_access_is_monotonic_in_time() {
        let expiry = Utc::now();
        let mut previous = true;

        for offset_hours in -48..48 {
            let now = expiry + Duration::hours(offset_hours);
            let current = is_effectively_premium(true, Some(PlanType::Monthly), Some(expiry), now);
            assert!(
                previous || !current,
                "access regained at offset {}h",
                offset_hours
            );
            previous = current;
        }
    }
}
