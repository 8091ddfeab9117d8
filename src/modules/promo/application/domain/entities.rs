use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A redeemable token granting premium time. The display status is
/// derived from the stored fields on every read, never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub id: Uuid,
    pub code: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub max_redemptions: Option<i32>,
    pub current_redemptions: i32,
    pub assigned_user_id: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoStatus {
    Active,
    Expired,
    Exhausted,
    Disabled,
}

impl PromoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoStatus::Active => "active",
            PromoStatus::Expired => "expired",
            PromoStatus::Exhausted => "exhausted",
            PromoStatus::Disabled => "disabled",
        }
    }
}

impl PromoCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_redemptions
            .is_some_and(|max| self.current_redemptions >= max)
    }

    pub fn status(&self, now: DateTime<Utc>) -> PromoStatus {
        if !self.is_active {
            PromoStatus::Disabled
        } else if self.is_expired(now) {
            PromoStatus::Expired
        } else if self.is_exhausted() {
            PromoStatus::Exhausted
        } else {
            PromoStatus::Active
        }
    }

    /// The redemption guard. Every clause must hold; the caller maps a
    /// failure of any of them to the same invalid-code outcome.
    pub fn is_redeemable_by(&self, user_id: Uuid, now: DateTime<Utc>) -> bool {
        self.is_active
            && !self.is_expired(now)
            && !self.is_exhausted()
            && self
                .assigned_user_id
                .map_or(true, |assigned| assigned == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn promo() -> PromoCode {
        PromoCode {
            id: Uuid::new_v4(),
            code: "SUMMER2025".to_string(),
            description: None,
            duration_days: 30,
            max_redemptions: None,
            current_redemptions: 0,
            assigned_user_id: None,
            expires_at: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unlimited_unassigned_code_is_active_and_redeemable() {
        let now = Utc::now();
        let code = promo();

        assert_eq!(code.status(now), PromoStatus::Active);
        assert!(code.is_redeemable_by(Uuid::new_v4(), now));
    }

    #[test]
    fn past_expiry_flips_status_without_a_write() {
        let now = Utc::now();
        let mut code = promo();
        code.expires_at = Some(now - Duration::days(1));

        assert_eq!(code.status(now), PromoStatus::Expired);
        assert!(!code.is_redeemable_by(Uuid::new_v4(), now));
    }

    #[test]
    fn counter_at_cap_means_exhausted() {
        let now = Utc::now();
        let mut code = promo();
        code.max_redemptions = Some(3);
        code.current_redemptions = 3;

        assert_eq!(code.status(now), PromoStatus::Exhausted);
        assert!(!code.is_redeemable_by(Uuid::new_v4(), now));
    }

    #[test]
    fn assigned_code_only_works_for_its_user() {
        let now = Utc::now();
        let owner = Uuid::new_v4();
        let mut code = promo();
        code.assigned_user_id = Some(owner);

        assert!(code.is_redeemable_by(owner, now));
        assert!(!code.is_redeemable_by(Uuid::new_v4(), now));
    }

    #[test]
    fn disabled_wins_over_expired_in_display_status() {
        let now = Utc::now();
        let mut code = promo();
        code.is_active = false;
        code.expires_at = Some(now - Duration::days(1));

        assert_eq!(code.status(now), PromoStatus::Disabled);
    }
}
