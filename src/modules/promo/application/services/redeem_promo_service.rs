use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::ports::outgoing::{BillingRepositoryError, PremiumRepository};
use crate::promo::application::ports::{
    incoming::use_cases::{
        RedeemPromoCommand, RedeemPromoError, RedeemPromoUseCase, RedemptionResult,
    },
    outgoing::PromoRepository,
};

#[derive(Debug, Clone)]
pub struct RedeemPromoService<R, P>
where
    R: PromoRepository + Send + Sync,
    P: PremiumRepository + Send + Sync,
{
    promos: R,
    premium: P,
}

impl<R, P> RedeemPromoService<R, P>
where
    R: PromoRepository + Send + Sync,
    P: PremiumRepository + Send + Sync,
{
    pub fn new(promos: R, premium: P) -> Self {
        Self { promos, premium }
    }
}

#[async_trait]
impl<R, P> RedeemPromoUseCase for RedeemPromoService<R, P>
where
    R: PromoRepository + Send + Sync,
    P: PremiumRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RedeemPromoCommand,
    ) -> Result<RedemptionResult, RedeemPromoError> {
        let now = Utc::now();

        let promo = self
            .promos
            .find_by_code(command.code())
            .await
            .map_err(|e| RedeemPromoError::RepositoryError(e.to_string()))?
            .ok_or(RedeemPromoError::PromoInvalid)?;

        if !promo.is_redeemable_by(command.user_id(), now) {
            return Err(RedeemPromoError::PromoInvalid);
        }

        let profile = self
            .premium
            .fetch_billing_profile(command.user_id())
            .await
            .map_err(|e| match e {
                BillingRepositoryError::UserNotFound => RedeemPromoError::UserNotFound,
                other => RedeemPromoError::RepositoryError(other.to_string()),
            })?;

        // The guarded increment is the point of truth for the cap. The
        // read above may be stale under concurrency; losing here still
        // reads as an invalid code.
        let won = self
            .promos
            .redeem(promo.id)
            .await
            .map_err(|e| RedeemPromoError::RepositoryError(e.to_string()))?;
        if !won {
            return Err(RedeemPromoError::PromoInvalid);
        }

        // Lifetime access cannot be extended further.
        if profile.is_premium && profile.plan_type == Some(PlanType::Lifetime) {
            info!(user_id = %command.user_id(), code = command.code(), "Promo redeemed by lifetime user");
            return Ok(RedemptionResult {
                duration_days: promo.duration_days,
                premium_expires_at: None,
            });
        }

        let base = profile
            .premium_expires_at
            .filter(|expiry| *expiry > now)
            .unwrap_or(now);
        let new_expiry = base + Duration::days(i64::from(promo.duration_days));

        if let Err(e) = self
            .premium
            .activate_premium(
                command.user_id(),
                PlanType::Monthly,
                Some(new_expiry),
                profile.subscription_id.clone(),
            )
            .await
        {
            // Hand the slot back so a failed grant does not burn a
            // capped redemption.
            if let Err(release_err) = self.promos.release(promo.id).await {
                warn!(
                    promo_id = %promo.id,
                    error = %release_err,
                    "Failed to release redemption slot after premium write error"
                );
            }
            return Err(RedeemPromoError::RepositoryError(e.to_string()));
        }

        info!(user_id = %command.user_id(), code = command.code(), "Promo redeemed");

        Ok(RedemptionResult {
            duration_days: promo.duration_days,
            premium_expires_at: Some(new_expiry),
        })
    }
}
