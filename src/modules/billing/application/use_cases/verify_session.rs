use chrono::{Duration, Utc};
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::ports::outgoing::{
    BillingGateway, BillingGatewayError, NewTransaction, PremiumRepository, SessionStatus,
    TransactionStore,
};
use crate::billing::application::domain::entities::TransactionStatus;

const MONTHLY_PERIOD_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub enum VerifySessionError {
    SessionNotFound,
    SessionNotPaid,
    GatewayError,
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedSession {
    pub plan: PlanType,
    pub transaction: Transaction,
}

#[async_trait::async_trait]
pub trait IVerifySessionUseCase: Send + Sync {
    /// Confirms a checkout session with the gateway and applies its
    /// outcome. Safe to call repeatedly for the same session.
    async fn execute(
        &self,
        user_id: Uuid,
        session_id: &str,
    ) -> Result<VerifiedSession, VerifySessionError>;
}

pub struct VerifySessionUseCase<R, G, T>
where
    R: PremiumRepository,
    G: BillingGateway,
    T: TransactionStore,
{
    repository: R,
    gateway: G,
    transactions: T,
}

impl<R, G, T> VerifySessionUseCase<R, G, T>
where
    R: PremiumRepository,
    G: BillingGateway,
    T: TransactionStore,
{
    pub fn new(repository: R, gateway: G, transactions: T) -> Self {
        Self {
            repository,
            gateway,
            transactions,
        }
    }
}

#[async_trait::async_trait]
impl<R, G, T> IVerifySessionUseCase for VerifySessionUseCase<R, G, T>
where
    R: PremiumRepository + Send + Sync,
    G: BillingGateway + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        session_id: &str,
    ) -> Result<VerifiedSession, VerifySessionError> {
        let session = self
            .gateway
            .fetch_session(session_id)
            .await
            .map_err(|err| match err {
                BillingGatewayError::SessionNotFound => VerifySessionError::SessionNotFound,
                other => {
                    error!("Session verification failed: {}", other);
                    VerifySessionError::GatewayError
                }
            })?;

        if session.status != SessionStatus::Paid {
            return Err(VerifySessionError::SessionNotPaid);
        }

        let expires_at = match session.plan {
            PlanType::Monthly => Some(Utc::now() + Duration::days(MONTHLY_PERIOD_DAYS)),
            PlanType::Lifetime => None,
        };

        self.repository
            .activate_premium(
                user_id,
                session.plan,
                expires_at,
                session.subscription_id.clone(),
            )
            .await
            .map_err(|e| VerifySessionError::RepositoryError(e.to_string()))?;

        let transaction = self
            .transactions
            .record_transaction(NewTransaction {
                user_id,
                gateway_id: session.session_id.clone(),
                gateway: session.gateway.clone(),
                amount_cents: session.amount_cents,
                currency: session.currency.clone(),
                status: TransactionStatus::Succeeded,
                description: Some(format!("Premium plan purchase ({})", session.plan.as_str())),
            })
            .await
            .map_err(|e| VerifySessionError::RepositoryError(e.to_string()))?;

        Ok(VerifiedSession {
            plan: session.plan,
            transaction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::application::domain::entities::BillingProfile;
    use crate::billing::application::ports::outgoing::{
        BillingRepositoryError, CheckoutSession, GatewaySession, SubscriptionState,
        TransactionStoreError,
    };
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::Mutex;

    struct MockPremiumRepository {
        activations: Mutex<Vec<(Uuid, PlanType, Option<DateTime<Utc>>)>>,
    }

    impl MockPremiumRepository {
        fn new() -> Self {
            Self {
                activations: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl PremiumRepository for MockPremiumRepository {
        async fn fetch_billing_profile(
            &self,
            _user_id: Uuid,
        ) -> Result<BillingProfile, BillingRepositoryError> {
            unimplemented!()
        }

        async fn activate_premium(
            &self,
            user_id: Uuid,
            plan: PlanType,
            expires_at: Option<DateTime<Utc>>,
            _subscription_id: Option<String>,
        ) -> Result<(), BillingRepositoryError> {
            self.activations
                .lock()
                .unwrap()
                .push((user_id, plan, expires_at));
            Ok(())
        }
    }

    struct MockBillingGateway {
        session: Result<GatewaySession, BillingGatewayError>,
    }

    #[async_trait]
    impl BillingGateway for MockBillingGateway {
        async fn create_checkout_session(
            &self,
            _user_id: Uuid,
            _email: &str,
            _plan: PlanType,
        ) -> Result<CheckoutSession, BillingGatewayError> {
            unimplemented!()
        }

        async fn fetch_session(
            &self,
            _session_id: &str,
        ) -> Result<GatewaySession, BillingGatewayError> {
            self.session.clone()
        }

        async fn fetch_subscription(
            &self,
            _subscription_id: &str,
        ) -> Result<SubscriptionState, BillingGatewayError> {
            unimplemented!()
        }

        async fn cancel_subscription(
            &self,
            _subscription_id: &str,
        ) -> Result<(), BillingGatewayError> {
            unimplemented!()
        }
    }

    struct RecordingTransactionStore {
        existing: Mutex<Vec<Transaction>>,
    }

    impl RecordingTransactionStore {
        fn new() -> Self {
            Self {
                existing: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl TransactionStore for RecordingTransactionStore {
        async fn record_transaction(
            &self,
            data: NewTransaction,
        ) -> Result<Transaction, TransactionStoreError> {
            let mut existing = self.existing.lock().unwrap();
            if let Some(found) = existing.iter().find(|t| t.gateway_id == data.gateway_id) {
                return Ok(found.clone());
            }
            let tx = Transaction {
                id: Uuid::new_v4(),
                user_id: data.user_id,
                gateway_id: data.gateway_id,
                gateway: data.gateway,
                amount_cents: data.amount_cents,
                currency: data.currency,
                status: data.status,
                description: data.description,
                created_at: Utc::now(),
            };
            existing.push(tx.clone());
            Ok(tx)
        }

        async fn find_by_id(
            &self,
            _transaction_id: Uuid,
        ) -> Result<Option<Transaction>, TransactionStoreError> {
            unimplemented!()
        }

        async fn list_for_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<Transaction>, TransactionStoreError> {
            unimplemented!()
        }
    }

    fn paid_session(plan: PlanType) -> GatewaySession {
        GatewaySession {
            session_id: "cs_123".to_string(),
            gateway: "stripe".to_string(),
            status: SessionStatus::Paid,
            plan,
            amount_cents: 499,
            currency: "usd".to_string(),
            subscription_id: Some("sub_123".to_string()),
        }
    }

    #[tokio::test]
    async fn paid_monthly_session_activates_premium_with_expiry() {
        let user_id = Uuid::new_v4();
        let use_case = VerifySessionUseCase::new(
            MockPremiumRepository::new(),
            MockBillingGateway {
                session: Ok(paid_session(PlanType::Monthly)),
            },
            RecordingTransactionStore::new(),
        );

        let verified = use_case.execute(user_id, "cs_123").await.unwrap();

        assert_eq!(verified.plan, PlanType::Monthly);
        assert_eq!(verified.transaction.gateway_id, "cs_123");

        let activations = use_case.repository.activations.lock().unwrap();
        assert_eq!(activations.len(), 1);
        let (id, plan, expiry) = &activations[0];
        assert_eq!(*id, user_id);
        assert_eq!(*plan, PlanType::Monthly);
        assert!(expiry.is_some());
    }

    #[tokio::test]
    async fn lifetime_session_has_no_expiry() {
        let use_case = VerifySessionUseCase::new(
            MockPremiumRepository::new(),
            MockBillingGateway {
                session: Ok(paid_session(PlanType::Lifetime)),
            },
            RecordingTransactionStore::new(),
        );

        use_case.execute(Uuid::new_v4(), "cs_123").await.unwrap();

        let activations = use_case.repository.activations.lock().unwrap();
        assert!(activations[0].2.is_none());
    }

    #[tokio::test]
    async fn repeated_verification_reuses_the_transaction() {
        let user_id = Uuid::new_v4();
        let use_case = VerifySessionUseCase::new(
            MockPremiumRepository::new(),
            MockBillingGateway {
                session: Ok(paid_session(PlanType::Monthly)),
            },
            RecordingTransactionStore::new(),
        );

        let first = use_case.execute(user_id, "cs_123").await.unwrap();
        let second = use_case.execute(user_id, "cs_123").await.unwrap();

        assert_eq!(first.transaction.id, second.transaction.id);
        assert_eq!(use_case.transactions.existing.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unpaid_session_is_rejected() {
        let mut session = paid_session(PlanType::Monthly);
        session.status = SessionStatus::Pending;

        let use_case = VerifySessionUseCase::new(
            MockPremiumRepository::new(),
            MockBillingGateway {
                session: Ok(session),
            },
            RecordingTransactionStore::new(),
        );

        let result = use_case.execute(Uuid::new_v4(), "cs_123").await;
        assert!(matches!(result, Err(VerifySessionError::SessionNotPaid)));
    }

    #[tokio::test]
    async fn unknown_session_maps_to_not_found() {
        let use_case = VerifySessionUseCase::new(
            MockPremiumRepository::new(),
            MockBillingGateway {
                session: Err(BillingGatewayError::SessionNotFound),
            },
            RecordingTransactionStore::new(),
        );

        let result = use_case.execute(Uuid::new_v4(), "cs_missing").await;
        assert!(matches!(result, Err(VerifySessionError::SessionNotFound)));
    }
}
