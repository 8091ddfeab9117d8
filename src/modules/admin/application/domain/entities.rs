use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::permissions::{AdminRole, Permission};

/// A dashboard operator. `permissions` is the effective set: either the
/// role's defaults or the explicit overrides stored at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: AdminRole,
    pub permissions: Vec<Permission>,
    pub created_at: DateTime<Utc>,
}
