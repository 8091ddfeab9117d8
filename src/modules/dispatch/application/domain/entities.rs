use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who a bulk dispatch goes to. Stored as `all` or `user:<uuid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchTarget {
    All,
    User(Uuid),
}

impl DispatchTarget {
    pub fn render(&self) -> String {
        match self {
            DispatchTarget::All => "all".to_string(),
            DispatchTarget::User(id) => format!("user:{}", id),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(DispatchTarget::All);
        }
        let id = s.strip_prefix("user:")?;
        Uuid::parse_str(id).ok().map(DispatchTarget::User)
    }
}

/// In-app announcement record, immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub target: DispatchTarget,
    pub recipients: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    Sent,
    Partial,
    Failed,
}

impl EmailStatus {
    /// Aggregate outcome of a fan-out. Frozen on the record at dispatch
    /// time; later retries are new dispatches.
    pub fn from_counts(attempted: i32, delivered: i32) -> Self {
        if attempted > 0 && delivered == 0 {
            EmailStatus::Failed
        } else if delivered < attempted {
            EmailStatus::Partial
        } else {
            EmailStatus::Sent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Sent => "sent",
            EmailStatus::Partial => "partial",
            EmailStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sent" => Some(EmailStatus::Sent),
            "partial" => Some(EmailStatus::Partial),
            "failed" => Some(EmailStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub target: DispatchTarget,
    pub recipients: i32,
    pub delivered: i32,
    pub status: EmailStatus,
    pub created_at: DateTime<Utc>,
}
