use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Reorder Links Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ReorderLinksCommand {
    owner: Uuid,
    ordered_ids: Vec<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReorderLinksCommandError {
    #[error("Duplicate link id in order list")]
    DuplicateIds,
}

impl ReorderLinksCommand {
    pub fn new(owner: Uuid, ordered_ids: Vec<Uuid>) -> Result<Self, ReorderLinksCommandError> {
        let mut seen = std::collections::HashSet::new();
        if !ordered_ids.iter().all(|id| seen.insert(*id)) {
            return Err(ReorderLinksCommandError::DuplicateIds);
        }
        Ok(Self { owner, ordered_ids })
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn ordered_ids(&self) -> &[Uuid] {
        &self.ordered_ids
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReorderLinksError {
    /// The submitted list does not match the owner's collection, either
    /// an id that is not theirs or a link of theirs that is missing.
    #[error("Order list does not match the link collection")]
    IdMismatch,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReorderLinksUseCase: Send + Sync {
    /// Replaces the collection order with the submitted full id list.
    /// Idempotent; the same list applied twice yields the same state.
    async fn execute(&self, command: ReorderLinksCommand) -> Result<(), ReorderLinksError>;
}
