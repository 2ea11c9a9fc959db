//! Participant Application Service (Use Case)
//!
//! Orchestrates domain operations for Participant management.

use std::sync::Arc;
use uuid::Uuid;

use warikan::{DomainError, Participant, ParticipantRepository};

/// Application service for Participant operations
pub struct ParticipantService<R: ParticipantRepository> {
    repo: Arc<R>,
}

impl<R: ParticipantRepository> ParticipantService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Participants, ordered by name
    pub async fn list(&self) -> Result<Vec<Participant>, DomainError> {
        self.repo.find_all().await
    }

    /// Register a new Participant
    pub async fn create(&self, name: String) -> Result<Participant, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("Rejected participant with empty name");
            return Err(DomainError::validation("Please enter a name"));
        }

        let participant = Participant::new(name.to_string());
        let saved = self.repo.create(&participant).await?;

        tracing::info!("Created Participant: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Remove a Participant
    ///
    /// Refused while any expense refers to them; the ledger is left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        match self.repo.delete(id).await {
            Ok(deleted) => {
                if deleted {
                    tracing::info!("Deleted Participant: {}", id);
                }
                Ok(deleted)
            }
            Err(e @ DomainError::ReferentialConstraint { .. }) => {
                tracing::warn!("Participant {} not deleted: {}", id, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
