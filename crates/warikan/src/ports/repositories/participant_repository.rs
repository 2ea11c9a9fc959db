//! Participant Repository Port
//!
//! Abstract interface for Participant persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Participant};

/// Repository interface for Participant entities
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find all Participants, ordered by name
    async fn find_all(&self) -> Result<Vec<Participant>, DomainError>;

    /// Insert a new Participant
    ///
    /// Fails with `Conflict` when the name is already taken.
    async fn create(&self, participant: &Participant) -> Result<Participant, DomainError>;

    /// Delete a Participant by ID
    ///
    /// Fails with `ReferentialConstraint` while any expense or owed share
    /// points at the participant; nothing is changed in that case.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
