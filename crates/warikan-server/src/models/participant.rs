//! Participant - named party in the ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use warikan::Participant;

// ============================================
// Request/Response DTOs
// ============================================

/// Create Participant request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateParticipantRequest {
    pub name: String,
}

/// Participant response
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name,
            created_at: participant.created_at,
        }
    }
}
