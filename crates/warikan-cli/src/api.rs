//! Warikan API Client

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Warikan
pub struct WarikanClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseShareResponse {
    pub name: String,
    pub amount_owed: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub description: String,
    pub total_amount: Decimal,
    pub expense_date: NaiveDate,
    pub payer_name: String,
    pub participants: Vec<ExpenseShareResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantTotalResponse {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantBalanceResponse {
    pub name: String,
    pub paid: Decimal,
    pub owes: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub totals: Vec<ParticipantTotalResponse>,
    pub balances: Vec<ParticipantBalanceResponse>,
    pub grand_total: Decimal,
    pub expense_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ShareAmount {
    pub participant_id: Uuid,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SplitPreviewResponse {
    pub policy: String,
    pub shares: Vec<ShareAmount>,
    pub unassigned: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CreateParticipantRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub total_amount: Decimal,
    pub paid_by: Uuid,
    pub participant_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SplitPreviewRequest {
    pub total_amount: Decimal,
    pub participant_ids: Vec<Uuid>,
}

impl WarikanClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all participants, ordered by name
    pub async fn list_participants(&self) -> Result<Vec<ParticipantResponse>> {
        let resp = self
            .client
            .get(self.url("/warikan/participants"))
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }

    /// Register a participant
    pub async fn create_participant(&self, name: &str) -> Result<ParticipantResponse> {
        let request = CreateParticipantRequest {
            name: name.to_string(),
        };

        let resp = self
            .client
            .post(self.url("/warikan/participants"))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }

    /// Remove a participant
    pub async fn delete_participant(&self, id: Uuid) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/warikan/participants/{}", id)))
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        if resp.status() == StatusCode::CONFLICT {
            let body = resp.text().await.unwrap_or_default();
            bail!("{}. Delete their expenses first.", body);
        }

        ensure_success(resp).await.map(|_| ())
    }

    /// List all expenses, newest first
    pub async fn list_expenses(&self) -> Result<Vec<ExpenseResponse>> {
        let resp = self
            .client
            .get(self.url("/warikan/expenses"))
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }

    /// Record a new expense
    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<ExpenseResponse> {
        let resp = self
            .client
            .post(self.url("/warikan/expenses"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }

    /// Delete an expense
    pub async fn delete_expense(&self, id: Uuid) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/warikan/expenses/{}", id)))
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        ensure_success(resp).await.map(|_| ())
    }

    /// Fetch totals and balances
    pub async fn summary(&self) -> Result<SummaryResponse> {
        let resp = self
            .client
            .get(self.url("/warikan/summary"))
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }

    /// Ask the server how a total would be split
    pub async fn preview_split(
        &self,
        total_amount: Decimal,
        participant_ids: Vec<Uuid>,
    ) -> Result<SplitPreviewResponse> {
        let request = SplitPreviewRequest {
            total_amount,
            participant_ids,
        };

        let resp = self
            .client
            .post(self.url("/warikan/split/preview"))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Warikan API")?;

        parse_json(resp).await
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let resp = ensure_success(resp).await?;
    resp.json().await.context("Failed to parse response")
}
