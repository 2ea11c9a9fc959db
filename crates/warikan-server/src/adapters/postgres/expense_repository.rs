//! PostgreSQL implementation of ExpenseRepository

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use warikan::{DomainError, Expense, ExpenseDetail, ExpenseRepository, OwedShare, ShareDetail};

use super::{is_check_violation, is_foreign_key_violation, repository_error};

const EXPENSE_COLUMNS: &str = r#"
    SELECT e.id, e.description, e.total_amount, e.expense_date, e.created_at, e.paid_by,
           p.name AS payer_name
    FROM expenses e
    JOIN participants p ON p.id = e.paid_by
"#;

/// PostgreSQL implementation of ExpenseRepository
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load owed shares (with debtor names) for a batch of expenses
    async fn find_shares(
        &self,
        expense_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<ShareDetail>>, DomainError> {
        if expense_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT ep.expense_id, ep.participant_id, p.name, ep.amount_owed
            FROM expense_participants ep
            JOIN participants p ON p.id = ep.participant_id
            WHERE ep.expense_id = ANY($1)
            ORDER BY p.name
            "#,
        )
        .bind(expense_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let mut by_expense: HashMap<Uuid, Vec<ShareDetail>> = HashMap::new();
        for row in rows {
            by_expense
                .entry(row.expense_id)
                .or_default()
                .push(ShareDetail {
                    participant_id: row.participant_id,
                    name: row.name,
                    amount_owed: row.amount_owed,
                });
        }

        Ok(by_expense)
    }

    async fn attach_shares(&self, rows: Vec<ExpenseRow>) -> Result<Vec<ExpenseDetail>, DomainError> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut shares = self.find_shares(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let expense_shares = shares.remove(&row.id).unwrap_or_default();
                row.into_detail(expense_shares)
            })
            .collect())
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    description: String,
    total_amount: Decimal,
    expense_date: chrono::NaiveDate,
    created_at: chrono::DateTime<chrono::Utc>,
    paid_by: Uuid,
    payer_name: String,
}

impl ExpenseRow {
    fn into_detail(self, shares: Vec<ShareDetail>) -> ExpenseDetail {
        ExpenseDetail {
            expense: Expense {
                id: self.id,
                description: self.description,
                total_amount: self.total_amount,
                expense_date: self.expense_date,
                created_at: self.created_at,
                paid_by: self.paid_by,
            },
            payer_name: self.payer_name,
            shares,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShareRow {
    expense_id: Uuid,
    participant_id: Uuid,
    name: String,
    amount_owed: Decimal,
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    async fn find_all_detailed(&self) -> Result<Vec<ExpenseDetail>, DomainError> {
        let query = format!(
            "{} ORDER BY e.expense_date DESC, e.created_at DESC",
            EXPENSE_COLUMNS
        );
        let rows = sqlx::query_as::<_, ExpenseRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        self.attach_shares(rows).await
    }

    async fn find_by_id_detailed(&self, id: Uuid) -> Result<Option<ExpenseDetail>, DomainError> {
        let query = format!("{} WHERE e.id = $1", EXPENSE_COLUMNS);
        let row = sqlx::query_as::<_, ExpenseRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        match row {
            Some(row) => Ok(self.attach_shares(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create(
        &self,
        expense: &Expense,
        shares: &[OwedShare],
    ) -> Result<ExpenseDetail, DomainError> {
        let map_write_error = |e: sqlx::Error| {
            if is_foreign_key_violation(&e) {
                DomainError::validation("Payer and participants must be existing participants")
            } else if is_check_violation(&e) {
                DomainError::validation("Expense amounts or description are out of range")
            } else {
                repository_error(e)
            }
        };

        // Expense row and owed shares commit together or not at all.
        let mut tx = self.pool.begin().await.map_err(repository_error)?;

        sqlx::query(
            r#"
            INSERT INTO expenses (id, description, total_amount, expense_date, created_at, paid_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(expense.id)
        .bind(&expense.description)
        .bind(expense.total_amount)
        .bind(expense.expense_date)
        .bind(expense.created_at)
        .bind(expense.paid_by)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        for share in shares {
            sqlx::query(
                r#"
                INSERT INTO expense_participants (expense_id, participant_id, amount_owed)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(share.expense_id)
            .bind(share.participant_id)
            .bind(share.amount_owed)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        tx.commit().await.map_err(repository_error)?;

        self.find_by_id_detailed(expense.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Expense", expense.id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // expense_participants rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
