//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Expense models
    CreateExpenseRequest,
    // Participant models
    CreateParticipantRequest,
    ExpenseResponse,
    ExpenseShareResponse,
    // Summary models
    ParticipantBalanceResponse,
    ParticipantResponse,
    ParticipantTotalResponse,
    ShareAmount,
    SplitPreviewRequest,
    SplitPreviewResponse,
    SummaryResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Participant endpoints
        super::participant::list_participants,
        super::participant::create_participant,
        super::participant::delete_participant,
        // Expense endpoints
        super::expense::list_expenses,
        super::expense::create_expense,
        super::expense::get_expense,
        super::expense::delete_expense,
        super::expense::preview_split,
        // Summary endpoints
        super::summary::get_summary,
        super::summary::get_totals,
        super::summary::get_balances,
    ),
    info(
        title = "Warikan API",
        version = "0.1.0",
        description = "割り勘 (Warikan) - Shared expense splitting API\n\nRecord who paid, split it evenly, see who owes whom.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Participant", description = "Participants - people sharing expenses"),
        (name = "Expense", description = "Expenses - recorded payments and their split"),
        (name = "Summary", description = "Summary - totals and net balances"),
    ),
    components(
        schemas(
            // Participant
            CreateParticipantRequest,
            ParticipantResponse,
            // Expense
            CreateExpenseRequest,
            ExpenseResponse,
            ExpenseShareResponse,
            SplitPreviewRequest,
            SplitPreviewResponse,
            ShareAmount,
            // Summary
            ParticipantTotalResponse,
            ParticipantBalanceResponse,
            SummaryResponse,
        )
    ),
)]
pub struct ApiDoc;
