//! Warikan Data Models
//!
//! Request/response DTOs for the HTTP API.
//! - Participant: named party in the ledger
//! - Expense: transaction with owed shares
//! - Summary: totals and balances

mod expense;
mod participant;
mod summary;

pub use expense::*;
pub use participant::*;
pub use summary::*;
