//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Participant: named party in the ledger
//! - Expense: transaction with payer and owed shares

mod expense;
mod participant;

pub use expense::*;
pub use participant::*;
