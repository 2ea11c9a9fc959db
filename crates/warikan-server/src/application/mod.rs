//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the pure split / summary computations.

mod expense_service;
mod participant_service;
mod summary_service;

pub use expense_service::ExpenseService;
pub use participant_service::ParticipantService;
pub use summary_service::SummaryService;
