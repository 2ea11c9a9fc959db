//! Warikan Domain Library
//!
//! Core domain types and interfaces for the Warikan (割り勘) expense splitter.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Participant, Expense, OwedShare)
//!   - `value_objects/`: Immutable value types (SplitPolicy, cent rounding)
//!   - `services/`: Split Calculator and Expense Aggregator
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use warikan::domain::{compute_shares, compute_balances, SplitPolicy};
//! use warikan::ports::{ExpenseRepository, ParticipantRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compute_balances, compute_shares, compute_totals, grand_total, summarize, to_cents,
    DomainError, Expense, ExpenseDetail, OwedShare, Participant, ParticipantBalance,
    ParticipantTotal, ShareDetail, SplitPolicy, Summary,
};
pub use ports::{ExpenseRepository, ParticipantRepository};
