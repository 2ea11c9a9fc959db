//! Domain Services
//!
//! Stateless computations over domain entities.
//! - split: divide an expense total between participants
//! - summary: per-participant totals and net balances

mod split;
mod summary;

pub use split::*;
pub use summary::*;
