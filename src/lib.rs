//! Shared-expense settlement: net balances per member and the transfers
//! that settle them.

pub mod balance;
pub mod config;
pub mod error;
pub mod exchange;
pub mod routes;
pub mod schemas;
pub mod validation;

pub use error::{Error, Result};
pub use exchange::{compute_transfers, settle};
pub use schemas::{Expense, Member, MemberBalance, MemberId, SettleRequest, Settlement, Transfer};
