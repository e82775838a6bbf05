use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::schemas::SettleRequest;

/// Largest amount whose value in cents is still an exact `f64` integer.
pub const MAX_AMOUNT: f64 = 9e13;

/// Checks the shape of a snapshot before it reaches the engine. Stale
/// payer or participant ids are accepted; the engine handles them.
pub fn validate(request: &SettleRequest) -> Result<()> {
    let mut ids = HashSet::new();
    for member in &request.members {
        if !ids.insert(member.id.as_str()) {
            return Err(Error::DuplicateMember(member.id.clone()));
        }
    }

    for expense in &request.expenses {
        if !expense.amount.is_finite() || expense.amount < 0.0 || expense.amount > MAX_AMOUNT {
            return Err(Error::InvalidAmount {
                expense: expense.id.clone(),
                amount: expense.amount,
            });
        }
        if expense.participant_ids.is_empty() {
            return Err(Error::NoParticipants(expense.id.clone()));
        }
    }
    Ok(())
}
