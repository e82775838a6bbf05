use tracing::debug;

use crate::balance::{
    compute_balances, round_balances, round_to_2_decimals, split_balances, Balance,
    PersonalBalance, TOLERANCE,
};
use crate::schemas::{Expense, Member, Settlement, Transfer};

// Pairs the largest debts with the largest credits. Each step retires at least
// one side, so the result never exceeds payers + receivers - 1 transfers.
fn match_greedy(
    mut payers: Vec<PersonalBalance>,
    mut receivers: Vec<PersonalBalance>,
) -> Vec<Transfer> {
    payers.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    receivers.sort_by(|a, b| b.balance.total_cmp(&a.balance));

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < payers.len() && j < receivers.len() {
        let payer = &mut payers[i];
        let receiver = &mut receivers[j];

        // balances too large to round to cents cannot be settled
        if !(payer.balance.is_finite() && receiver.balance.is_finite()) {
            break;
        }
        let amount = round_to_2_decimals(payer.balance.min(receiver.balance));
        if amount <= 0.0 {
            break;
        }
        transfers.push(Transfer {
            from: payer.id.clone(),
            to: receiver.id.clone(),
            amount,
        });

        payer.balance = round_to_2_decimals(payer.balance - amount);
        receiver.balance = round_to_2_decimals(receiver.balance - amount);

        if payer.balance < TOLERANCE {
            i += 1;
        }
        if receiver.balance < TOLERANCE {
            j += 1;
        }
    }
    transfers
}

/// Transfers that settle every member's balance, largest debts first.
pub fn compute_transfers(members: &[Member], expenses: &[Expense]) -> Vec<Transfer> {
    transfers_from(members, &compute_balances(members, expenses))
}

fn transfers_from(members: &[Member], balance: &Balance) -> Vec<Transfer> {
    let (payers, receivers) = split_balances(members, balance);
    let (debtors, creditors) = (payers.len(), receivers.len());
    let transfers = match_greedy(payers, receivers);
    debug!(debtors, creditors, transfers = transfers.len(), "computed transfers");
    transfers
}

/// Rounded balances together with the transfers that settle them.
pub fn settle(members: &[Member], expenses: &[Expense]) -> Settlement {
    let balance = compute_balances(members, expenses);
    Settlement {
        balances: round_balances(members, &balance),
        transfers: transfers_from(members, &balance),
    }
}
