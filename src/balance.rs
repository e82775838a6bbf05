use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::schemas::{Expense, Member, MemberBalance, MemberId};

pub type Balance = HashMap<MemberId, f64>;

/// Balances within this distance of zero count as settled.
pub const TOLERANCE: f64 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct PersonalBalance {
    pub id: MemberId,
    pub balance: f64,
}

/// Net balance of every member. Only ids present in `members` take part;
/// stale payer or participant ids are ignored.
pub fn compute_balances(members: &[Member], expenses: &[Expense]) -> Balance {
    let mut balance: Balance = members.iter().map(|m| (m.id.clone(), 0.0)).collect();

    for expense in expenses {
        let receivers: Vec<&MemberId> = expense
            .participant_ids
            .iter()
            .filter(|id| balance.contains_key(*id))
            .collect();
        if receivers.is_empty() {
            debug!(expense = %expense.id, "skipping expense without known participants");
            continue;
        }

        let amount_per_receiver = expense.amount / receivers.len() as f64;
        if let Some(payer) = balance.get_mut(&expense.payer_id) {
            *payer += expense.amount;
        }
        for receiver in receivers {
            if let Some(v) = balance.get_mut(receiver) {
                *v -= amount_per_receiver;
            }
        }
    }
    balance
}

/// Rounded balances in member order. A repeated member id is reported once.
pub fn rounded_balances(members: &[Member], expenses: &[Expense]) -> Vec<MemberBalance> {
    round_balances(members, &compute_balances(members, expenses))
}

pub(crate) fn round_balances(members: &[Member], balance: &Balance) -> Vec<MemberBalance> {
    unique_members(members)
        .map(|id| MemberBalance {
            member_id: id.clone(),
            balance: round_to_2_decimals(balance[id]),
        })
        .collect()
}

/// Rounded balance of a single member, `None` if the id is not a member.
pub fn balance_of(members: &[Member], expenses: &[Expense], id: &str) -> Option<f64> {
    compute_balances(members, expenses)
        .get(id)
        .copied()
        .map(round_to_2_decimals)
}

/// Splits members into debtors and creditors, both holding positive
/// magnitudes. Members within the tolerance are left out.
pub fn classify(
    members: &[Member],
    expenses: &[Expense],
) -> (Vec<PersonalBalance>, Vec<PersonalBalance>) {
    split_balances(members, &compute_balances(members, expenses))
}

pub(crate) fn split_balances(
    members: &[Member],
    balance: &Balance,
) -> (Vec<PersonalBalance>, Vec<PersonalBalance>) {
    let mut payers = Vec::new();
    let mut receivers = Vec::new();

    for id in unique_members(members) {
        let rounded = round_to_2_decimals(balance[id]);
        if rounded < -TOLERANCE {
            payers.push(PersonalBalance {
                id: id.clone(),
                balance: -rounded,
            });
        } else if rounded > TOLERANCE {
            receivers.push(PersonalBalance {
                id: id.clone(),
                balance: rounded,
            });
        }
    }
    (payers, receivers)
}

/// Rounds half away from zero to cents.
pub fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

fn unique_members(members: &[Member]) -> impl Iterator<Item = &MemberId> {
    let mut seen = HashSet::new();
    members
        .iter()
        .map(|m| &m.id)
        .filter(move |id| seen.insert(*id))
}
