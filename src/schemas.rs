use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MemberId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(alias = "email", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub payer_id: MemberId,
    pub amount: f64,
    #[serde(alias = "involvedUserIds")]
    pub participant_ids: Vec<MemberId>,
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// A single payment instruction: `from` pays `amount` to `to`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: f64,
}

/// Rounded net position of one member. Positive means the member is owed money.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalance {
    pub member_id: MemberId,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Settlement {
    pub balances: Vec<MemberBalance>,
    pub transfers: Vec<Transfer>,
}

/// The group snapshot sent by the surrounding application.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SettleRequest {
    #[serde(default, alias = "users")]
    pub members: Vec<Member>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, display_name: impl Into<String>) -> Self {
        Member {
            id: id.into(),
            display_name: display_name.into(),
            contact: None,
        }
    }
}

impl Expense {
    /// Expense stamped with the current time and no description.
    pub fn new(
        id: impl Into<String>,
        payer_id: impl Into<MemberId>,
        amount: f64,
        participant_ids: &[&str],
    ) -> Self {
        Expense {
            id: id.into(),
            payer_id: payer_id.into(),
            amount,
            participant_ids: participant_ids.iter().map(|p| p.to_string()).collect(),
            timestamp: Utc::now(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_reference_store_field_names() {
        let json = r#"{
            "users": [{"id": "u1", "name": "Ana", "email": "ana@example.com"}],
            "expenses": [{
                "id": "e1",
                "payerId": "u1",
                "amount": 12.5,
                "description": "Lunch",
                "date": "2026-03-01T12:00:00Z",
                "involvedUserIds": ["u1"]
            }]
        }"#;
        let request: SettleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.members[0].display_name, "Ana");
        assert_eq!(request.members[0].contact.as_deref(), Some("ana@example.com"));
        assert_eq!(request.expenses[0].participant_ids, vec!["u1".to_string()]);
        assert_eq!(request.expenses[0].description, "Lunch");
    }

    #[test]
    fn writes_camel_case_names() {
        let value = serde_json::to_value(Member::new("u1", "Ana")).unwrap();
        assert_eq!(value, serde_json::json!({"id": "u1", "displayName": "Ana"}));
    }
}
