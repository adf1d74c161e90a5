use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositKind {
    Initial,
    Additional,
}

/// A single paid-in amount. Immutable once appended; `order_id` links the
/// deposit back to the approved buy order that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub amount: f64,
    /// Unix milliseconds.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: DepositKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    /// Unix milliseconds.
    pub created_at: i64,
    pub deposits: Vec<Deposit>,
    pub total_deposited: f64,
    #[serde(default)]
    pub withdrawn: f64,
}
