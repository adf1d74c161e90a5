use thiserror::Error;

use crate::store::StoreError;

/// Typed failures produced by the core services. The HTTP layer translates
/// these into status codes; nothing in here knows about transports.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid order state: {0}")]
    InvalidState(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    pub fn user_not_found(uid: &str) -> Self {
        LedgerError::NotFound(format!("user {uid}"))
    }

    pub fn order_not_found(order_id: &str) -> Self {
        LedgerError::NotFound(format!("order {order_id}"))
    }
}
