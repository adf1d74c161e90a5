//! Abstract durable key-value store.
//!
//! Consistency contract: `get`, `put` and `list` are each individually
//! atomic, but there are no multi-key transactions and no compare-and-swap.
//! Read-then-write sequences over the index keys can therefore lose updates
//! under concurrent requests; callers accept that window.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("backend: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;
    /// Keys under `prefix`, in lexicographic order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

pub type SharedStore = Arc<dyn KvStore>;

/// Key space shared with the original deployment's KV namespace.
pub mod keys {
    pub const USERS_INDEX: &str = "index:users";
    pub const PENDING_INDEX: &str = "index:pending";
    pub const ORDER_PREFIX: &str = "order:";

    pub fn user(uid: &str) -> String {
        format!("user:{uid}")
    }

    pub fn order(order_id: &str) -> String {
        format!("{ORDER_PREFIX}{order_id}")
    }
}

pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub async fn put_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.put(key, serde_json::to_value(value)?).await
}
