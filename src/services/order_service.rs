use chrono::Utc;

use crate::error::LedgerError;
use crate::models::{Order, OrderStatus};
use crate::store::{self, keys};
use crate::AppState;

pub async fn find(state: &AppState, order_id: &str) -> Result<Option<Order>, LedgerError> {
    Ok(store::get_json(state.store.as_ref(), &keys::order(order_id)).await?)
}

pub async fn get(state: &AppState, order_id: &str) -> Result<Order, LedgerError> {
    find(state, order_id)
        .await?
        .ok_or_else(|| LedgerError::order_not_found(order_id))
}

/// Persists the order and registers it in the pending index.
pub async fn create(state: &AppState, order: &Order) -> Result<(), LedgerError> {
    store::put_json(state.store.as_ref(), &keys::order(&order.order_id), order).await?;

    let mut pending = pending_ids(state).await?;
    pending.push(order.order_id.clone());
    store::put_json(state.store.as_ref(), keys::PENDING_INDEX, &pending).await?;
    Ok(())
}

async fn pending_ids(state: &AppState) -> Result<Vec<String>, LedgerError> {
    Ok(store::get_json(state.store.as_ref(), keys::PENDING_INDEX)
        .await?
        .unwrap_or_default())
}

/// Resolves the pending index to order records. Ids whose record is gone are
/// skipped rather than surfaced.
pub async fn list_pending(state: &AppState) -> Result<Vec<Order>, LedgerError> {
    let ids = pending_ids(state).await?;
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(order) = find(state, &id).await? {
            out.push(order);
        }
    }
    Ok(out)
}

/// A user's full order history, newest first. Scans the whole `order:`
/// prefix; fine at this scale.
pub async fn list_for_user(state: &AppState, uid: &str) -> Result<Vec<Order>, LedgerError> {
    let order_keys = state.store.list(keys::ORDER_PREFIX).await?;
    let mut out = Vec::new();
    for key in order_keys {
        let record: Option<Order> = store::get_json(state.store.as_ref(), &key).await?;
        if let Some(order) = record {
            if order.uid == uid {
                out.push(order);
            }
        }
    }
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(out)
}

/// Filters the id out of the pending index. No-op if already absent.
pub async fn remove_from_pending(state: &AppState, order_id: &str) -> Result<(), LedgerError> {
    let pending = pending_ids(state).await?;
    let filtered: Vec<String> = pending.into_iter().filter(|id| id != order_id).collect();
    store::put_json(state.store.as_ref(), keys::PENDING_INDEX, &filtered).await?;
    Ok(())
}

/// Marks a pending order approved and stamps `approvedAt`. Any other current
/// status (or a missing record) is `InvalidState`; approved and rejected
/// are terminal.
pub async fn mark_approved(state: &AppState, order_id: &str) -> Result<Order, LedgerError> {
    let mut order = find(state, order_id)
        .await?
        .ok_or_else(|| LedgerError::InvalidState(format!("order {order_id} not pending")))?;
    if order.status != OrderStatus::Pending {
        return Err(LedgerError::InvalidState(format!("order {order_id} not pending")));
    }
    order.status = OrderStatus::Approved;
    order.approved_at = Some(Utc::now().timestamp_millis());
    store::put_json(state.store.as_ref(), &keys::order(order_id), &order).await?;
    Ok(order)
}

/// Marks an order rejected and stamps `rejectedAt`. Unlike approval there is
/// no pending-state requirement; only a missing record fails.
pub async fn mark_rejected(state: &AppState, order_id: &str) -> Result<Order, LedgerError> {
    let mut order = get(state, order_id).await?;
    order.status = OrderStatus::Rejected;
    order.rejected_at = Some(Utc::now().timestamp_millis());
    store::put_json(state.store.as_ref(), &keys::order(order_id), &order).await?;
    Ok(order)
}
