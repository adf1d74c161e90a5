use chrono::Utc;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{Order, OrderKind, OrderStatus};
use crate::services::{order_service, user_service};
use crate::AppState;

fn new_order_id(prefix: &str) -> String {
    format!("{prefix}{}", &Uuid::new_v4().simple().to_string()[..8])
}

/// True if any pending withdraw order exists for `uid`.
pub async fn has_pending_withdrawal(state: &AppState, uid: &str) -> Result<bool, LedgerError> {
    let pending = order_service::list_pending(state).await?;
    Ok(pending.iter().any(|o| {
        o.uid == uid && o.kind == OrderKind::Withdraw && o.status == OrderStatus::Pending
    }))
}

pub async fn create_buy_order(
    state: &AppState,
    uid: &str,
    amount: f64,
    shares: f64,
) -> Result<Order, LedgerError> {
    if amount <= 0.0 {
        return Err(LedgerError::InvalidInput("amount must be positive".into()));
    }
    if shares <= 0.0 {
        return Err(LedgerError::InvalidInput("shares must be positive".into()));
    }
    if user_service::find(state, uid).await?.is_none() {
        return Err(LedgerError::user_not_found(uid));
    }

    let order = Order {
        order_id: new_order_id("ord_"),
        uid: uid.to_string(),
        amount,
        shares: Some(shares),
        kind: OrderKind::Buy,
        status: OrderStatus::Pending,
        created_at: Utc::now().timestamp_millis(),
        approved_at: None,
        rejected_at: None,
    };
    order_service::create(state, &order).await?;

    tracing::info!(order_id = %order.order_id, uid = %uid, amount, "created buy order");
    Ok(order)
}

/// At most one pending withdrawal per user. The check is read-then-write
/// against the pending index, so two concurrent calls can both pass it; the
/// store offers nothing stronger.
pub async fn create_withdraw_order(
    state: &AppState,
    uid: &str,
    amount: f64,
) -> Result<Order, LedgerError> {
    if amount <= 0.0 {
        return Err(LedgerError::InvalidInput("amount must be positive".into()));
    }
    if user_service::find(state, uid).await?.is_none() {
        return Err(LedgerError::user_not_found(uid));
    }
    if has_pending_withdrawal(state, uid).await? {
        return Err(LedgerError::Conflict("withdrawal already pending".into()));
    }

    let order = Order {
        order_id: new_order_id("wdr_"),
        uid: uid.to_string(),
        amount,
        shares: None,
        kind: OrderKind::Withdraw,
        status: OrderStatus::Pending,
        created_at: Utc::now().timestamp_millis(),
        approved_at: None,
        rejected_at: None,
    };
    order_service::create(state, &order).await?;

    tracing::info!(order_id = %order.order_id, uid = %uid, amount, "created withdraw order");
    Ok(order)
}

/// Admin approval. Marks the order approved, applies the ledger mutation
/// (full liquidation for withdrawals, deposit append for buys), then drops
/// the order from the pending index.
///
/// The mark and the ledger write are two separate puts with no rollback: a
/// failure between them leaves an approved-but-unapplied order. Known gap.
pub async fn approve(state: &AppState, order_id: &str) -> Result<Order, LedgerError> {
    let order = order_service::mark_approved(state, order_id).await?;

    let Some(_user) = user_service::find(state, &order.uid).await? else {
        // Orphaned order: keep the approved mark, skip the ledger and leave
        // the pending index alone, matching the deployed behavior.
        tracing::warn!(order_id = %order_id, uid = %order.uid, "approved order for missing user");
        return Ok(order);
    };

    match order.kind {
        OrderKind::Withdraw => {
            user_service::apply_withdrawal_clear(state, &order.uid, order.amount).await?;
        }
        OrderKind::Buy => {
            user_service::append_deposit(state, &order.uid, order.amount, &order.order_id).await?;
        }
    }

    order_service::remove_from_pending(state, order_id).await?;

    tracing::info!(order_id = %order_id, uid = %order.uid, "approved order");
    Ok(order)
}

/// Admin rejection. Never touches the user ledger.
pub async fn reject(state: &AppState, order_id: &str) -> Result<Order, LedgerError> {
    let order = order_service::mark_rejected(state, order_id).await?;
    order_service::remove_from_pending(state, order_id).await?;

    tracing::info!(order_id = %order_id, uid = %order.uid, "rejected order");
    Ok(order)
}
