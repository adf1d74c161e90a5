use chrono::Utc;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::models::{Deposit, DepositKind, User};
use crate::store::{self, keys};
use crate::AppState;

/// Gets the user record, or `None` if the uid is unknown.
pub async fn find(state: &AppState, uid: &str) -> Result<Option<User>, LedgerError> {
    Ok(store::get_json(state.store.as_ref(), &keys::user(uid)).await?)
}

pub async fn get(state: &AppState, uid: &str) -> Result<User, LedgerError> {
    find(state, uid)
        .await?
        .ok_or_else(|| LedgerError::user_not_found(uid))
}

/// Creates the user if missing, seeded with one initial deposit of the
/// configured base amount. Calling again with the same uid returns the
/// stored record untouched.
pub async fn initialize(state: &AppState, uid: Option<String>) -> Result<User, LedgerError> {
    let uid = uid.unwrap_or_else(|| Uuid::new_v4().simple().to_string()[..8].to_string());

    if let Some(existing) = find(state, &uid).await? {
        return Ok(existing);
    }

    let now = Utc::now().timestamp_millis();
    let user = User {
        uid: uid.clone(),
        created_at: now,
        deposits: vec![Deposit {
            amount: state.settings.base_deposit,
            timestamp: now,
            kind: DepositKind::Initial,
            order_id: None,
        }],
        total_deposited: state.settings.base_deposit,
        withdrawn: 0.0,
    };
    store::put_json(state.store.as_ref(), &keys::user(&uid), &user).await?;

    let mut index: Vec<String> = store::get_json(state.store.as_ref(), keys::USERS_INDEX)
        .await?
        .unwrap_or_default();
    if !index.iter().any(|u| u == &uid) {
        index.push(uid.clone());
        store::put_json(state.store.as_ref(), keys::USERS_INDEX, &index).await?;
    }

    tracing::info!(uid = %uid, "initialized user");
    Ok(user)
}

/// All registered uids, in registration order.
pub async fn list_uids(state: &AppState) -> Result<Vec<String>, LedgerError> {
    Ok(store::get_json(state.store.as_ref(), keys::USERS_INDEX)
        .await?
        .unwrap_or_default())
}

/// Appends an `additional` deposit from an approved buy order.
pub async fn append_deposit(
    state: &AppState,
    uid: &str,
    amount: f64,
    order_id: &str,
) -> Result<(), LedgerError> {
    let mut user = get(state, uid).await?;
    user.deposits.push(Deposit {
        amount,
        timestamp: Utc::now().timestamp_millis(),
        kind: DepositKind::Additional,
        order_id: Some(order_id.to_string()),
    });
    user.total_deposited += amount;
    store::put_json(state.store.as_ref(), &keys::user(uid), &user).await?;
    Ok(())
}

/// Applies an approved withdrawal. Full liquidation: the entire deposit
/// history is cleared and `total_deposited` zeroed no matter how much was
/// withdrawn. Domain rule, not an accident.
pub async fn apply_withdrawal_clear(
    state: &AppState,
    uid: &str,
    amount: f64,
) -> Result<(), LedgerError> {
    let mut user = get(state, uid).await?;
    user.withdrawn += amount;
    user.deposits.clear();
    user.total_deposited = 0.0;
    store::put_json(state.store.as_ref(), &keys::user(uid), &user).await?;
    Ok(())
}
