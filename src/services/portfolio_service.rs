use chrono::Utc;
use serde::Serialize;

use crate::error::LedgerError;
use crate::models::Order;
use crate::services::{order_service, trading_service, user_service, valuation_service};
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub uid: String,
    pub total_value: i64,
    pub total_deposited: f64,
    pub gain: f64,
    pub gain_pct: f64,
    pub current_multiplier: f64,
    pub days_since_start: i64,
    pub orders: Vec<Order>,
    pub withdrawn: f64,
    pub has_pending_withdraw: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub uid: String,
    pub total_deposited: f64,
    pub total_value: i64,
    pub withdrawn: f64,
    pub created_at: i64,
}

/// The user-facing portfolio view: current value under the growth curve,
/// gains, order history and whether a withdrawal is awaiting the admin.
pub async fn report(state: &AppState, uid: &str) -> Result<PortfolioView, LedgerError> {
    let user = user_service::get(state, uid).await?;
    let now = Utc::now().timestamp_millis();

    let total_value = state.curve.portfolio_value(&user.deposits, now);
    let gain = total_value as f64 - user.total_deposited;
    let gain_pct = if user.total_deposited > 0.0 {
        (gain / user.total_deposited * 1000.0).round() / 10.0
    } else {
        0.0
    };

    // Account-level multiplier runs from creation, independent of the
    // per-deposit multipliers inside total_value.
    let overall_days = valuation_service::days_between(user.created_at, now);

    Ok(PortfolioView {
        uid: user.uid.clone(),
        total_value,
        total_deposited: user.total_deposited,
        gain,
        gain_pct,
        current_multiplier: state.curve.multiplier(overall_days),
        days_since_start: overall_days.floor() as i64,
        orders: order_service::list_for_user(state, uid).await?,
        withdrawn: user.withdrawn,
        has_pending_withdraw: trading_service::has_pending_withdrawal(state, uid).await?,
    })
}

/// One summary row per registered uid; uids whose record is gone are skipped.
pub async fn list_all_users(state: &AppState) -> Result<Vec<UserSummary>, LedgerError> {
    let uids = user_service::list_uids(state).await?;
    let now = Utc::now().timestamp_millis();

    let mut out = Vec::with_capacity(uids.len());
    for uid in uids {
        if let Some(user) = user_service::find(state, &uid).await? {
            out.push(UserSummary {
                uid: user.uid.clone(),
                total_deposited: user.total_deposited,
                total_value: state.curve.portfolio_value(&user.deposits, now),
                withdrawn: user.withdrawn,
                created_at: user.created_at,
            });
        }
    }
    Ok(out)
}
