use crate::models::Deposit;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days between two unix-millisecond timestamps.
pub fn days_between(from_ms: i64, to_ms: i64) -> f64 {
    (to_ms - from_ms) as f64 / MS_PER_DAY
}

/// The growth curve: an exponential ramp from 1x to `max_multiplier` over
/// `horizon_days`, capped afterwards. Pure; same inputs, same outputs.
#[derive(Debug, Clone, Copy)]
pub struct GrowthCurve {
    max_multiplier: f64,
    horizon_days: f64,
}

impl GrowthCurve {
    pub fn new(max_multiplier: f64, horizon_days: f64) -> Self {
        GrowthCurve { max_multiplier, horizon_days }
    }

    /// Multiplier after `elapsed_days`, rounded to two decimals on the ramp.
    pub fn multiplier(&self, elapsed_days: f64) -> f64 {
        if elapsed_days <= 0.0 {
            return 1.0;
        }
        if elapsed_days >= self.horizon_days {
            return self.max_multiplier;
        }
        (self.max_multiplier.powf(elapsed_days / self.horizon_days) * 100.0).round() / 100.0
    }

    /// Aggregate value of a deposit sequence at `now_ms`. Each deposit grows
    /// under its own elapsed time; rounding happens once, on the sum.
    pub fn portfolio_value(&self, deposits: &[Deposit], now_ms: i64) -> i64 {
        let total: f64 = deposits
            .iter()
            .map(|d| d.amount * self.multiplier(days_between(d.timestamp, now_ms)))
            .sum();
        total.round() as i64
    }
}
