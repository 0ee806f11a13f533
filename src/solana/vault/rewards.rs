/// Projected earnings for a staking plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardEstimate {
    /// Rewards accrued per day
    pub daily: f64,

    /// Principal plus rewards at the end of the lock-up
    pub total_return: f64,
}

/// Linear APY projection used by the staking calculator.
pub fn estimate_rewards(amount: f64, apy_percent: f64, duration_days: u32) -> RewardEstimate {
    let daily_rate = apy_percent / 100.0 / 365.0;
    let daily = amount * daily_rate;
    let total_reward = amount * (apy_percent / 100.0) * (duration_days as f64 / 365.0);

    RewardEstimate {
        daily,
        total_return: amount + total_reward,
    }
}
