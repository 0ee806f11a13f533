use chrono::Utc;
use serde::{Deserialize, Serialize};

/// An active position in the staking vault, decoded from the user
/// stake account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakePosition {
    pub staked_amount: f64,
    pub pending_rewards: f64,
    pub start_time: u32, // unix seconds
}

impl StakePosition {
    /// Whole days since the stake was opened.
    pub fn days_staked(&self) -> i64 {
        let elapsed = Utc::now().timestamp() - self.start_time as i64;
        elapsed.max(0) / 86_400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_staked_counts_whole_days() {
        let position = StakePosition {
            staked_amount: 100.0,
            pending_rewards: 0.5,
            start_time: (Utc::now().timestamp() - 3 * 86_400 - 60) as u32,
        };

        assert_eq!(position.days_staked(), 3);
    }

    #[test]
    fn days_staked_never_negative() {
        let position = StakePosition {
            staked_amount: 1.0,
            pending_rewards: 0.0,
            start_time: (Utc::now().timestamp() + 3600) as u32,
        };

        assert_eq!(position.days_staked(), 0);
    }
}
