use crate::error::*;

/// Safe math operations trait to prevent overflows
pub trait SafeMath<T> {
    fn safe_add(&self, other: T) -> StakeResult<T>;
    fn safe_sub(&self, other: T) -> StakeResult<T>;
    fn safe_mul(&self, other: T) -> StakeResult<T>;
    fn safe_div(&self, other: T) -> StakeResult<T>;
}

impl SafeMath<u64> for u64 {
    fn safe_add(&self, other: u64) -> StakeResult<u64> {
        self.checked_add(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_sub(&self, other: u64) -> StakeResult<u64> {
        self.checked_sub(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_mul(&self, other: u64) -> StakeResult<u64> {
        self.checked_mul(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_div(&self, other: u64) -> StakeResult<u64> {
        if other == 0 {
            return Err(StakeError::DivisionByZero);
        }
        self.checked_div(other).ok_or(StakeError::MathOverflow)
    }
}

impl SafeMath<u128> for u128 {
    fn safe_add(&self, other: u128) -> StakeResult<u128> {
        self.checked_add(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_sub(&self, other: u128) -> StakeResult<u128> {
        self.checked_sub(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_mul(&self, other: u128) -> StakeResult<u128> {
        self.checked_mul(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_div(&self, other: u128) -> StakeResult<u128> {
        if other == 0 {
            return Err(StakeError::DivisionByZero);
        }
        self.checked_div(other).ok_or(StakeError::MathOverflow)
    }
}

impl SafeMath<i64> for i64 {
    fn safe_add(&self, other: i64) -> StakeResult<i64> {
        self.checked_add(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_sub(&self, other: i64) -> StakeResult<i64> {
        self.checked_sub(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_mul(&self, other: i64) -> StakeResult<i64> {
        self.checked_mul(other).ok_or(StakeError::MathOverflow)
    }

    fn safe_div(&self, other: i64) -> StakeResult<i64> {
        if other == 0 {
            return Err(StakeError::DivisionByZero);
        }
        self.checked_div(other).ok_or(StakeError::MathOverflow)
    }
}

/// Safe casting operations
pub trait SafeCast<T> {
    fn safe_cast(&self) -> StakeResult<T>;
}

impl SafeCast<u64> for u128 {
    fn safe_cast(&self) -> StakeResult<u64> {
        if *self > u64::MAX as u128 {
            return Err(StakeError::MathOverflow);
        }
        Ok(*self as u64)
    }
}

impl SafeCast<u128> for u64 {
    fn safe_cast(&self) -> StakeResult<u128> {
        Ok(*self as u128)
    }
}

impl SafeCast<i64> for u64 {
    fn safe_cast(&self) -> StakeResult<i64> {
        if *self > i64::MAX as u64 {
            return Err(StakeError::MathOverflow);
        }
        Ok(*self as i64)
    }
}

impl SafeCast<u64> for i64 {
    fn safe_cast(&self) -> StakeResult<u64> {
        if *self < 0 {
            return Err(StakeError::MathOverflow);
        }
        Ok(*self as u64)
    }
}

/// Staking-specific math functions
pub mod stake_math {
    use super::*;

    /// Proportional reward share, floored.
    ///
    /// `floor(total_reward * snapshot / total_staked)` with the intermediate
    /// product widened to u128 so the multiplication cannot overflow.
    pub fn earned_amount(
        snapshot_amount: u64,
        total_staked: u64,
        total_reward: u64,
    ) -> StakeResult<u64> {
        if total_staked == 0 {
            return Ok(0);
        }

        let earned = (snapshot_amount as u128)
            .safe_mul(total_reward as u128)?
            .safe_div(total_staked as u128)?;

        earned.safe_cast()
    }

    /// Timestamp after which a position staked at `staked_at` may unbond.
    pub fn unlock_time(staked_at: i64, lock_period: u32) -> StakeResult<i64> {
        staked_at.safe_add(lock_period as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::stake_math::*;
    use super::*;

    #[test]
    fn test_safe_math_operations() {
        assert_eq!(10u64.safe_add(20).unwrap(), 30);
        assert!(u64::MAX.safe_add(1).is_err());

        assert_eq!(20u64.safe_sub(10).unwrap(), 10);
        assert!(10u64.safe_sub(20).is_err());

        assert_eq!(10u64.safe_mul(5).unwrap(), 50);
        assert!(u64::MAX.safe_mul(2).is_err());

        assert_eq!(20u64.safe_div(4).unwrap(), 5);
        assert!(20u64.safe_div(0).is_err());
    }

    #[test]
    fn test_safe_cast_operations() {
        assert_eq!(SafeCast::<u128>::safe_cast(&100u64).unwrap(), 100u128);
        assert_eq!(SafeCast::<u64>::safe_cast(&100u128).unwrap(), 100u64);
        assert!(SafeCast::<u64>::safe_cast(&((u64::MAX as u128) + 1)).is_err());
        assert!(SafeCast::<u64>::safe_cast(&(-1i64)).is_err());
    }

    #[test]
    fn test_earned_amount_proportional() {
        // 55 of 55_000 staked against a 20_000_000 reward pool
        assert_eq!(earned_amount(55, 55_000, 20_000_000).unwrap(), 20_000);

        // full pool to a sole staker
        assert_eq!(earned_amount(100, 100, 500).unwrap(), 500);

        // truncation, never rounding up
        assert_eq!(earned_amount(1, 3, 100).unwrap(), 33);
    }

    #[test]
    fn test_earned_amount_widened_product() {
        // snapshot * reward overflows u64 but not u128
        let earned = earned_amount(u64::MAX / 2, u64::MAX, u64::MAX).unwrap();
        assert_eq!(earned, u64::MAX / 2);
    }

    #[test]
    fn test_earned_amount_zero_denominator() {
        assert_eq!(earned_amount(10, 0, 1000).unwrap(), 0);
    }

    #[test]
    fn test_earned_never_exceeds_pool() {
        let total_reward = 1_000_003u64;
        let stakes = [7u64, 13, 999, 40_001, 58_980];
        let total: u64 = stakes.iter().sum();
        let paid: u64 = stakes
            .iter()
            .map(|s| earned_amount(*s, total, total_reward).unwrap())
            .sum();
        assert!(paid <= total_reward);
    }

    #[test]
    fn test_unlock_time() {
        assert_eq!(unlock_time(100, 3).unwrap(), 103);
        assert!(unlock_time(i64::MAX, 1).is_err());
    }
}
