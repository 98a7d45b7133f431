use crate::error::Error;
use crate::math::{mul_div_half_up, to_shares};
use crate::storage::PERCENT_100;

/// Calculate the pool shares added ahead of pricing a round
///
/// The new block is sized so it equals `pool_pct` of the post-round fully
/// diluted count. With p = pool_pct / 100% the fixed point
/// `pool = p × (current + pool + new)` and `new = investment × (current + pool) / pre`
/// closes to:
///
/// pool = p × current × post / (pre − p × post)
///
/// Example:
/// - current: 8,000,000 shares, pre: 8,000,000, post: 10,000,000, p: 10%
/// - pool: 0.1 × 8,000,000 × 10,000,000 / (8,000,000 − 1,000,000) = 1,142,857
///
/// # Errors
/// - `InvalidRound`: p × post ≥ pre, the pool would absorb the whole pre-money
/// - `ArithmeticOverflow`: intermediate product exceeds i128
pub fn pool_shares_for_increase(
    current_shares: u64,
    option_pool_increase_pct: i128,
    pre_money_valuation: i128,
    post_money_valuation: i128,
) -> Result<u64, Error> {
    if option_pool_increase_pct == 0 {
        return Ok(0);
    }

    let scaled_pre = PERCENT_100
        .checked_mul(pre_money_valuation)
        .ok_or(Error::ArithmeticOverflow)?;
    let pool_claim = option_pool_increase_pct
        .checked_mul(post_money_valuation)
        .ok_or(Error::ArithmeticOverflow)?;
    let denominator = scaled_pre
        .checked_sub(pool_claim)
        .ok_or(Error::ArithmeticOverflow)?;

    if denominator <= 0 {
        return Err(Error::InvalidRound);
    }

    let numerator = option_pool_increase_pct
        .checked_mul(i128::from(current_shares))
        .ok_or(Error::ArithmeticOverflow)?;

    to_shares(mul_div_half_up(
        numerator,
        post_money_valuation,
        denominator,
    )?)
}
