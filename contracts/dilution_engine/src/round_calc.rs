use crate::error::Error;
use crate::math::{add_shares, mul_div_half_up, percentage_of, to_shares};
use crate::option_pool::pool_shares_for_increase;
use crate::storage::PERCENT_100;
use crate::validation::validate_round_terms;

/// Issuance and valuation outputs of one priced round
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundOutcome {
    pub post_money_valuation: i128,
    pub price_per_share: i128,
    pub pool_shares_added: u64,
    pub new_shares_issued: u64,
    pub new_investor_ownership_pct: i128,
    pub existing_ownership_pct: i128,
    /// Ownership lost by pre-round holders to the pool and the new investor
    pub dilution_pct: i128,
    pub total_shares_after: u64,
}

/// Price a single round against the shares outstanding before it
///
/// The option pool is expanded first, so its cost falls on the pre-round
/// holders and the new money is priced on the enlarged count.
///
/// Formula:
/// - post_money = pre_money + investment
/// - price_per_share = pre_money / (current + pool)
/// - new_shares = investment × (current + pool) / pre_money
///
/// Example:
/// - current: 10,000,000 shares, pre: 10,000,000, investment: 2,000,000
/// - price: 1.00, new shares: 2,000,000, post: 12,000,000
/// - new investor: 16.67%, existing: 83.33%
///
/// # Errors
/// - `InvalidRound`: investment or pre-money not positive, pool outside 0-100%
/// - `DivisionByZero`: no shares outstanding
/// - `ArithmeticOverflow`: fixed-point intermediate exceeds i128
pub fn calculate_round(
    current_shares: u64,
    pre_money_valuation: i128,
    investment_amount: i128,
    option_pool_increase_pct: i128,
) -> Result<RoundOutcome, Error> {
    validate_round_terms(
        pre_money_valuation,
        investment_amount,
        option_pool_increase_pct,
    )?;

    if current_shares == 0 {
        return Err(Error::DivisionByZero);
    }

    let post_money_valuation = pre_money_valuation
        .checked_add(investment_amount)
        .ok_or(Error::ArithmeticOverflow)?;

    let pool_shares_added = pool_shares_for_increase(
        current_shares,
        option_pool_increase_pct,
        pre_money_valuation,
        post_money_valuation,
    )?;
    let priced_shares = add_shares(current_shares, pool_shares_added)?;

    let price_per_share = mul_div_half_up(pre_money_valuation, 1, i128::from(priced_shares))?;

    // Derived from the exact ratio, not from the rounded price
    let new_shares_issued = to_shares(mul_div_half_up(
        investment_amount,
        i128::from(priced_shares),
        pre_money_valuation,
    )?)?;

    let total_shares_after = add_shares(priced_shares, new_shares_issued)?;
    let new_investor_ownership_pct = percentage_of(new_shares_issued, total_shares_after)?;
    let dilution_pct = percentage_of(
        add_shares(pool_shares_added, new_shares_issued)?,
        total_shares_after,
    )?;

    Ok(RoundOutcome {
        post_money_valuation,
        price_per_share,
        pool_shares_added,
        new_shares_issued,
        new_investor_ownership_pct,
        existing_ownership_pct: PERCENT_100 - new_investor_ownership_pct,
        dilution_pct,
        total_shares_after,
    })
}
